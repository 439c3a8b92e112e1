//! Terminal rendering of markdown output.
//!
//! Rich mode styles inline markdown with termimad and colors headings; day
//! headings of watched days are shown in green. Plain mode prints the
//! markdown as is.

use std::{
    fmt::Display,
    io::{self, Write},
};

use anyhow::Result;
use termimad::{
    crossterm::style::{Color, Stylize},
    MadSkin,
};

const WATCHED_MARK: char = '✓';

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Prints `content` to stdout.
    pub fn render(&self, content: &impl Display) -> Result<()> {
        let markdown = content.to_string();
        let mut out = io::stdout().lock();

        if !self.rich_enabled {
            write!(out, "{markdown}")?;
            return Ok(());
        }

        for line in markdown.lines() {
            if !line.starts_with('#') {
                writeln!(out, "{}", self.skin.inline(line))?;
            } else if line.contains(WATCHED_MARK) {
                writeln!(out, "{}", line.green().bold())?;
            } else {
                writeln!(out, "{}", line.blue().bold())?;
            }
        }
        Ok(())
    }
}
