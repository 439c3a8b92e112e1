//! Plan selection state for an interactive front end.
//!
//! A [`Session`] is the explicit context object a UI drives. It tracks which
//! plan is selected, or whether a new plan is being put together, and routes
//! every transition through the [`Planner`] so the stored active-plan pointer
//! stays in step with what is shown.

use std::num::NonZeroU32;

use log::info;

use crate::{
    error::{Result, WatchPlanError},
    models::{Plan, Playlist},
    params::{CreatePlan, Id},
    playlist::{extract_playlist_id, PlaylistSource},
    planner::Planner,
    scheduler::generate_day_wise_plan,
};

/// What the session is currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Nothing selected and nothing stored
    NoActivePlan,
    /// The plan with this ID is selected
    ActivePlan(String),
    /// A new plan is being configured; `draft` holds the fetched playlist
    AddingNewPlan { draft: Option<Playlist> },
}

/// Selection context for one UI surface.
#[derive(Debug, Clone)]
pub struct Session {
    selection: Selection,
}

impl Session {
    /// A session with nothing selected.
    pub fn new() -> Self {
        Self {
            selection: Selection::NoActivePlan,
        }
    }

    /// Restores the selection from storage.
    ///
    /// Starts in [`Selection::ActivePlan`] when the plans store or the legacy
    /// slot yields an active plan, otherwise in [`Selection::NoActivePlan`].
    pub async fn restore(planner: &Planner) -> Result<Self> {
        let selection = match planner.get_active_plan().await? {
            Some(plan) => Selection::ActivePlan(plan.id),
            None => Selection::NoActivePlan,
        };
        info!("Session restored with {selection:?}");
        Ok(Self { selection })
    }

    /// The current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// ID of the selected plan, if a plan is selected.
    pub fn active_plan_id(&self) -> Option<&str> {
        match &self.selection {
            Selection::ActivePlan(id) => Some(id),
            _ => None,
        }
    }

    /// The playlist loaded for the plan being configured.
    pub fn draft(&self) -> Option<&Playlist> {
        match &self.selection {
            Selection::AddingNewPlan { draft } => draft.as_ref(),
            _ => None,
        }
    }

    /// Enters plan configuration, discarding any previous draft.
    pub fn begin_new_plan(&mut self) {
        self.selection = Selection::AddingNewPlan { draft: None };
    }

    /// Stores a fetched playlist as the draft of the plan being configured.
    ///
    /// # Errors
    ///
    /// Returns `WatchPlanError::InvalidInput` unless a new plan is being
    /// configured.
    pub fn attach_playlist(&mut self, playlist: Playlist) -> Result<()> {
        match &mut self.selection {
            Selection::AddingNewPlan { draft } => {
                *draft = Some(playlist);
                Ok(())
            }
            _ => Err(WatchPlanError::invalid_input("playlist")
                .with_reason("start a new plan before loading a playlist")),
        }
    }

    /// Resolves `playlist_ref` to an ID, fetches it from `source` and stores
    /// it as the draft.
    ///
    /// # Errors
    ///
    /// Returns `WatchPlanError::InvalidInput` for a blank or unrecognized
    /// reference and `WatchPlanError::Fetch` when the source fails.
    pub async fn load_playlist<S: PlaylistSource>(
        &mut self,
        source: &S,
        playlist_ref: &str,
    ) -> Result<()> {
        if !matches!(self.selection, Selection::AddingNewPlan { .. }) {
            return Err(WatchPlanError::invalid_input("playlist")
                .with_reason("start a new plan before loading a playlist"));
        }

        let playlist_id = extract_playlist_id(playlist_ref)?.ok_or_else(|| {
            WatchPlanError::invalid_input("playlist").with_reason(format!(
                "'{playlist_ref}' is not a playlist URL, expected https://www.youtube.com/playlist?list=..."
            ))
        })?;
        let playlist = source.fetch_playlist(&playlist_id).await?;
        info!(
            "Loaded playlist '{}' with {} videos",
            playlist.title,
            playlist.videos.len()
        );
        self.attach_playlist(playlist)
    }

    /// Schedules the draft, saves it as a plan and selects it.
    ///
    /// On failure the session stays in [`Selection::AddingNewPlan`] with its
    /// draft intact.
    ///
    /// # Errors
    ///
    /// Returns `WatchPlanError::InvalidInput` when no playlist was loaded or
    /// the playlist produced an empty schedule.
    pub async fn commit_new_plan(
        &mut self,
        planner: &Planner,
        daily_minutes: NonZeroU32,
    ) -> Result<Plan> {
        let Selection::AddingNewPlan {
            draft: Some(playlist),
        } = &self.selection
        else {
            return Err(WatchPlanError::invalid_input("playlist").with_reason("Please fetch a playlist first"));
        };

        let days = generate_day_wise_plan(&playlist.videos, daily_minutes);
        if days.is_empty() {
            return Err(WatchPlanError::invalid_input("playlist")
                .with_reason("Could not generate plan: the playlist has no videos"));
        }

        let plan = planner
            .create_plan(&CreatePlan {
                playlist: playlist.clone(),
                daily_minutes,
                days,
            })
            .await?;
        planner.set_active_plan(&Id { id: plan.id.clone() }).await?;

        self.selection = Selection::ActivePlan(plan.id.clone());
        Ok(plan)
    }

    /// Selects an existing plan and records it as active.
    ///
    /// # Errors
    ///
    /// Returns `WatchPlanError::NotFound` for an unknown ID; the selection is
    /// left unchanged.
    pub async fn select(&mut self, planner: &Planner, params: &Id) -> Result<()> {
        planner.set_active_plan(params).await?;
        self.selection = Selection::ActivePlan(params.id.clone());
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
