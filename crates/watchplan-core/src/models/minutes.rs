//! Lenient minute fields.
//!
//! Stored documents and playlist payloads carry minutes as plain JSON
//! numbers, which may be fractional. Fractions round up so a partially
//! started minute still reserves budget; negative and non-finite values are
//! rejected.

use serde::{de::Error, Deserialize, Deserializer};

fn round_up<E: Error>(raw: f64) -> Result<u32, E> {
    if !raw.is_finite() || raw < 0.0 {
        return Err(E::custom(format!(
            "minutes must be a non-negative number, got {raw}"
        )));
    }
    let minutes = raw.ceil();
    if minutes > f64::from(u32::MAX) {
        return Err(E::custom(format!("{raw} minutes is too large")));
    }
    Ok(minutes as u32)
}

/// Deserializes a required minute count.
pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    round_up(f64::deserialize(deserializer)?)
}

/// Deserializes an optional minute offset; `null` reads as `None`.
pub(crate) fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer)?
        .map(round_up::<D::Error>)
        .transpose()
}
