//! Threshold classification of cabin temperature.
//!
//! Pure and total: maps the delta between cabin and comfort temperature to
//! an advisory kind, or `None` inside the comfort band.

use serde::{Deserialize, Serialize};

/// Delta at which passengers start asking for a change, degrees C.
pub const DELTA_REQUEST: f64 = 4.0;
/// Delta at which the cabin is well outside comfort, degrees C.
pub const DELTA_LIMIT: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryKind {
    VeryCold,
    TooCold,
    TooHot,
    VeryHot,
}

impl AdvisoryKind {
    /// The aural message for this advisory.
    pub fn message(self) -> &'static str {
        match self {
            AdvisoryKind::VeryHot => "it's really hot in the cabin",
            AdvisoryKind::TooHot => "could we cool down the cabin a bit please?",
            AdvisoryKind::TooCold => "passengers are asking for a cozier temperature",
            AdvisoryKind::VeryCold => "we are freezing in the cabin",
        }
    }
}

/// Classify a cabin temperature against the comfort target.
///
/// Comparison order matters at the boundaries: exactly -DELTA_LIMIT stays
/// TooCold and exactly +DELTA_LIMIT stays TooHot, while the request
/// thresholds are inclusive on both sides.
pub fn classify(cabin_temperature: f64, comfort_temperature: f64) -> Option<AdvisoryKind> {
    let delta = cabin_temperature - comfort_temperature;
    if delta < -DELTA_LIMIT {
        Some(AdvisoryKind::VeryCold)
    } else if delta <= -DELTA_REQUEST {
        Some(AdvisoryKind::TooCold)
    } else if delta > DELTA_LIMIT {
        Some(AdvisoryKind::VeryHot)
    } else if delta >= DELTA_REQUEST {
        Some(AdvisoryKind::TooHot)
    } else {
        None
    }
}
