use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::advisory::AdvisoryKind;

/// Every externally visible engine transition produces an Event.
/// The presentation layer polls these each tick.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum Event {
    /// A supported aircraft model was recognized; telemetry handles acquired.
    AircraftDetected { model: String, at: DateTime<Utc> },
    /// The supported aircraft was unloaded; handles released, bookkeeping reset.
    AircraftLost { at: DateTime<Utc> },
    /// Passengers started boarding. `spoken` carries the composed utterance
    /// (boarding announcement plus optional conditioning reminder) when
    /// advisories are enabled.
    BoardingStarted {
        at: DateTime<Utc>,
        spoken: Option<String>,
    },
    PassengersDisembarked { at: DateTime<Utc> },
    /// A throttled check classified the cabin outside the comfort band.
    AdvisoryRaised {
        kind: AdvisoryKind,
        message: String,
        /// False when the user has advisories disabled.
        spoken: bool,
        at: DateTime<Utc>,
    },
}
