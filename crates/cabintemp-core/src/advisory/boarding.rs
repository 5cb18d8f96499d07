//! Boarding session tracking.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardingEvent {
    SessionStarted,
    SessionEnded,
    NoChange,
}

/// Tracks whether passengers are aboard and when the current boarding
/// session began.
///
/// `started_at` is `Some` exactly while a session is active, so the
/// invariant of the data model holds by representation.
#[derive(Debug, Clone, Default)]
pub struct BoardingTracker {
    started_at: Option<DateTime<Utc>>,
}

impl BoardingTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    /// Feed the current boarding flag; detects session edges.
    pub fn update(&mut self, pax_onboard: bool, now: DateTime<Utc>) -> BoardingEvent {
        match (self.started_at.is_some(), pax_onboard) {
            (false, true) => {
                self.started_at = Some(now);
                BoardingEvent::SessionStarted
            }
            (true, false) => {
                self.started_at = None;
                BoardingEvent::SessionEnded
            }
            _ => BoardingEvent::NoChange,
        }
    }

    /// Drop any open session, e.g. when the aircraft is unloaded mid-flight.
    pub fn reset(&mut self) {
        self.started_at = None;
    }
}
