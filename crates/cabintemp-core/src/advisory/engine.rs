//! Advisory engine implementation.
//!
//! The engine is a tick-driven state machine. It does not use internal
//! threads or timers -- the host calls `tick()` at the plugin interval.
//!
//! ## State Transitions
//!
//! ```text
//! Dormant -> NoPassengers -> Boarding -> Monitoring -> NoPassengers
//!    ^                                                      |
//!    +---------------- aircraft unloaded -------------------+
//! ```
//!
//! Each tick: resolve the loaded aircraft, read the live signals, track the
//! boarding session, and -- at most once per throttle window -- classify the
//! cabin temperature into a spoken advisory.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::boarding::{BoardingEvent, BoardingTracker};
use super::classifier::classify;
use super::detector::AircraftDetector;
use super::throttle::AdvisoryThrottle;
use crate::announce::Announcer;
use crate::error::ValidationError;
use crate::events::Event;
use crate::settings::{self, ComfortSettings};
use crate::telemetry::{Reading, SignalHandles, TelemetrySource};

pub const STATUS_NOT_DETECTED: &str = "aircraft not detected";
pub const STATUS_SENSOR_UNAVAILABLE: &str = "cabin temperature unavailable";
pub const STATUS_BOARDING_STARTED: &str = "Boarding started ...";
pub const STATUS_NOT_STARTED: &str = "Boarding not started yet ...";
pub const STATUS_DISEMBARKED: &str = "Passengers disembarked";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineState {
    /// No supported aircraft loaded; no telemetry reads attempted.
    Dormant,
    /// Aircraft active, no boarding session open.
    NoPassengers,
    /// Boarding session open, before the first throttle-eligible check.
    Boarding,
    /// Boarding session open, throttled checks proceeding.
    Monitoring,
}

/// Plain data record the presentation layer polls each tick.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UiSnapshot {
    pub active: bool,
    pub detected_model: Option<String>,
    pub state: EngineState,
    pub status: String,
    pub cabin_temperature: Option<f64>,
    pub comfort_temperature: i32,
    /// cabin - comfort, when a cabin reading is available.
    pub delta: Option<f64>,
    pub advisory_enabled: bool,
}

/// The per-tick advisory decision engine.
///
/// Owns all mutable state; collaborators come in behind trait objects so
/// hosts and tests can swap the simulator and the voice channel.
pub struct AdvisoryEngine {
    telemetry: Box<dyn TelemetrySource>,
    announcer: Box<dyn Announcer>,
    settings: ComfortSettings,
    detector: AircraftDetector,
    boarding: BoardingTracker,
    throttle: AdvisoryThrottle,
    handles: Option<SignalHandles>,
    state: EngineState,
    status: String,
    last_reading: Option<Reading>,
}

impl AdvisoryEngine {
    pub fn new(
        telemetry: Box<dyn TelemetrySource>,
        announcer: Box<dyn Announcer>,
        settings: ComfortSettings,
    ) -> Self {
        Self {
            telemetry,
            announcer,
            settings,
            detector: AircraftDetector::default(),
            boarding: BoardingTracker::new(),
            throttle: AdvisoryThrottle::new(),
            handles: None,
            state: EngineState::Dormant,
            status: STATUS_NOT_DETECTED.to_string(),
            last_reading: None,
        }
    }

    /// Replace the detector table (tests, other fleets).
    pub fn with_detector(mut self, detector: AircraftDetector) -> Self {
        self.detector = detector;
        self
    }

    /// Override the throttle window, in minutes.
    pub fn with_throttle_window_minutes(mut self, minutes: i64) -> Self {
        self.throttle = AdvisoryThrottle::with_window_minutes(minutes);
        self
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn settings(&self) -> ComfortSettings {
        self.settings
    }

    pub fn detected_model(&self) -> Option<&'static str> {
        self.detector.detected()
    }

    pub fn last_checked_at(&self) -> Option<DateTime<Utc>> {
        self.throttle.last_checked_at()
    }

    pub fn boarding_started_at(&self) -> Option<DateTime<Utc>> {
        self.boarding.started_at()
    }

    /// Snapshot for the settings surface. The detail panel shows/hides on
    /// `active`.
    pub fn snapshot(&self) -> UiSnapshot {
        let cabin_temperature = self.last_reading.and_then(|r| r.cabin_temperature);
        UiSnapshot {
            active: self.detector.detected().is_some(),
            detected_model: self.detector.detected().map(str::to_string),
            state: self.state,
            status: self.status.clone(),
            cabin_temperature,
            comfort_temperature: self.settings.comfort_temp,
            delta: cabin_temperature.map(|t| t - f64::from(self.settings.comfort_temp)),
            advisory_enabled: self.settings.enabled,
        }
    }

    // ── User-initiated settings updates ──────────────────────────────

    /// Update the comfort target. Invalid values leave the prior target
    /// unchanged and surface the validation error to the caller.
    pub fn set_comfort_temperature(&mut self, value: i32) -> Result<(), ValidationError> {
        settings::validate_comfort_temp(value)?;
        self.settings.comfort_temp = value;
        Ok(())
    }

    pub fn set_advisory_enabled(&mut self, enabled: bool) {
        self.settings.enabled = enabled;
    }

    // ── Tick ─────────────────────────────────────────────────────────

    /// Drive one evaluation cycle. Never panics and never propagates a
    /// telemetry failure; a failed read degrades to a status line.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Vec<Event> {
        let mut events = Vec::new();

        let path = self.telemetry.aircraft_path();
        let before = self.detector.detected();
        let detected = self.detector.detect(&path);
        if detected != before {
            match detected {
                Some(model) => {
                    log::info!("aircraft detected: {model}");
                    self.handles = SignalHandles::acquire(self.telemetry.as_ref());
                    events.push(Event::AircraftDetected {
                        model: model.to_string(),
                        at: now,
                    });
                }
                None => {
                    log::info!("aircraft unloaded, engine dormant");
                    self.handles = None;
                    self.boarding.reset();
                    self.throttle.reset();
                    self.last_reading = None;
                    events.push(Event::AircraftLost { at: now });
                }
            }
        }

        if self.detector.detected().is_none() {
            self.state = EngineState::Dormant;
            self.status = STATUS_NOT_DETECTED.to_string();
            return events;
        }

        // Handles can be missing right after detection if the aircraft's
        // signals are not published yet; retry each tick.
        if self.handles.is_none() {
            self.handles = SignalHandles::acquire(self.telemetry.as_ref());
        }
        let Some(handles) = self.handles.as_ref() else {
            log::warn!("telemetry signals not available, skipping tick");
            self.status = STATUS_SENSOR_UNAVAILABLE.to_string();
            return events;
        };

        let reading = Reading::sample(self.telemetry.as_ref(), handles);
        self.last_reading = Some(reading);
        let Some(cabin_temp) = reading.cabin_temperature else {
            // Soft failure: keep the previous state, no advisory this tick.
            self.status = STATUS_SENSOR_UNAVAILABLE.to_string();
            return events;
        };
        // An unreadable boarding flag counts as "no passengers" this tick.
        let pax_onboard = reading.pax_onboard.unwrap_or(false);
        let comfort = f64::from(self.settings.comfort_temp);

        match self.boarding.update(pax_onboard, now) {
            BoardingEvent::SessionStarted => {
                self.state = EngineState::Boarding;
                self.status = STATUS_BOARDING_STARTED.to_string();
                // Boarding start counts as a throttled check: the first
                // monitoring check waits a full window.
                self.throttle.record(now);
                let spoken = if self.settings.enabled {
                    let text = match classify(cabin_temp, comfort) {
                        Some(kind) => format!("Boarding started. Captain, {}", kind.message()),
                        None => "Boarding started".to_string(),
                    };
                    self.announcer.speak(&text);
                    Some(text)
                } else {
                    None
                };
                events.push(Event::BoardingStarted { at: now, spoken });
            }
            BoardingEvent::SessionEnded => {
                self.state = EngineState::NoPassengers;
                self.status = STATUS_DISEMBARKED.to_string();
                self.throttle.reset();
                events.push(Event::PassengersDisembarked { at: now });
            }
            BoardingEvent::NoChange if !self.boarding.active() => {
                self.state = EngineState::NoPassengers;
                self.status = STATUS_NOT_STARTED.to_string();
            }
            BoardingEvent::NoChange => {
                if self.throttle.should_check(now) {
                    // Record regardless of outcome.
                    self.throttle.record(now);
                    self.state = EngineState::Monitoring;
                    if let Some(kind) = classify(cabin_temp, comfort) {
                        let message = kind.message().to_string();
                        self.status = message.clone();
                        let spoken = self.settings.enabled;
                        if spoken {
                            self.announcer.speak(&format!("Captain, {message}"));
                        }
                        events.push(Event::AdvisoryRaised {
                            kind,
                            message,
                            spoken,
                            at: now,
                        });
                    }
                    // In-band classification leaves the prior status up.
                }
            }
        }

        events
    }

    /// Clean teardown: release telemetry handles and drop session
    /// bookkeeping. The caller stops delivering ticks afterwards.
    pub fn shutdown(&mut self) {
        self.handles = None;
        self.boarding.reset();
        self.throttle.reset();
        self.last_reading = None;
        self.state = EngineState::Dormant;
        log::info!("advisory engine shut down");
    }
}
