//! Live telemetry access.
//!
//! The simulator exposes named signals (cabin temperature, boarding flag).
//! The engine resolves a handle per signal when a supported aircraft is
//! detected and drops the handles when detection is lost. Reads can fail at
//! any tick -- failures are logged and surface as `None` in the [`Reading`],
//! never as a panic or a propagated error.

use std::cell::Cell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::TelemetryError;

/// Cabin temperature signal, degrees Celsius (float).
pub const CABIN_TEMP_SIGNAL: &str = "laminar/B738/cabin_temp";
/// Boarding / leg-started flag (integer, non-zero while passengers board).
pub const LEG_STARTED_SIGNAL: &str = "laminar/b738/fmodpack/leg_started";

/// Opaque handle to a named telemetry signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryHandle {
    name: String,
}

impl TelemetryHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Data access into the simulator.
///
/// Implementations must not block; every method is called from inside the
/// periodic tick.
pub trait TelemetrySource {
    /// Path of the currently loaded aircraft model.
    fn aircraft_path(&self) -> String;

    /// Resolve a named signal. `None` if the signal does not exist.
    fn find(&self, name: &str) -> Option<TelemetryHandle>;

    fn read_float(&self, handle: &TelemetryHandle) -> Result<f64, TelemetryError>;

    fn read_int(&self, handle: &TelemetryHandle) -> Result<i64, TelemetryError>;
}

/// The two signal handles the engine holds while an aircraft is active.
#[derive(Debug, Clone)]
pub struct SignalHandles {
    pub cabin_temp: TelemetryHandle,
    pub leg_started: TelemetryHandle,
}

impl SignalHandles {
    /// Resolve both required handles. `None` if either signal is missing,
    /// in which case the engine stays on its soft-failure path and retries
    /// next tick.
    pub fn acquire(source: &dyn TelemetrySource) -> Option<Self> {
        let cabin_temp = source.find(CABIN_TEMP_SIGNAL)?;
        let leg_started = source.find(LEG_STARTED_SIGNAL)?;
        Some(Self {
            cabin_temp,
            leg_started,
        })
    }
}

/// One tick's worth of live readings. `None` models a failed read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub cabin_temperature: Option<f64>,
    pub pax_onboard: Option<bool>,
}

impl Reading {
    /// Sample both signals, absorbing read failures locally.
    ///
    /// Cabin temperature is rounded to one decimal for display.
    pub fn sample(source: &dyn TelemetrySource, handles: &SignalHandles) -> Self {
        let cabin_temperature = match source.read_float(&handles.cabin_temp) {
            Ok(v) => Some((v * 10.0).round() / 10.0),
            Err(e) => {
                log::warn!("cabin temperature read failed: {e}");
                None
            }
        };
        let pax_onboard = match source.read_int(&handles.leg_started) {
            Ok(v) => Some(v != 0),
            Err(e) => {
                log::warn!("boarding flag read failed: {e}");
                None
            }
        };
        Self {
            cabin_temperature,
            pax_onboard,
        }
    }
}

/// One scripted simulator state: what the two signals report while this
/// frame is current. `None` plays back as a read failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TelemetryFrame {
    pub aircraft_path: String,
    pub cabin_temperature: Option<f64>,
    pub pax_onboard: Option<bool>,
}

/// Scripted telemetry source for tests and the CLI demo loop.
///
/// Plays back a fixed sequence of frames; the host calls [`advance`]
/// between ticks. The last frame repeats once the script is exhausted.
/// Clones share the playback cursor, so the host can keep one handle to
/// step the script while the engine owns another.
///
/// [`advance`]: ScriptedTelemetry::advance
#[derive(Debug, Clone)]
pub struct ScriptedTelemetry {
    inner: Rc<ScriptInner>,
}

#[derive(Debug)]
struct ScriptInner {
    frames: Vec<TelemetryFrame>,
    cursor: Cell<usize>,
}

impl ScriptedTelemetry {
    pub fn new(frames: Vec<TelemetryFrame>) -> Self {
        Self {
            inner: Rc::new(ScriptInner {
                frames,
                cursor: Cell::new(0),
            }),
        }
    }

    /// Move to the next frame, saturating at the end of the script.
    pub fn advance(&self) {
        let inner = &self.inner;
        let next = (inner.cursor.get() + 1).min(inner.frames.len().saturating_sub(1));
        inner.cursor.set(next);
    }

    pub fn frame_index(&self) -> usize {
        self.inner.cursor.get()
    }

    pub fn len(&self) -> usize {
        self.inner.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.frames.is_empty()
    }

    fn current(&self) -> Option<&TelemetryFrame> {
        self.inner.frames.get(self.inner.cursor.get())
    }
}

impl TelemetrySource for ScriptedTelemetry {
    fn aircraft_path(&self) -> String {
        self.current()
            .map(|f| f.aircraft_path.clone())
            .unwrap_or_default()
    }

    fn find(&self, name: &str) -> Option<TelemetryHandle> {
        match name {
            CABIN_TEMP_SIGNAL | LEG_STARTED_SIGNAL => Some(TelemetryHandle::new(name)),
            _ => None,
        }
    }

    fn read_float(&self, handle: &TelemetryHandle) -> Result<f64, TelemetryError> {
        if handle.name() != CABIN_TEMP_SIGNAL {
            return Err(TelemetryError::SignalNotFound(handle.name().to_string()));
        }
        self.current()
            .and_then(|f| f.cabin_temperature)
            .ok_or_else(|| TelemetryError::ReadFailed(handle.name().to_string()))
    }

    fn read_int(&self, handle: &TelemetryHandle) -> Result<i64, TelemetryError> {
        if handle.name() != LEG_STARTED_SIGNAL {
            return Err(TelemetryError::SignalNotFound(handle.name().to_string()));
        }
        self.current()
            .and_then(|f| f.pax_onboard)
            .map(i64::from)
            .ok_or_else(|| TelemetryError::ReadFailed(handle.name().to_string()))
    }
}
