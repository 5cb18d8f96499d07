//! # CabinTemp Core Library
//!
//! Core logic for the CabinTemp cockpit advisory add-on. It watches the
//! simulated cabin temperature, compares it against a user comfort target,
//! and issues throttled voiced advisories while passengers are aboard.
//!
//! ## Architecture
//!
//! - **Advisory Engine**: A tick-driven state machine. No internal thread --
//!   the host calls `tick()` at the plugin interval (10 s by default).
//! - **Telemetry**: Named live signals read through the [`TelemetrySource`]
//!   trait; read failures degrade to "no advisory this tick", never panic.
//! - **Settings**: TOML-backed comfort temperature and enable flag,
//!   loaded at start and flushed at shutdown.
//!
//! ## Key Components
//!
//! - [`AdvisoryEngine`]: The per-tick decision state machine
//! - [`CabinTempPlugin`]: Lifecycle wrapper (start/enable/disable/stop)
//! - [`SettingsStore`]: Comfort-settings persistence
//! - [`TelemetrySource`] / [`Announcer`]: Simulator-facing seams

pub mod advisory;
pub mod announce;
pub mod error;
pub mod events;
pub mod plugin;
pub mod settings;
pub mod telemetry;

pub use advisory::{
    classify, AdvisoryEngine, AdvisoryKind, AdvisoryThrottle, AircraftDetector, AircraftSpec,
    BoardingEvent, BoardingTracker, EngineState, UiSnapshot,
};
pub use announce::{Announcer, LogAnnouncer, NullAnnouncer};
pub use error::{CoreError, SettingsError, TelemetryError, ValidationError};
pub use events::Event;
pub use plugin::{CabinTempPlugin, PluginIdentity};
pub use settings::{ComfortSettings, SettingsStore};
pub use telemetry::{
    Reading, ScriptedTelemetry, SignalHandles, TelemetryFrame, TelemetryHandle, TelemetrySource,
};
