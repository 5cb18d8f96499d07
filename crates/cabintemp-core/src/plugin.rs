//! Plugin lifecycle wrapper.
//!
//! Mirrors the host simulator's start/enable/disable/stop hooks around the
//! advisory engine: settings are loaded once at start and flushed at stop,
//! and ticks are only delivered while the plugin is enabled. Scheduling is
//! host-driven -- the wrapper exposes the interval, the host owns the clock.

use chrono::{DateTime, Utc};
use std::time::Duration;

use crate::advisory::AdvisoryEngine;
use crate::announce::Announcer;
use crate::error::SettingsError;
use crate::events::Event;
use crate::settings::SettingsStore;
use crate::telemetry::TelemetrySource;

pub const PLUGIN_NAME: &str = "CabinTemp";
pub const PLUGIN_SIGNATURE: &str = "cabintemp.advisory";
pub const PLUGIN_DESCRIPTION: &str = "Cabin temperature comfort advisories";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Seconds between ticks unless the host overrides it.
pub const DEFAULT_TICK_INTERVAL_SECS: u64 = 10;

/// Identity registered with the host at start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginIdentity {
    pub name: String,
    pub signature: String,
    pub description: String,
}

/// The advisory add-on as the host sees it.
pub struct CabinTempPlugin {
    engine: AdvisoryEngine,
    store: SettingsStore,
    tick_interval: Duration,
    enabled: bool,
}

impl CabinTempPlugin {
    /// Start hook: load persisted settings and build the engine.
    pub fn start(
        telemetry: Box<dyn TelemetrySource>,
        announcer: Box<dyn Announcer>,
        store: SettingsStore,
    ) -> Self {
        let settings = store.load();
        log::info!(
            "{PLUGIN_NAME} v{VERSION} starting (comfort {} C, advisories {})",
            settings.comfort_temp,
            if settings.enabled { "on" } else { "off" }
        );
        Self {
            engine: AdvisoryEngine::new(telemetry, announcer, settings),
            store,
            tick_interval: Duration::from_secs(DEFAULT_TICK_INTERVAL_SECS),
            enabled: false,
        }
    }

    pub fn identity(&self) -> PluginIdentity {
        PluginIdentity {
            name: format!("{PLUGIN_NAME} - v{VERSION}"),
            signature: PLUGIN_SIGNATURE.to_string(),
            description: PLUGIN_DESCRIPTION.to_string(),
        }
    }

    /// Enable hook: begin accepting ticks at `tick_interval`.
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Disable hook: stop accepting ticks. State is kept for re-enable.
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn set_tick_interval(&mut self, interval: Duration) {
        self.tick_interval = interval;
    }

    /// Deliver one tick to the engine. No-op while disabled.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Vec<Event> {
        if !self.enabled {
            return Vec::new();
        }
        self.engine.tick(now)
    }

    pub fn engine(&self) -> &AdvisoryEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut AdvisoryEngine {
        &mut self.engine
    }

    /// Stop hook: cancel ticking, flush settings, release handles.
    pub fn stop(&mut self) -> Result<(), SettingsError> {
        self.enabled = false;
        self.engine.shutdown();
        self.store.save(self.engine.settings())?;
        log::info!("{PLUGIN_NAME} stopped, settings flushed");
        Ok(())
    }
}
