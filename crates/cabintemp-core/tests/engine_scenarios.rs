//! End-to-end advisory scenarios.
//!
//! Drives the full plugin (lifecycle + engine + settings persistence)
//! against a scripted telemetry source with a controlled clock.

use chrono::{DateTime, Duration, TimeZone, Utc};
use std::cell::RefCell;
use std::rc::Rc;

use cabintemp_core::{
    AdvisoryEngine, Announcer, CabinTempPlugin, ComfortSettings, EngineState, Event,
    ScriptedTelemetry, SettingsStore, TelemetryFrame,
};

const ZIBO_PATH: &str = "Aircraft/Boeing B737-800X/b738.acf";

#[derive(Clone, Default)]
struct RecordingAnnouncer(Rc<RefCell<Vec<String>>>);

impl Announcer for RecordingAnnouncer {
    fn speak(&mut self, text: &str) {
        self.0.borrow_mut().push(text.to_string());
    }
}

fn frame(path: &str, temp: Option<f64>, pax: Option<bool>) -> TelemetryFrame {
    TelemetryFrame {
        aircraft_path: path.to_string(),
        cabin_temperature: temp,
        pax_onboard: pax,
    }
}

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()
}

#[test]
fn hot_cabin_speaks_very_hot_after_window() {
    // comfort 21, cabin 30 -> delta 9 -> VeryHot once the window elapsed
    let telemetry = ScriptedTelemetry::new(vec![
        frame(ZIBO_PATH, Some(30.0), Some(true)),
        frame(ZIBO_PATH, Some(30.0), Some(true)),
    ]);
    let announcer = RecordingAnnouncer::default();
    let spoken = announcer.0.clone();
    let mut engine = AdvisoryEngine::new(
        Box::new(telemetry.clone()),
        Box::new(announcer),
        ComfortSettings::default(),
    );

    engine.tick(t0());
    spoken.borrow_mut().clear();

    telemetry.advance();
    let now = t0() + Duration::minutes(5) + Duration::seconds(1);
    let events = engine.tick(now);

    assert_eq!(engine.status(), "it's really hot in the cabin");
    assert_eq!(
        spoken.borrow().as_slice(),
        ["Captain, it's really hot in the cabin"]
    );
    assert_eq!(engine.last_checked_at(), Some(now));
    assert!(matches!(
        events[..],
        [Event::AdvisoryRaised { spoken: true, .. }]
    ));
}

#[test]
fn boarding_start_composes_reminder_into_one_utterance() {
    // cabin 26, comfort 21 -> delta 5 -> TooHot reminder at boarding
    let telemetry = ScriptedTelemetry::new(vec![
        frame(ZIBO_PATH, Some(26.0), Some(false)),
        frame(ZIBO_PATH, Some(26.0), Some(true)),
    ]);
    let announcer = RecordingAnnouncer::default();
    let spoken = announcer.0.clone();
    let mut engine = AdvisoryEngine::new(
        Box::new(telemetry.clone()),
        Box::new(announcer),
        ComfortSettings::default(),
    );

    engine.tick(t0());
    assert_eq!(engine.state(), EngineState::NoPassengers);
    assert!(spoken.borrow().is_empty());

    telemetry.advance();
    engine.tick(t0() + Duration::seconds(10));
    assert_eq!(engine.status(), "Boarding started ...");
    assert_eq!(
        spoken.borrow().as_slice(),
        ["Boarding started. Captain, could we cool down the cabin a bit please?"]
    );
}

#[test]
fn full_turnaround_cycle() {
    let telemetry = ScriptedTelemetry::new(vec![
        frame("Aircraft/Cessna 172/c172.acf", None, None), // unsupported
        frame(ZIBO_PATH, Some(21.0), Some(false)),         // parked, empty
        frame(ZIBO_PATH, Some(20.5), Some(true)),          // boarding
        frame(ZIBO_PATH, Some(16.0), Some(true)),          // cabin cooling down
        frame(ZIBO_PATH, Some(16.0), Some(false)),         // disembarked
    ]);
    let announcer = RecordingAnnouncer::default();
    let spoken = announcer.0.clone();
    let mut engine = AdvisoryEngine::new(
        Box::new(telemetry.clone()),
        Box::new(announcer),
        ComfortSettings::default(),
    );

    let mut now = t0();
    engine.tick(now);
    assert_eq!(engine.state(), EngineState::Dormant);

    telemetry.advance();
    now += Duration::seconds(10);
    let events = engine.tick(now);
    assert!(matches!(events[..], [Event::AircraftDetected { .. }]));
    assert_eq!(engine.status(), "Boarding not started yet ...");

    telemetry.advance();
    now += Duration::seconds(10);
    let events = engine.tick(now);
    assert!(matches!(events[..], [Event::BoardingStarted { .. }]));
    let boarding_time = now;

    // delta -5 -> TooCold once the window elapsed
    telemetry.advance();
    now = boarding_time + Duration::minutes(5) + Duration::seconds(1);
    engine.tick(now);
    assert_eq!(
        engine.status(),
        "passengers are asking for a cozier temperature"
    );
    assert_eq!(
        spoken.borrow().last().map(String::as_str),
        Some("Captain, passengers are asking for a cozier temperature")
    );

    telemetry.advance();
    now += Duration::seconds(10);
    let events = engine.tick(now);
    assert!(matches!(events[..], [Event::PassengersDisembarked { .. }]));
    assert_eq!(engine.status(), "Passengers disembarked");
    assert_eq!(engine.last_checked_at(), None);
}

#[test]
fn plugin_lifecycle_persists_settings_across_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");

    // first session: user raises the comfort target, then quits
    {
        let telemetry = ScriptedTelemetry::new(vec![frame(ZIBO_PATH, Some(21.0), Some(false))]);
        let mut plugin = CabinTempPlugin::start(
            Box::new(telemetry),
            Box::new(RecordingAnnouncer::default()),
            SettingsStore::at_path(&path),
        );
        plugin.enable();
        plugin.tick(t0());
        plugin.engine_mut().set_comfort_temperature(24).unwrap();
        plugin.engine_mut().set_advisory_enabled(false);
        plugin.stop().unwrap();
    }

    // second session: persisted preferences are in effect
    {
        let telemetry = ScriptedTelemetry::new(vec![frame(ZIBO_PATH, Some(29.0), Some(true))]);
        let announcer = RecordingAnnouncer::default();
        let spoken = announcer.0.clone();
        let mut plugin = CabinTempPlugin::start(
            Box::new(telemetry),
            Box::new(announcer),
            SettingsStore::at_path(&path),
        );
        assert_eq!(plugin.engine().settings().comfort_temp, 24);
        assert!(!plugin.engine().settings().enabled);

        plugin.enable();
        let events = plugin.tick(t0());
        // boarding starts but advisories are disabled, so nothing is spoken
        assert!(events
            .iter()
            .any(|e| matches!(e, Event::BoardingStarted { spoken: None, .. })));
        assert!(spoken.borrow().is_empty());
    }
}
