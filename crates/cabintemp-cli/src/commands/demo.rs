use std::path::PathBuf;
use std::time::Duration;

use chrono::Utc;
use clap::Args;

use cabintemp_core::{
    CabinTempPlugin, LogAnnouncer, ScriptedTelemetry, SettingsStore, TelemetryFrame,
};

#[derive(Args)]
pub struct DemoArgs {
    /// Number of ticks to run
    #[arg(long, default_value_t = 8)]
    ticks: u32,
    /// Seconds between ticks (0 runs the script back-to-back)
    #[arg(long, default_value_t = 1)]
    interval_secs: u64,
    /// JSON file with an array of telemetry frames to play back
    #[arg(long)]
    script: Option<PathBuf>,
}

pub fn run(args: DemoArgs) -> Result<(), Box<dyn std::error::Error>> {
    let frames: Vec<TelemetryFrame> = match args.script {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => builtin_script(),
    };
    let telemetry = ScriptedTelemetry::new(frames);
    let store = SettingsStore::open_default()?;
    let mut plugin = CabinTempPlugin::start(
        Box::new(telemetry.clone()),
        Box::new(LogAnnouncer),
        store,
    );

    let identity = plugin.identity();
    println!("{} ({})", identity.name, identity.signature);
    plugin.enable();

    for i in 0..args.ticks {
        let events = plugin.tick(Utc::now());
        let snap = plugin.engine().snapshot();
        let cabin = snap
            .cabin_temperature
            .map(|t| format!("{t:.1}"))
            .unwrap_or_else(|| "--".to_string());
        println!(
            "tick {i:>2}  [{:?}] {} (cabin {cabin} C, comfort {} C)",
            snap.state, snap.status, snap.comfort_temperature
        );
        for event in events {
            println!("         event: {}", serde_json::to_string(&event)?);
        }
        telemetry.advance();
        if args.interval_secs > 0 {
            std::thread::sleep(Duration::from_secs(args.interval_secs));
        }
    }

    plugin.stop()?;
    Ok(())
}

/// A short turnaround: load the Zibo, board in a warm cabin, disembark.
fn builtin_script() -> Vec<TelemetryFrame> {
    let frame = |path: &str, temp: Option<f64>, pax: Option<bool>| TelemetryFrame {
        aircraft_path: path.to_string(),
        cabin_temperature: temp,
        pax_onboard: pax,
    };
    let zibo = "Aircraft/Boeing B737-800X/b738.acf";
    vec![
        frame("Aircraft/Cessna 172/c172.acf", None, None),
        frame(zibo, Some(21.3), Some(false)),
        frame(zibo, Some(26.8), Some(true)),
        frame(zibo, Some(27.4), Some(true)),
        frame(zibo, Some(24.0), Some(true)),
        frame(zibo, Some(21.9), Some(true)),
        frame(zibo, Some(21.5), Some(false)),
    ]
}
