use clap::Subcommand;

use cabintemp_core::settings::parse_comfort_temp;
use cabintemp_core::{ComfortSettings, SettingsStore};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key ("enabled" or "comfort_temp")
        key: String,
    },
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// New value
        value: String,
    },
    /// List all config values
    List,
    /// Reset config to defaults
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = SettingsStore::open_default()?;
    match action {
        ConfigAction::Get { key } => {
            let settings = store.load();
            match key.as_str() {
                "enabled" => println!("{}", settings.enabled),
                "comfort_temp" => println!("{}", settings.comfort_temp),
                _ => {
                    eprintln!("unknown key: {key}");
                    std::process::exit(1);
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let mut settings = store.load();
            match key.as_str() {
                "enabled" => settings.enabled = value.parse()?,
                "comfort_temp" => settings.comfort_temp = parse_comfort_temp(&value)?,
                _ => {
                    eprintln!("unknown key: {key}");
                    std::process::exit(1);
                }
            }
            store.save(settings)?;
            println!("ok");
        }
        ConfigAction::List => {
            let settings = store.load();
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        ConfigAction::Reset => {
            store.save(ComfortSettings::default())?;
            println!("config reset to defaults");
        }
    }
    Ok(())
}
