use cabintemp_core::settings::validate_comfort_temp;
use cabintemp_core::{classify, SettingsStore};

pub fn run(cabin: f64, comfort: Option<i32>) -> Result<(), Box<dyn std::error::Error>> {
    let comfort = match comfort {
        Some(value) => {
            validate_comfort_temp(value)?;
            value
        }
        None => SettingsStore::open_default()?.load().comfort_temp,
    };

    match classify(cabin, f64::from(comfort)) {
        Some(kind) => println!("{}", kind.message()),
        None => println!("cabin temperature within comfort band"),
    }
    Ok(())
}
