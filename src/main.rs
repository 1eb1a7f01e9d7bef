//! Memspace headless driver
//!
//! Runs a roster (or a full scenario) through the simulation at a fixed frame
//! rate and prints where every member ended up.
//!
//! Usage:
//!   memspace <roster.json> [settings.json]
//!   memspace --scenario <scenario.json>

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use std::process::ExitCode;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Memspace starting...");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let scenario = match native::scenario_from_args(&args) {
        Ok(Some(scenario)) => scenario,
        Ok(None) => {
            eprintln!("usage: memspace <roster.json> [settings.json]");
            eprintln!("       memspace --scenario <scenario.json>");
            return ExitCode::from(2);
        }
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let report = scenario.run();
    log::info!("Finished after {} ticks", report.ticks);

    match serde_json::to_string_pretty(&report) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Failed to encode report: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::Path;

    use memspace::error::Result;
    use memspace::scenario::{Scenario, load_roster};
    use memspace::settings::Settings;

    /// Build the scenario described by the command line.
    /// `Ok(None)` means the arguments were not understood.
    pub fn scenario_from_args(args: &[String]) -> Result<Option<Scenario>> {
        match args {
            [flag, path] if flag == "--scenario" => Scenario::load(Path::new(path)).map(Some),
            [roster] => Ok(Some(Scenario::new(load_roster(Path::new(roster))?, Settings::default()))),
            [roster, settings] => {
                let settings = Settings::load_or_default(Path::new(settings))?;
                Ok(Some(Scenario::new(load_roster(Path::new(roster))?, settings)))
            }
            _ => Ok(None),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The wasm host drives `memspace::sim` directly; there is no CLI here
}
