//! Thin driver binary: reads a scenario file, runs it to completion and
//! reports per-ASV errors. Not a general-purpose CLI — it takes exactly one
//! positional scenario path and an optional output directory.

use asv_sim::{ScenarioConfig, ScheduleMode, Simulation};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let Some(scenario_path) = env::args().nth(1) else {
        log::error!("usage: asv-demo <scenario.toml> [output_dir]");
        return ExitCode::FAILURE;
    };
    let output_dir = env::args().nth(2).map(PathBuf::from);

    let text = match std::fs::read_to_string(&scenario_path) {
        Ok(text) => text,
        Err(e) => {
            log::error!("failed to read {scenario_path}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let config = match ScenarioConfig::from_toml_str(&text) {
        Ok(config) => config,
        Err(e) => {
            log::error!("configuration malformed: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut simulation = match Simulation::from_config(&config) {
        Ok(simulation) => simulation,
        Err(e) => {
            log::error!("failed to build simulation: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = simulation.run_upto_waypoint(ScheduleMode::TimeSynchronised, output_dir.as_deref()) {
        log::error!("simulation run failed: {e}");
        return ExitCode::FAILURE;
    }

    for (id, error) in simulation.errors() {
        log::error!("asv '{id}' ended its run with an error: {error}");
    }

    if simulation.errors().is_empty() {
        log::info!("simulation complete: {} asv(s)", simulation.node_count());
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
