//! # Scenario Calculator
//!
//! Loads a TOML scenario (species, structure, conductivity and speed) and
//! prints the output at the structural limit and at the requested speed.
//! A failed calculation is reported rather than aborting, the way an
//! interactive calculator would show "calculation failed".
//!
//! ## Running the Example
//!
//! ```sh
//! cargo run --example run_scenario -- gravion-examples/scenarios/hi_small.toml
//! ```

use std::{env, process::ExitCode};

use gravion_examples::{load_scenario, render_operating_point, render_power};

fn main() -> ExitCode {
    let Some(path) = env::args().nth(1) else {
        eprintln!("usage: run_scenario <scenario.toml>");
        return ExitCode::FAILURE;
    };

    let scenario = match load_scenario(&path) {
        Ok(scenario) => scenario,
        Err(error) => {
            eprintln!("{path}: {error}");
            return ExitCode::FAILURE;
        }
    };

    match scenario.evaluate() {
        Ok(report) => {
            println!(
                "{} / {} ({} masses)\n",
                scenario.anion, scenario.cation, scenario.mass_source
            );
            println!("at structural limit:\n{}", render_power(&report.at_limit));
            println!("at requested speed:\n{}", render_operating_point(&report.at_speed));
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("calculation failed: {error}");
            ExitCode::FAILURE
        }
    }
}
