//! # Electrolyte Comparison
//!
//! Ranks the candidate electrolyte systems by combined power density on each
//! structure preset, running every vessel at its structural speed limit.
//!
//! ## Running the Example
//!
//! ```sh
//! cargo run --example compare_systems
//! cargo run --example compare_systems -- paper
//! ```

use std::{env, process::ExitCode};

use gravion_examples::sci;
use gravion_physics::{MassSource, StructurePreset, compare_systems};
use uom::si::electrical_conductivity::siemens_per_meter;

fn main() -> ExitCode {
    let source = MassSource::from_paper_flag(env::args().nth(1).as_deref() == Some("paper"));
    println!("mass source: {source}\n");

    for preset in StructurePreset::ALL {
        let ranked = match compare_systems(source, &preset.geometry()) {
            Ok(ranked) => ranked,
            Err(error) => {
                eprintln!("{preset}: calculation failed: {error}");
                return ExitCode::FAILURE;
            }
        };

        println!("{preset}");
        for (rank, performance) in ranked.iter().enumerate() {
            println!(
                "  {}. {:<26}{:>6.2} S/m  {}",
                rank + 1,
                performance.system.name,
                performance
                    .result
                    .conductivity
                    .get::<siemens_per_meter>(),
                sci(performance.result.power_density_combined.value, "W/m³"),
            );
        }
        println!();
    }

    ExitCode::SUCCESS
}
