//! # Reference Table
//!
//! Recomputes the published reference table (HI electrolyte, 0.85 S/m) for
//! every structure preset with both ion-mass tables, and prints each
//! computed value beside the published one with its relative deviation.
//!
//! ## Running the Example
//!
//! ```sh
//! cargo run --example reference_table
//! ```

use std::process::ExitCode;

use gravion_examples::render_validation;
use gravion_physics::validate_all;

fn main() -> ExitCode {
    let tables = match validate_all() {
        Ok(tables) => tables,
        Err(error) => {
            eprintln!("calculation failed: {error}");
            return ExitCode::FAILURE;
        }
    };

    for (source, table) in tables {
        println!("mass source: {source}");
        for (preset, entry) in table {
            println!(
                "{preset} (max deviation {:.2e})\n  {:<14}{:>14}{:>14}{:>11}",
                entry.max_relative_deviation(),
                "column",
                "computed",
                "published",
                "rel. dev",
            );
            print!("{}", render_validation(&entry));
        }
        println!();
    }

    ExitCode::SUCCESS
}
