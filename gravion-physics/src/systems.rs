//! Side-by-side comparison of the candidate electrolyte systems.

use crate::{
    CalculationError, MassSource, PowerResult, StructureGeometry,
    power::{Conductivity, conductivity, power_density_for},
    species::IonSpecies,
};

/// An electrolyte: an anion/cation pair and its conductivity.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ElectrolyteSystem {
    pub name: &'static str,
    pub anion: IonSpecies,
    pub cation: IonSpecies,
    /// Conductivity in S/m.
    pub conductivity: f64,
}

impl ElectrolyteSystem {
    /// Returns the conductivity as a validated quantity.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError::InvalidInput`] if the tabulated value is
    /// infinite or not strictly positive.
    pub fn conductivity(&self) -> Result<Conductivity, CalculationError> {
        conductivity(self.conductivity)
    }
}

/// The compared systems.
pub const ELECTROLYTE_SYSTEMS: [ElectrolyteSystem; 3] = [
    ElectrolyteSystem {
        name: "Hydroiodic acid (HI)",
        anion: IonSpecies::Iodide,
        cation: IonSpecies::Hydrogen,
        conductivity: 0.85,
    },
    ElectrolyteSystem {
        name: "Lithium chloride (LiCl)",
        anion: IonSpecies::Chloride,
        cation: IonSpecies::Lithium,
        conductivity: 0.45,
    },
    ElectrolyteSystem {
        name: "Potassium iodide (KI)",
        anion: IonSpecies::Iodide,
        cation: IonSpecies::Potassium,
        conductivity: 0.60,
    },
];

/// A system paired with its computed output.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SystemPerformance {
    pub system: ElectrolyteSystem,
    pub result: PowerResult,
}

/// Evaluates every system in [`ELECTROLYTE_SYSTEMS`] on one structure.
///
/// Results are ranked by combined power density, highest first.
///
/// # Errors
///
/// Propagates any [`CalculationError`] from evaluating a system.
pub fn compare_systems(
    source: MassSource,
    geometry: &StructureGeometry,
) -> Result<Vec<SystemPerformance>, CalculationError> {
    let mut performances = ELECTROLYTE_SYSTEMS
        .iter()
        .map(|system| -> Result<_, CalculationError> {
            let result = power_density_for(
                source,
                system.anion,
                system.cation,
                geometry,
                system.conductivity()?,
            );
            Ok(SystemPerformance {
                system: *system,
                result,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    performances.sort_by(|a, b| {
        b.result
            .power_density_combined
            .value
            .total_cmp(&a.result.power_density_combined.value)
    });

    Ok(performances)
}

/// Returns the system with the highest combined power density.
///
/// # Errors
///
/// Propagates any [`CalculationError`] from evaluating a system.
pub fn best_system(
    source: MassSource,
    geometry: &StructureGeometry,
) -> Result<Option<SystemPerformance>, CalculationError> {
    Ok(compare_systems(source, geometry)?.into_iter().next())
}
