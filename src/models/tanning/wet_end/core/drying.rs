//! Drying thermodynamics.
//!
//! Air drying relies on capillary evaporation and feels the full thickness
//! and climate.
//! Partial vacuum drying attenuates both, but the heat plate changes the
//! barrier: unfixed oil is ironed into the grain, fixed oil releases cleanly.

use uom::si::{f64::Length, length::millimeter};

use super::{Climate, DryMethod};

/// Constants for the drying stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DryingConfig {
    /// Evaporation resistance in a temperate climate.
    pub temperate_resistance: f64,

    /// Evaporation resistance in a tropical climate.
    pub tropical_resistance: f64,

    /// pH above which vacuum drying blinds the grain.
    pub blinding_ph: f64,

    /// VBI multiplier for blinded grain.
    pub blinded_factor: f64,

    /// VBI multiplier for clean vacuum extraction.
    pub clean_factor: f64,

    /// Thickness exponent under vacuum.
    pub vacuum_thickness_exponent: f64,

    /// Climate sensitivity under vacuum, relative to air drying.
    pub vacuum_climate_factor: f64,
}

impl Default for DryingConfig {
    fn default() -> Self {
        Self {
            temperate_resistance: 1.0,
            tropical_resistance: 2.7,
            blinding_ph: 5.4,
            blinded_factor: 1.35,
            clean_factor: 0.75,
            vacuum_thickness_exponent: 1.6,
            vacuum_climate_factor: 0.55,
        }
    }
}

impl DryingConfig {
    /// Returns the evaporation resistance of a climate.
    #[must_use]
    pub fn climate_resistance(&self, climate: Climate) -> f64 {
        match climate {
            Climate::Temperate => self.temperate_resistance,
            Climate::Tropical => self.tropical_resistance,
        }
    }
}

/// How the oil ends up fixed once the leather is dry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixation {
    /// Air drying; oil migrates with the evaporating water.
    CapillaryEvaporation,

    /// Vacuum drying at high pH; unfixed oil is ironed into the grain.
    BlindedGrain,

    /// Vacuum drying of well-fixed oil.
    CleanExtraction,
}

impl Fixation {
    /// Returns the processing note for this fixation regime.
    #[must_use]
    pub fn note(self) -> &'static str {
        match self {
            Self::CapillaryEvaporation => {
                "Natural capillary evaporation; drying rate is governed by ambient humidity."
            }
            Self::BlindedGrain => {
                "Heat plate irons unfixed oil into the grain; high risk of blinded grain."
            }
            Self::CleanExtraction => "Well-fixed oil; vacuum extracts moisture cleanly.",
        }
    }
}

/// Outcome of the drying stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drying {
    /// Vapor-barrier index after drying.
    ///
    /// Equal to the incoming index for air drying.
    /// May fall below 1.0 after clean vacuum extraction.
    pub vbi: f64,

    /// Drying complexity (energy demand proxy).
    pub complexity: f64,

    /// Fixation regime reached.
    pub fixation: Fixation,
}

impl Drying {
    pub(super) fn compute(
        thickness: Length,
        ph: f64,
        vbi: f64,
        method: DryMethod,
        climate: Climate,
        config: &DryingConfig,
    ) -> Self {
        let thickness = thickness.get::<millimeter>();
        let climate_resistance = config.climate_resistance(climate);

        match method {
            DryMethod::AirDrying => Self {
                vbi,
                complexity: thickness.powi(2) * vbi * climate_resistance,
                fixation: Fixation::CapillaryEvaporation,
            },
            DryMethod::PartialVacuum => {
                let (factor, fixation) = if ph > config.blinding_ph {
                    (config.blinded_factor, Fixation::BlindedGrain)
                } else {
                    (config.clean_factor, Fixation::CleanExtraction)
                };
                let vbi = vbi * factor;

                Self {
                    vbi,
                    complexity: thickness.powf(config.vacuum_thickness_exponent)
                        * vbi
                        * (climate_resistance * config.vacuum_climate_factor),
                    fixation,
                }
            }
        }
    }
}
