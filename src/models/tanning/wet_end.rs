//! Wet-end twin model.
//!
//! Predicts oil penetration, surface clagginess, drying effort, snap risk and
//! area yield of a chrome-tanned batch from its retannage, fatliquoring and
//! drying parameters.
//! The computational core is in the internal `core` module.
//!
//! # Example
//!
//! ```
//! use uom::si::{
//!     angular_velocity::revolution_per_minute,
//!     f64::{AngularVelocity, Length, Mass, Ratio, ThermodynamicTemperature},
//!     length::{meter, millimeter},
//!     mass::kilogram,
//!     ratio::percent,
//!     thermodynamic_temperature::degree_celsius,
//! };
//! use wet_end_models::models::tanning::wet_end::{
//!     Climate, DryMethod, Drum, FloatBath, Offers, PickleStrategy, Process, TwinModel, VegTannin,
//! };
//!
//! let model = TwinModel::new(Length::new::<millimeter>(1.6), 5.7, Ratio::new::<percent>(4.5));
//!
//! let process = Process {
//!     offers: Offers::from_percent(5.0, 0.5),
//!     veg_tannin: VegTannin::None,
//!     pickle: PickleStrategy::Equilibrium,
//!     dry_method: "Air Drying".parse::<DryMethod>()?,
//!     climate: Climate::Temperate,
//!     drum: Drum {
//!         speed: AngularVelocity::new::<revolution_per_minute>(12.0),
//!         diameter: Length::new::<meter>(3.0),
//!         goods_weight: Mass::new::<kilogram>(1000.0),
//!     },
//!     bath: FloatBath {
//!         retan: ThermodynamicTemperature::new::<degree_celsius>(35.0),
//!         fatliquor: ThermodynamicTemperature::new::<degree_celsius>(55.0),
//!     },
//!     waterproofed: true,
//! };
//!
//! let result = model.simulate("Sulphited Fish Oil", &process)?;
//! assert_eq!(result.zeta, 55.5);
//! assert!(result.area_yield >= 78.0);
//!
//! assert!(model.simulate("Unknown Oil", &process).is_err());
//! # Ok::<(), wet_end_models::models::tanning::wet_end::WetEndError>(())
//! ```

mod core;

pub use self::core::{
    BarrierConfig, ChromeConfig, Climate, DryMethod, Drum, Drying, DryingConfig,
    ElectrochemicalConfig, Fixation, FloatBath, MechanicalConfig, MechanicalWork, Offers,
    OperatingLimits, Penetration, PenetrationConfig, PickleStrategy, Process, SimulationResult,
    Stages, ThermalConfig, ThermalResponse, TwinModel, VaporBarrier, VegTannin, WetEndConfig,
    WetEndError, YieldConfig, ZetaPotential,
};

use std::convert::Infallible;

use twine_core::Model;

use crate::support::chemistry::Chemistry;

/// One fatliquoring scenario for a batch: the chemistry and the process.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    pub chemistry: Chemistry,
    pub process: Process,
}

/// Runs a [`Scenario`] against the batch baseline.
///
/// The chemistry is already resolved, so the call cannot fail.
impl Model for TwinModel {
    type Input = Scenario;
    type Output = SimulationResult;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.simulate_chemistry(input.chemistry, &input.process))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        angular_velocity::revolution_per_minute,
        f64::{AngularVelocity, Length, Mass, Ratio, ThermodynamicTemperature},
        length::{meter, millimeter},
        mass::kilogram,
        ratio::percent,
        thermodynamic_temperature::degree_celsius,
    };

    fn scenario(chemistry: Chemistry) -> Scenario {
        Scenario {
            chemistry,
            process: Process {
                offers: Offers::from_percent(8.0, 1.0),
                veg_tannin: VegTannin::Mimosa,
                pickle: PickleStrategy::Chaser,
                dry_method: DryMethod::PartialVacuum,
                climate: Climate::Tropical,
                drum: Drum {
                    speed: AngularVelocity::new::<revolution_per_minute>(8.0),
                    diameter: Length::new::<meter>(2.5),
                    goods_weight: Mass::new::<kilogram>(2500.0),
                },
                bath: FloatBath {
                    retan: ThermodynamicTemperature::new::<degree_celsius>(40.0),
                    fatliquor: ThermodynamicTemperature::new::<degree_celsius>(60.0),
                },
                waterproofed: false,
            },
        }
    }

    #[test]
    fn model_call_matches_simulate() {
        let model = TwinModel::new(
            Length::new::<millimeter>(2.2),
            6.1,
            Ratio::new::<percent>(3.5),
        );

        for chemistry in Chemistry::ALL {
            let input = scenario(chemistry);
            let via_model = model.call(&input).unwrap();
            let via_label = model
                .simulate(chemistry.label(), &input.process)
                .unwrap();
            assert_eq!(via_model, via_label);
        }
    }

    #[test]
    fn neatsfoot_at_high_ph_blinds_the_grain() {
        let model = TwinModel::new(
            Length::new::<millimeter>(2.2),
            6.1,
            Ratio::new::<percent>(3.5),
        );

        let result = model.call(&scenario(Chemistry::NeatsfootOil)).unwrap();
        assert_eq!(result.fixation, Fixation::BlindedGrain);
        assert!(result.vbi > 2.8);
        assert!(result.area_yield >= 78.0);
    }
}
