//! Wet-end process twin.
//!
//! A [`TwinModel`] captures the chemical baseline of one tanned batch
//! (substrate thickness, neutralization pH, chrome offer) and runs the
//! fatliquoring and drying of that batch through a six-stage pipeline:
//!
//! 1. mechanical work of the drum,
//! 2. electrochemical drag (effective zeta potential),
//! 3. thermal mobility and snap risk,
//! 4. penetration,
//! 5. vapor-barrier index,
//! 6. drying thermodynamics, followed by the area yield estimate.
//!
//! Each stage reads only the inputs and the outputs of earlier stages.

mod area_yield;
mod barrier;
mod config;
mod drying;
mod electrochemical;
mod error;
mod input;
mod mechanical;
mod penetration;
mod results;
mod stages;
mod thermal;
mod validate;

#[cfg(test)]
mod test_support;

pub use area_yield::YieldConfig;
pub use barrier::{BarrierConfig, VaporBarrier};
pub use config::{ChromeConfig, WetEndConfig};
pub use drying::{Drying, DryingConfig, Fixation};
pub use electrochemical::{ElectrochemicalConfig, ZetaPotential};
pub use error::WetEndError;
pub use input::{Climate, DryMethod, Drum, FloatBath, Offers, PickleStrategy, Process, VegTannin};
pub use mechanical::{MechanicalConfig, MechanicalWork};
pub use penetration::{Penetration, PenetrationConfig};
pub use results::SimulationResult;
pub use stages::Stages;
pub use thermal::{ThermalConfig, ThermalResponse};
pub use validate::OperatingLimits;

use log::{debug, trace};
use uom::si::{
    f64::{Length, Ratio},
    ratio::{percent, ratio},
};

use crate::support::chemistry::{Chemistry, ChemistryTable, FatliquorSpec};

use area_yield::area_yield;

/// The chemical baseline of one tanned batch.
///
/// Chrome saturation and free chrome are derived once, at construction.
/// The model is immutable; every simulation is a pure function of the model
/// and its inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct TwinModel {
    thickness: Length,
    ph: f64,
    chrome_offer: Ratio,
    chrome_saturation: f64,
    free_chrome: Ratio,
    config: WetEndConfig,
}

impl TwinModel {
    /// Creates a twin model with the default constants.
    ///
    /// Inputs are not range-checked.
    ///
    /// ```
    /// use uom::si::{f64::{Length, Ratio}, length::millimeter, ratio::percent};
    /// use wet_end_models::models::tanning::wet_end::TwinModel;
    ///
    /// let model = TwinModel::new(
    ///     Length::new::<millimeter>(1.6),
    ///     5.7,
    ///     Ratio::new::<percent>(4.5),
    /// );
    /// assert_eq!(model.chrome_saturation(), 1.0);
    /// assert!((model.free_chrome().get::<percent>() - 1.5).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn new(thickness: Length, ph: f64, chrome_offer: Ratio) -> Self {
        Self::with_config(thickness, ph, chrome_offer, WetEndConfig::default())
    }

    /// Creates a twin model with custom constants.
    #[must_use]
    pub fn with_config(
        thickness: Length,
        ph: f64,
        chrome_offer: Ratio,
        config: WetEndConfig,
    ) -> Self {
        let saturation_offer = config.chrome.saturation_offer;

        let chrome_saturation = (chrome_offer / saturation_offer).get::<ratio>().min(1.0);

        // Also maps a NaN excess to zero.
        let excess = (chrome_offer - saturation_offer).get::<percent>().max(0.0);
        let free_chrome = Ratio::new::<percent>(excess);

        Self {
            thickness,
            ph,
            chrome_offer,
            chrome_saturation,
            free_chrome,
            config,
        }
    }

    /// Creates a twin model after checking the baseline against the default
    /// [`OperatingLimits`].
    ///
    /// # Errors
    ///
    /// Returns [`WetEndError::InvalidParameter`] if any baseline parameter is
    /// outside its operating range.
    pub fn new_validated(
        thickness: Length,
        ph: f64,
        chrome_offer: Ratio,
    ) -> Result<Self, WetEndError> {
        OperatingLimits::default().check_batch(thickness, ph, chrome_offer)?;
        Ok(Self::new(thickness, ph, chrome_offer))
    }

    /// Substrate thickness.
    #[must_use]
    pub fn thickness(&self) -> Length {
        self.thickness
    }

    /// Neutralization pH.
    #[must_use]
    pub fn ph(&self) -> f64 {
        self.ph
    }

    /// Chrome offer.
    #[must_use]
    pub fn chrome_offer(&self) -> Ratio {
        self.chrome_offer
    }

    /// Fraction of the saturation offer reached, capped at 1.0.
    #[must_use]
    pub fn chrome_saturation(&self) -> f64 {
        self.chrome_saturation
    }

    /// Chrome offered beyond saturation, left unbound.
    #[must_use]
    pub fn free_chrome(&self) -> Ratio {
        self.free_chrome
    }

    /// Model constants.
    #[must_use]
    pub fn config(&self) -> &WetEndConfig {
        &self.config
    }

    /// Simulates fatliquoring and drying with the chemistry named by `chemistry_id`.
    ///
    /// # Errors
    ///
    /// Returns [`WetEndError::UnknownChemistry`] if `chemistry_id` is not in the
    /// [`ChemistryTable`].
    /// No other inputs are checked.
    pub fn simulate(
        &self,
        chemistry_id: &str,
        process: &Process,
    ) -> Result<SimulationResult, WetEndError> {
        let spec = ChemistryTable::global().lookup(chemistry_id)?;
        Ok(self.run(chemistry_id, spec, process))
    }

    /// Simulates fatliquoring and drying with a known chemistry.
    #[must_use]
    pub fn simulate_chemistry(&self, chemistry: Chemistry, process: &Process) -> SimulationResult {
        let spec = ChemistryTable::global().get(chemistry);
        self.run(chemistry.label(), spec, process)
    }

    /// Runs every stage of the pipeline without rounding.
    #[must_use]
    pub fn evaluate(&self, spec: &FatliquorSpec, process: &Process) -> Stages {
        let config = &self.config;

        let mechanical = MechanicalWork::compute(&process.drum, &config.mechanical);
        trace!(
            "mechanical: velocity={:?} drop_energy={:?} oomph={}",
            mechanical.velocity, mechanical.drop_energy, mechanical.oomph
        );

        let zeta = ZetaPotential::compute(
            self.chrome_saturation,
            self.ph,
            &process.offers,
            process.veg_tannin,
            &config.electrochemical,
        );
        trace!(
            "electrochemical: base={:?} masking={:?} effective={:?}",
            zeta.base_charge, zeta.masking, zeta.effective
        );

        let thermal = ThermalResponse::compute(self.ph, &process.bath, &config.thermal);
        trace!(
            "thermal: mobility={} jump={:?} snap={}",
            thermal.oil_mobility, thermal.temperature_jump, thermal.snap_risk
        );

        let penetration = Penetration::compute(
            self.thickness,
            process.pickle,
            &zeta,
            &thermal,
            &mechanical,
            &config.penetration,
        );
        trace!(
            "penetration: resistance={} score={}",
            penetration.resistance, penetration.score
        );

        let barrier = VaporBarrier::compute(
            self.ph,
            spec,
            self.free_chrome(),
            process.waterproofed,
            &config.barrier,
        );
        trace!(
            "barrier: vbi={} greasy={} chrome_fouling={} sealed={}",
            barrier.index, barrier.greasy, barrier.chrome_fouling, barrier.sealed
        );

        let drying = Drying::compute(
            self.thickness,
            self.ph,
            barrier.index,
            process.dry_method,
            process.climate,
            &config.drying,
        );
        trace!(
            "drying: vbi={} complexity={} fixation={:?}",
            drying.vbi, drying.complexity, drying.fixation
        );

        let area_yield = area_yield(drying.vbi, &config.area_yield);

        Stages {
            mechanical,
            zeta,
            thermal,
            penetration,
            barrier,
            drying,
            area_yield,
        }
    }

    fn run(&self, label: &str, spec: &FatliquorSpec, process: &Process) -> SimulationResult {
        let result = self.evaluate(spec, process).report(spec);
        debug!(
            "simulated {label}: pen={} vbi={} yield={} snap={}",
            result.penetration, result.vbi, result.area_yield, result.snap_risk
        );
        result
    }
}
