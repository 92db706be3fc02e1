//! Optional boundary validation of process parameters.
//!
//! The twin model itself accepts any input and lets out-of-range values
//! propagate through the formulas.
//! Callers that want the collection surface's ranges enforced run these
//! checks before constructing or simulating.

use uom::si::{
    angular_velocity::revolution_per_minute,
    f64::{AngularVelocity, Length, Mass, Ratio, ThermodynamicTemperature},
    length::{meter, millimeter},
    mass::kilogram,
    ratio::percent,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::constraint::{NonNegative, OperatingRange, StrictlyPositive};

use super::{Process, WetEndError};

/// Operating ranges of the input collection surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingLimits {
    pub thickness: OperatingRange<Length>,
    pub ph: OperatingRange<f64>,
    pub chrome_offer: OperatingRange<Ratio>,
    pub syntan_offer: OperatingRange<Ratio>,
    pub nsa_offer: OperatingRange<Ratio>,
    pub drum_speed: OperatingRange<AngularVelocity>,
    pub drum_diameter: OperatingRange<Length>,
    pub goods_weight: OperatingRange<Mass>,
    pub retan_temperature: OperatingRange<ThermodynamicTemperature>,
    pub fatliquor_temperature: OperatingRange<ThermodynamicTemperature>,
}

impl Default for OperatingLimits {
    fn default() -> Self {
        let mm = Length::new::<millimeter>;
        let pct = Ratio::new::<percent>;
        let celsius = ThermodynamicTemperature::new::<degree_celsius>;

        Self {
            thickness: OperatingRange::new(mm(0.5), mm(6.0)),
            ph: OperatingRange::new(4.0, 8.0),
            chrome_offer: OperatingRange::new(pct(0.0), pct(8.0)),
            syntan_offer: OperatingRange::new(pct(0.0), pct(15.0)),
            nsa_offer: OperatingRange::new(pct(0.0), pct(3.0)),
            drum_speed: OperatingRange::new(
                AngularVelocity::new::<revolution_per_minute>(2.0),
                AngularVelocity::new::<revolution_per_minute>(20.0),
            ),
            drum_diameter: OperatingRange::new(
                Length::new::<meter>(1.5),
                Length::new::<meter>(5.0),
            ),
            goods_weight: OperatingRange::new(
                Mass::new::<kilogram>(100.0),
                Mass::new::<kilogram>(10_000.0),
            ),
            retan_temperature: OperatingRange::new(celsius(20.0), celsius(45.0)),
            fatliquor_temperature: OperatingRange::new(celsius(35.0), celsius(65.0)),
        }
    }
}

impl OperatingLimits {
    /// Checks the tanning baseline of a batch.
    ///
    /// # Errors
    ///
    /// Returns [`WetEndError::InvalidParameter`] naming the first parameter
    /// outside its range.
    pub fn check_batch(
        &self,
        thickness: Length,
        ph: f64,
        chrome_offer: Ratio,
    ) -> Result<(), WetEndError> {
        StrictlyPositive::new(thickness).map_err(WetEndError::invalid("thickness"))?;
        self.thickness
            .check(thickness)
            .map_err(WetEndError::invalid("thickness"))?;
        self.ph.check(ph).map_err(WetEndError::invalid("pH"))?;
        self.chrome_offer
            .check(chrome_offer)
            .map_err(WetEndError::invalid("chrome offer"))?;
        Ok(())
    }

    /// Checks the process parameters of a scenario.
    ///
    /// # Errors
    ///
    /// Returns [`WetEndError::InvalidParameter`] naming the first parameter
    /// outside its range.
    pub fn check_process(&self, process: &Process) -> Result<(), WetEndError> {
        NonNegative::new(process.offers.syntan).map_err(WetEndError::invalid("syntan offer"))?;
        self.syntan_offer
            .check(process.offers.syntan)
            .map_err(WetEndError::invalid("syntan offer"))?;
        NonNegative::new(process.offers.nsa).map_err(WetEndError::invalid("NSA offer"))?;
        self.nsa_offer
            .check(process.offers.nsa)
            .map_err(WetEndError::invalid("NSA offer"))?;
        NonNegative::new(process.drum.speed).map_err(WetEndError::invalid("drum speed"))?;
        self.drum_speed
            .check(process.drum.speed)
            .map_err(WetEndError::invalid("drum speed"))?;
        StrictlyPositive::new(process.drum.diameter)
            .map_err(WetEndError::invalid("drum diameter"))?;
        self.drum_diameter
            .check(process.drum.diameter)
            .map_err(WetEndError::invalid("drum diameter"))?;
        NonNegative::new(process.drum.goods_weight)
            .map_err(WetEndError::invalid("goods weight"))?;
        self.goods_weight
            .check(process.drum.goods_weight)
            .map_err(WetEndError::invalid("goods weight"))?;
        self.retan_temperature
            .check(process.bath.retan)
            .map_err(WetEndError::invalid("retan temperature"))?;
        self.fatliquor_temperature
            .check(process.bath.fatliquor)
            .map_err(WetEndError::invalid("fatliquor temperature"))?;
        Ok(())
    }
}

impl Process {
    /// Checks the process parameters against the default [`OperatingLimits`].
    ///
    /// # Errors
    ///
    /// Returns [`WetEndError::InvalidParameter`] naming the first parameter
    /// outside its range.
    pub fn validate(&self) -> Result<(), WetEndError> {
        OperatingLimits::default().check_process(self)
    }
}
