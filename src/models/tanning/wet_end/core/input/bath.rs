use uom::si::f64::{TemperatureInterval, ThermodynamicTemperature};

use crate::support::units::TemperatureDifference;

/// Float temperatures of the retannage and fatliquoring baths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatBath {
    /// Temperature at the end of retannage.
    pub retan: ThermodynamicTemperature,

    /// Fatliquor float temperature.
    pub fatliquor: ThermodynamicTemperature,
}

impl FloatBath {
    /// Returns the temperature jump from retannage into the fatliquor float.
    ///
    /// Negative when the fatliquor float is cooler than the retannage.
    #[must_use]
    pub fn jump(&self) -> TemperatureInterval {
        self.fatliquor.minus(self.retan)
    }
}
