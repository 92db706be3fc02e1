//! Oil mobility in the float and the risk of snap fixation.

use uom::si::{
    f64::{Ratio, TemperatureInterval, ThermodynamicTemperature},
    ratio::ratio,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::units::TemperatureDifference;

use super::FloatBath;

/// Constants for the thermal stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermalConfig {
    /// Float temperature at which oil mobility is 1.0.
    pub reference_temperature: ThermodynamicTemperature,

    /// Temperature rise above the reference that doubles oil mobility.
    pub mobility_span: TemperatureInterval,

    /// pH above which a temperature jump starts fixing oil at the grain.
    pub snap_onset_ph: f64,

    /// Snap risk gained per pH unit above onset per kelvin of jump.
    pub snap_gain: f64,
}

impl Default for ThermalConfig {
    fn default() -> Self {
        Self {
            reference_temperature: ThermodynamicTemperature::new::<degree_celsius>(35.0),
            mobility_span: TemperatureInterval::new::<delta_kelvin>(55.0),
            snap_onset_ph: 5.1,
            snap_gain: 0.05,
        }
    }
}

/// Thermal behaviour of the fatliquor float.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermalResponse {
    /// Oil mobility relative to the reference temperature.
    pub oil_mobility: f64,

    /// Temperature jump from retannage into the fatliquor float.
    pub temperature_jump: TemperatureInterval,

    /// Snap risk multiplier, never below 1.0.
    pub snap_risk: f64,
}

impl ThermalResponse {
    pub(super) fn compute(ph: f64, bath: &FloatBath, config: &ThermalConfig) -> Self {
        let warm_up: Ratio =
            bath.fatliquor.minus(config.reference_temperature) / config.mobility_span;
        let oil_mobility = 1.0 + warm_up.get::<ratio>();

        let temperature_jump = bath.jump();
        let ph_excess = (ph - config.snap_onset_ph).max(0.0);
        let snap_risk =
            (1.0 + ph_excess * temperature_jump.get::<delta_kelvin>() * config.snap_gain).max(1.0);

        Self {
            oil_mobility,
            temperature_jump,
            snap_risk,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn bath(retan: f64, fatliquor: f64) -> FloatBath {
        FloatBath {
            retan: ThermodynamicTemperature::new::<degree_celsius>(retan),
            fatliquor: ThermodynamicTemperature::new::<degree_celsius>(fatliquor),
        }
    }

    #[test]
    fn warm_float_at_high_ph() {
        let response = ThermalResponse::compute(5.7, &bath(35.0, 55.0), &ThermalConfig::default());

        assert_relative_eq!(response.oil_mobility, 1.0 + 20.0 / 55.0, epsilon = 1e-9);
        assert_relative_eq!(
            response.temperature_jump.get::<delta_kelvin>(),
            20.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(response.snap_risk, 1.6, epsilon = 1e-9);
    }

    #[test]
    fn no_snap_at_or_below_onset_ph() {
        let config = ThermalConfig::default();
        for ph in [4.0, 4.8, 5.1] {
            for (retan, fatliquor) in [(20.0, 65.0), (45.0, 35.0), (35.0, 35.0)] {
                let response = ThermalResponse::compute(ph, &bath(retan, fatliquor), &config);
                assert_relative_eq!(response.snap_risk, 1.0);
            }
        }
    }

    #[test]
    fn cooler_float_never_drops_snap_below_one() {
        let response = ThermalResponse::compute(7.5, &bath(45.0, 35.0), &ThermalConfig::default());
        assert!(response.temperature_jump.get::<delta_kelvin>() < 0.0);
        assert_relative_eq!(response.snap_risk, 1.0);
    }

    #[test]
    fn cold_float_slows_oil() {
        let response = ThermalResponse::compute(5.0, &bath(25.0, 24.0), &ThermalConfig::default());
        assert!(response.oil_mobility < 1.0);
    }
}
