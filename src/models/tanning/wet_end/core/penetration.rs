//! Fatliquor penetration into the substrate core.
//!
//! Resistance grows with the square of the thickness (diffusion path), with
//! the sticky surface charge, with the pickle wall and with snap fixation.
//! Oil mobility and mechanical work drive the oil through it.

use uom::si::{
    area::square_millimeter,
    electric_potential::millivolt,
    f64::{Area, Length},
};

use super::{MechanicalWork, PickleStrategy, ThermalResponse, ZetaPotential};

/// Constants for the penetration stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenetrationConfig {
    /// Resistance per millivolt of sticky surface charge.
    pub charge_scale: f64,

    /// Wall resistance after an equilibrium pickle.
    pub equilibrium_wall: f64,

    /// Wall resistance after a chaser pickle.
    pub chaser_wall: f64,

    /// Drive added so penetration stays defined without mechanical work.
    pub drive_floor: f64,
}

impl Default for PenetrationConfig {
    fn default() -> Self {
        Self {
            charge_scale: 0.01,
            equilibrium_wall: 0.85,
            chaser_wall: 1.45,
            drive_floor: 0.1,
        }
    }
}

impl PenetrationConfig {
    /// Returns the mineral wall resistance left by a pickle strategy.
    #[must_use]
    pub fn wall_resistance(&self, pickle: PickleStrategy) -> f64 {
        match pickle {
            PickleStrategy::Equilibrium => self.equilibrium_wall,
            PickleStrategy::Chaser => self.chaser_wall,
        }
    }
}

/// Outcome of the penetration stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Penetration {
    /// Diffusion path proxy, the squared thickness.
    pub diffusion_path: Area,

    /// Mineral wall resistance from the pickle strategy.
    pub wall_resistance: f64,

    /// Total resistance to oil ingress.
    pub resistance: f64,

    /// Penetration score in percent, clamped to `[0, 100]`.
    pub score: f64,
}

impl Penetration {
    pub(super) fn compute(
        thickness: Length,
        pickle: PickleStrategy,
        zeta: &ZetaPotential,
        thermal: &ThermalResponse,
        work: &MechanicalWork,
        config: &PenetrationConfig,
    ) -> Self {
        let diffusion_path: Area = thickness * thickness;
        let wall_resistance = config.wall_resistance(pickle);

        let resistance = zeta.sticky_charge().get::<millivolt>()
            * config.charge_scale
            * diffusion_path.get::<square_millimeter>()
            * wall_resistance
            * thermal.snap_risk;

        let drive = thermal.oil_mobility * work.oomph + config.drive_floor;
        let blockage = resistance / drive;

        // An undefined ratio (overflowed resistance and drive) reads as fully blocked.
        let score = if blockage.is_nan() {
            0.0
        } else {
            (100.0 / (1.0 + blockage)).clamp(0.0, 100.0)
        };

        Self {
            diffusion_path,
            wall_resistance,
            resistance,
            score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        energy::kilojoule,
        f64::{ElectricPotential, Energy, TemperatureInterval, Velocity},
        length::millimeter,
        temperature_interval::kelvin as delta_kelvin,
        velocity::meter_per_second,
    };

    fn zeta(effective_mv: f64) -> ZetaPotential {
        let effective = ElectricPotential::new::<millivolt>(effective_mv);
        ZetaPotential {
            base_charge: effective,
            masking: ElectricPotential::new::<millivolt>(0.0),
            effective,
        }
    }

    fn thermal(oil_mobility: f64, snap_risk: f64) -> ThermalResponse {
        ThermalResponse {
            oil_mobility,
            temperature_jump: TemperatureInterval::new::<delta_kelvin>(0.0),
            snap_risk,
        }
    }

    fn work(oomph: f64) -> MechanicalWork {
        MechanicalWork {
            velocity: Velocity::new::<meter_per_second>(1.0),
            drop_energy: Energy::new::<kilojoule>(oomph),
            oomph,
        }
    }

    fn score(thickness_mm: f64, pickle: PickleStrategy, zeta_mv: f64, oomph: f64) -> Penetration {
        Penetration::compute(
            Length::new::<millimeter>(thickness_mm),
            pickle,
            &zeta(zeta_mv),
            &thermal(1.0, 1.0),
            &work(oomph),
            &PenetrationConfig::default(),
        )
    }

    #[test]
    fn reference_batch() {
        let p = Penetration::compute(
            Length::new::<millimeter>(1.6),
            PickleStrategy::Equilibrium,
            &zeta(55.5),
            &thermal(1.0 + 20.0 / 55.0, 1.6),
            &work(41.605_682_307_816_43),
            &PenetrationConfig::default(),
        );

        assert_relative_eq!(p.diffusion_path.get::<square_millimeter>(), 2.56, epsilon = 1e-9);
        assert_relative_eq!(p.resistance, 1.932_288, epsilon = 1e-9);
        assert_relative_eq!(p.score, 96.711_967_89, epsilon = 1e-6);
    }

    #[test]
    fn open_surface_penetrates_fully() {
        let p = score(4.0, PickleStrategy::Chaser, -20.0, 0.0);
        assert_relative_eq!(p.resistance, 0.0);
        assert_relative_eq!(p.score, 100.0);
    }

    #[test]
    fn chaser_wall_never_helps() {
        for zeta_mv in [0.0, 10.0, 80.0, 500.0] {
            let equilibrium = score(2.5, PickleStrategy::Equilibrium, zeta_mv, 20.0);
            let chaser = score(2.5, PickleStrategy::Chaser, zeta_mv, 20.0);
            assert!(chaser.score <= equilibrium.score);
        }
    }

    #[test]
    fn thicker_hides_resist_quadratically() {
        let thin = score(1.0, PickleStrategy::Equilibrium, 50.0, 10.0);
        let thick = score(2.0, PickleStrategy::Equilibrium, 50.0, 10.0);
        assert_relative_eq!(thick.resistance, 4.0 * thin.resistance, epsilon = 1e-9);
    }

    #[test]
    fn score_stays_in_bounds_at_extremes() {
        let stuck = score(6.0, PickleStrategy::Chaser, 1e6, 0.0);
        assert!((0.0..=100.0).contains(&stuck.score));

        // A negative drive (very cold float) cannot push the score outside the clamp.
        let p = Penetration::compute(
            Length::new::<millimeter>(3.0),
            PickleStrategy::Equilibrium,
            &zeta(40.0),
            &thermal(-0.5, 1.0),
            &work(10.0),
            &PenetrationConfig::default(),
        );
        assert!((0.0..=100.0).contains(&p.score));
    }

    #[test]
    fn overflowing_resistance_and_drive_score_zero() {
        let p = Penetration::compute(
            Length::new::<millimeter>(1e160),
            PickleStrategy::Equilibrium,
            &zeta(55.5),
            &thermal(1.0, 1.6),
            &work(f64::INFINITY),
            &PenetrationConfig::default(),
        );
        assert!(p.resistance.is_infinite());
        assert_relative_eq!(p.score, 0.0);

        let p = score(1e160, PickleStrategy::Chaser, 55.5, 1e300);
        assert!((0.0..=100.0).contains(&p.score));
    }
}
