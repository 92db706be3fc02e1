//! Mechanical work imparted by the rotating drum.

use std::f64::consts::PI;

use uom::si::{
    acceleration::meter_per_second_squared,
    angular_velocity::revolution_per_minute,
    energy::kilojoule,
    f64::{Acceleration, Energy, Velocity},
    length::meter,
    velocity::meter_per_second,
};

use super::Drum;

/// Constants for the mechanical work stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MechanicalConfig {
    /// Gravitational acceleration acting on the tumbling goods.
    pub gravity: Acceleration,

    /// Effective fall height as a fraction of the drum diameter.
    pub fall_height_fraction: f64,
}

impl Default for MechanicalConfig {
    fn default() -> Self {
        Self {
            gravity: Acceleration::new::<meter_per_second_squared>(9.81),
            fall_height_fraction: 0.75,
        }
    }
}

/// Agitation delivered to the substrate by one drum configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MechanicalWork {
    /// Peripheral velocity of the drum shell.
    pub velocity: Velocity,

    /// Potential energy released when the load falls from the effective height.
    pub drop_energy: Energy,

    /// Kinetic work proxy, velocity (m/s) times drop energy (kJ).
    pub oomph: f64,
}

impl MechanicalWork {
    pub(super) fn compute(drum: &Drum, config: &MechanicalConfig) -> Self {
        let diameter = drum.diameter.get::<meter>();
        let rpm = drum.speed.get::<revolution_per_minute>();
        let velocity = Velocity::new::<meter_per_second>(PI * diameter * rpm / 60.0);

        let fall_height = drum.diameter * config.fall_height_fraction;
        let drop_energy: Energy = drum.goods_weight * config.gravity * fall_height;

        let oomph = velocity.get::<meter_per_second>() * drop_energy.get::<kilojoule>();

        Self {
            velocity,
            drop_energy,
            oomph,
        }
    }
}
