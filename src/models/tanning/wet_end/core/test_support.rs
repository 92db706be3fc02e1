use uom::si::{
    angular_velocity::revolution_per_minute,
    f64::{AngularVelocity, Length, Mass, Ratio, ThermodynamicTemperature},
    length::{meter, millimeter},
    mass::kilogram,
    ratio::percent,
    thermodynamic_temperature::degree_celsius,
};

use super::{
    Climate, DryMethod, Drum, FloatBath, Offers, PickleStrategy, Process, TwinModel, VegTannin,
};

/// A 1.6 mm shoe upper neutralized to pH 5.7 on a 4.5 % chrome offer.
pub(super) fn reference_model() -> TwinModel {
    TwinModel::new(
        Length::new::<millimeter>(1.6),
        5.7,
        Ratio::new::<percent>(4.5),
    )
}

/// Waterproofed air-dried run in a 3 m production drum.
pub(super) fn reference_process() -> Process {
    Process {
        offers: Offers::from_percent(5.0, 0.5),
        veg_tannin: VegTannin::None,
        pickle: PickleStrategy::Equilibrium,
        dry_method: DryMethod::AirDrying,
        climate: Climate::Temperate,
        drum: Drum {
            speed: AngularVelocity::new::<revolution_per_minute>(12.0),
            diameter: Length::new::<meter>(3.0),
            goods_weight: Mass::new::<kilogram>(1000.0),
        },
        bath: FloatBath {
            retan: ThermodynamicTemperature::new::<degree_celsius>(35.0),
            fatliquor: ThermodynamicTemperature::new::<degree_celsius>(55.0),
        },
        waterproofed: true,
    }
}
