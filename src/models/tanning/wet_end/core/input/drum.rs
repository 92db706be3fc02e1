use uom::si::f64::{AngularVelocity, Length, Mass};

/// Drum geometry and load for the fatliquoring float.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drum {
    /// Rotational speed.
    pub speed: AngularVelocity,

    /// Internal drum diameter.
    pub diameter: Length,

    /// Weight of goods in the drum.
    pub goods_weight: Mass,
}
