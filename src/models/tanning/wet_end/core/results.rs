//! Simulation results as consumed by the presentation layer.

use super::Fixation;

/// The rounded result record of one wet-end simulation.
///
/// Values are rounded half away from zero to the precision the presentation
/// layer displays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationResult {
    /// Effective zeta potential in mV (1 decimal). Negative means an open surface.
    pub zeta: f64,

    /// Penetration score in percent, within `[0, 100]` (1 decimal).
    pub penetration: f64,

    /// Vapor-barrier index (2 decimals).
    pub vbi: f64,

    /// Drying complexity (1 decimal).
    pub complexity: f64,

    /// Predicted area yield in percent, at least 78 (1 decimal).
    pub area_yield: f64,

    /// Snap risk, at least 1.0 (2 decimals).
    pub snap_risk: f64,

    /// Kinetic work proxy in kJ·m/s (2 decimals).
    pub oomph: f64,

    /// Peripheral drum velocity in m/s (2 decimals).
    pub velocity: f64,

    /// Processing note of the resolved chemistry.
    pub chemistry_note: &'static str,

    /// Fixation regime selected by the drying method.
    pub fixation: Fixation,

    /// Processing note of the fixation regime.
    pub fixation_note: &'static str,
}

/// Rounds half away from zero to `places` decimals.
pub(super) fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10_f64.powi(places);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_relative_eq!(round_to(85.9115, 1), 85.9);
        assert_relative_eq!(round_to(41.605_682, 2), 41.61);
        assert_relative_eq!(round_to(0.125, 2), 0.13);
        assert_relative_eq!(round_to(-2.25, 1), -2.3);
        assert_relative_eq!(round_to(1.6 + 5e-16, 2), 1.6);
    }
}
