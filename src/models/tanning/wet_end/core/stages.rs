use uom::si::{electric_potential::millivolt, velocity::meter_per_second};

use crate::support::chemistry::FatliquorSpec;

use super::{
    Drying, MechanicalWork, Penetration, SimulationResult, ThermalResponse, VaporBarrier,
    ZetaPotential, results::round_to,
};

/// Unrounded outputs of every stage of one simulation, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stages {
    /// Drum velocity, drop energy and oomph.
    pub mechanical: MechanicalWork,

    /// Surface charge after tannin masking.
    pub zeta: ZetaPotential,

    /// Oil mobility and snap fixation risk.
    pub thermal: ThermalResponse,

    /// Fatliquor penetration into the core.
    pub penetration: Penetration,

    /// Vapor barrier before drying.
    pub barrier: VaporBarrier,

    /// Vapor barrier after drying, with the fixation outcome.
    pub drying: Drying,

    /// Predicted area yield in percent.
    pub area_yield: f64,
}

impl Stages {
    /// Rounds the stage outputs into the result record.
    #[must_use]
    pub fn report(&self, spec: &FatliquorSpec) -> SimulationResult {
        SimulationResult {
            zeta: round_to(self.zeta.effective.get::<millivolt>(), 1),
            penetration: round_to(self.penetration.score, 1),
            vbi: round_to(self.drying.vbi, 2),
            complexity: round_to(self.drying.complexity, 1),
            area_yield: round_to(self.area_yield, 1),
            snap_risk: round_to(self.thermal.snap_risk, 2),
            oomph: round_to(self.mechanical.oomph, 2),
            velocity: round_to(self.mechanical.velocity.get::<meter_per_second>(), 2),
            chemistry_note: spec.description,
            fixation: self.drying.fixation,
            fixation_note: self.drying.fixation.note(),
        }
    }
}
