use super::{Climate, DryMethod, Drum, FloatBath, Offers, PickleStrategy, VegTannin};

/// Process parameters of one wet-end scenario.
///
/// Together with a fatliquor chemistry, these are the inputs of a single
/// simulation.
/// Values are not range-checked; see [`Process::validate`] for the optional
/// boundary check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Process {
    pub offers: Offers,
    pub veg_tannin: VegTannin,
    pub pickle: PickleStrategy,
    pub dry_method: DryMethod,
    pub climate: Climate,
    pub drum: Drum,
    pub bath: FloatBath,

    /// Whether a polymer waterproofing agent is applied.
    pub waterproofed: bool,
}
