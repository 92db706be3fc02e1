use uom::si::{f64::Ratio, ratio::percent};

use super::{
    BarrierConfig, DryingConfig, ElectrochemicalConfig, MechanicalConfig, PenetrationConfig,
    ThermalConfig, YieldConfig,
};

/// Model constants for a [`TwinModel`](super::TwinModel).
///
/// The default reproduces the published wet-end model.
/// Individual constants can be overridden for what-if studies.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WetEndConfig {
    pub chrome: ChromeConfig,
    pub mechanical: MechanicalConfig,
    pub electrochemical: ElectrochemicalConfig,
    pub thermal: ThermalConfig,
    pub penetration: PenetrationConfig,
    pub barrier: BarrierConfig,
    pub drying: DryingConfig,
    pub area_yield: YieldConfig,
}

/// Chrome binding constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChromeConfig {
    /// Chrome offer at which the collagen binding sites are saturated.
    ///
    /// Offer beyond this point stays unbound (Zhang's saturation principle).
    pub saturation_offer: Ratio,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            saturation_offer: Ratio::new::<percent>(3.0),
        }
    }
}
