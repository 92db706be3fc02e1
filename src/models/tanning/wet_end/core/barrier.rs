//! Vapor-barrier index (VBI), the "clagginess" of the grain surface.
//!
//! Starts at 1.0 and picks up independent multiplicative penalties.

use uom::si::{f64::Ratio, ratio::percent};

use crate::support::chemistry::FatliquorSpec;

/// Constants for the vapor-barrier stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarrierConfig {
    /// pH above which low-stability oils bind at the surface.
    pub greasy_onset_ph: f64,

    /// Stability score below which an oil counts as low-stability.
    pub stability_threshold: f64,

    /// Penalty for surface-bound oil.
    pub greasy_factor: f64,

    /// Free chrome above which unbound cations foul the surface.
    pub free_chrome_onset: Ratio,

    /// Base penalty for chrome fouling.
    pub fouling_base: f64,

    /// Additional fouling penalty per percent of free chrome.
    pub fouling_gain: f64,

    /// Penalty for a polymer waterproofing film.
    pub waterproof_factor: f64,
}

impl Default for BarrierConfig {
    fn default() -> Self {
        Self {
            greasy_onset_ph: 5.3,
            stability_threshold: 4.0,
            greasy_factor: 2.1,
            free_chrome_onset: Ratio::new::<percent>(1.0),
            fouling_base: 1.2,
            fouling_gain: 0.06,
            waterproof_factor: 1.35,
        }
    }
}

/// Vapor-barrier index and the penalties that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VaporBarrier {
    /// The accumulated index.
    pub index: f64,

    /// Low-stability oil bound at the surface at elevated pH.
    pub greasy: bool,

    /// Unbound chrome fouling the surface.
    pub chrome_fouling: bool,

    /// Waterproofing film applied.
    pub sealed: bool,
}

impl VaporBarrier {
    pub(super) fn compute(
        ph: f64,
        spec: &FatliquorSpec,
        free_chrome: Ratio,
        waterproofed: bool,
        config: &BarrierConfig,
    ) -> Self {
        let greasy = ph > config.greasy_onset_ph && spec.stability < config.stability_threshold;
        let chrome_fouling = free_chrome > config.free_chrome_onset;

        let mut index = 1.0;
        if greasy {
            index *= config.greasy_factor;
        }
        if chrome_fouling {
            index *= config.fouling_base + free_chrome.get::<percent>() * config.fouling_gain;
        }
        if waterproofed {
            index *= config.waterproof_factor;
        }

        Self {
            index,
            greasy,
            chrome_fouling,
            sealed: waterproofed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::chemistry::{Chemistry, ChemistryTable};

    fn vbi(ph: f64, chemistry: Chemistry, free_chrome: f64, waterproofed: bool) -> VaporBarrier {
        VaporBarrier::compute(
            ph,
            ChemistryTable::global().get(chemistry),
            Ratio::new::<percent>(free_chrome),
            waterproofed,
            &BarrierConfig::default(),
        )
    }

    #[test]
    fn clean_surface() {
        let barrier = vbi(5.0, Chemistry::SulphatedFishOil, 0.0, false);
        assert_relative_eq!(barrier.index, 1.0);
        assert!(!barrier.greasy && !barrier.chrome_fouling && !barrier.sealed);
    }

    #[test]
    fn stable_oil_with_free_chrome_and_waterproofing() {
        let barrier = vbi(5.7, Chemistry::SulphitedFishOil, 1.5, true);

        assert!(!barrier.greasy);
        assert_relative_eq!(barrier.index, 1.29 * 1.35, epsilon = 1e-9);
    }

    #[test]
    fn greasy_rubbish_regime() {
        let barrier = vbi(5.5, Chemistry::NeatsfootOil, 0.0, false);
        assert!(barrier.greasy);
        assert_relative_eq!(barrier.index, 2.1);

        // Stability 4 sits on the threshold and does not bind.
        assert!(!vbi(5.5, Chemistry::SulphatedVegetableOil, 0.0, false).greasy);

        // The pH threshold is strict.
        assert!(!vbi(5.3, Chemistry::NeatsfootOil, 0.0, false).greasy);
    }

    #[test]
    fn penalties_compose() {
        let barrier = vbi(6.0, Chemistry::SulphatedFishOil, 5.0, true);
        assert_relative_eq!(barrier.index, 2.1 * 1.5 * 1.35, epsilon = 1e-9);
    }

    #[test]
    fn free_chrome_onset_is_strict() {
        assert!(!vbi(5.0, Chemistry::PhosphoricEster, 1.0, false).chrome_fouling);
        assert!(vbi(5.0, Chemistry::PhosphoricEster, 1.01, false).chrome_fouling);
    }

    #[test]
    fn more_free_chrome_fouls_more() {
        let mut previous = vbi(5.0, Chemistry::PhosphoricEster, 1.1, false).index;
        for free_chrome in [1.5, 2.0, 3.5, 5.0] {
            let index = vbi(5.0, Chemistry::PhosphoricEster, free_chrome, false).index;
            assert!(index > previous);
            previous = index;
        }
    }
}
