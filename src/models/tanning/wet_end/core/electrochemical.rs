//! Electrochemical drag: the effective zeta potential of the tanned surface.
//!
//! Bound chrome and a low neutralization pH give the fibres a cationic charge
//! that grabs anionic fatliquor at the surface.
//! Syntans, NSA and vegetable tannins mask that charge.
//! A negative effective zeta means the surface is electrically open.

use uom::{
    ConstZero,
    si::{electric_potential::millivolt, f64::ElectricPotential, ratio::percent},
};

use super::{Offers, VegTannin};

/// Constants for the zeta potential stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElectrochemicalConfig {
    /// Charge contributed by fully saturated chrome.
    pub saturation_charge: ElectricPotential,

    /// pH at which the acidity term vanishes.
    pub neutral_ph: f64,

    /// Charge gained per pH unit below [`neutral_ph`](Self::neutral_ph).
    pub charge_per_ph: ElectricPotential,

    /// Masking per percent of syntan offer.
    pub syntan_masking: ElectricPotential,

    /// Masking per percent of NSA offer.
    pub nsa_masking: ElectricPotential,

    /// Masking contributed by tara.
    pub tara: ElectricPotential,

    /// Masking contributed by mimosa.
    pub mimosa: ElectricPotential,

    /// Masking contributed by chestnut.
    pub chestnut: ElectricPotential,
}

impl Default for ElectrochemicalConfig {
    fn default() -> Self {
        Self {
            saturation_charge: ElectricPotential::new::<millivolt>(100.0),
            neutral_ph: 7.0,
            charge_per_ph: ElectricPotential::new::<millivolt>(15.0),
            syntan_masking: ElectricPotential::new::<millivolt>(10.0),
            nsa_masking: ElectricPotential::new::<millivolt>(28.0),
            tara: ElectricPotential::new::<millivolt>(25.0),
            mimosa: ElectricPotential::new::<millivolt>(-6.0),
            chestnut: ElectricPotential::new::<millivolt>(-12.0),
        }
    }
}

impl ElectrochemicalConfig {
    /// Returns the masking contribution of a vegetable tannin.
    #[must_use]
    pub fn veg_power(&self, veg: VegTannin) -> ElectricPotential {
        match veg {
            VegTannin::None => ElectricPotential::ZERO,
            VegTannin::Tara => self.tara,
            VegTannin::Mimosa => self.mimosa,
            VegTannin::Chestnut => self.chestnut,
        }
    }
}

/// Surface charge balance after retannage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZetaPotential {
    /// Intrinsic charge from bound chrome and acidity.
    pub base_charge: ElectricPotential,

    /// Charge masked by anionic auxiliaries.
    pub masking: ElectricPotential,

    /// Net surface charge, `base_charge - masking`.
    pub effective: ElectricPotential,
}

impl ZetaPotential {
    pub(super) fn compute(
        chrome_saturation: f64,
        ph: f64,
        offers: &Offers,
        veg: VegTannin,
        config: &ElectrochemicalConfig,
    ) -> Self {
        let base_charge = config.saturation_charge * chrome_saturation
            + config.charge_per_ph * (config.neutral_ph - ph);

        let masking = config.syntan_masking * offers.syntan.get::<percent>()
            + config.nsa_masking * offers.nsa.get::<percent>()
            + config.veg_power(veg);

        Self {
            base_charge,
            masking,
            effective: base_charge - masking,
        }
    }

    /// Returns the positive part of the effective zeta, which resists penetration.
    #[must_use]
    pub fn sticky_charge(&self) -> ElectricPotential {
        if self.effective > ElectricPotential::ZERO {
            self.effective
        } else {
            ElectricPotential::ZERO
        }
    }
}
