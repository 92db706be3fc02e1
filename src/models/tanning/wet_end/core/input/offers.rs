use uom::si::{f64::Ratio, ratio::percent};

/// Anionic auxiliary offers, as a fraction of shaved weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offers {
    /// Syntan offer.
    pub syntan: Ratio,

    /// Naphthalene sulphonic acid (NSA) offer.
    pub nsa: Ratio,
}

impl Offers {
    /// Constructs offers from percentages of shaved weight.
    #[must_use]
    pub fn from_percent(syntan: f64, nsa: f64) -> Self {
        Self {
            syntan: Ratio::new::<percent>(syntan),
            nsa: Ratio::new::<percent>(nsa),
        }
    }
}
