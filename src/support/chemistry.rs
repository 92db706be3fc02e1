//! Fatliquor chemistry reference data.
//!
//! Every wet-end model resolves its fatliquor through a single process-wide
//! [`ChemistryTable`].
//! The table is built once on first access and never mutated.
//!
//! ```
//! use wet_end_models::support::chemistry::{Chemistry, ChemistryTable};
//!
//! let table = ChemistryTable::global();
//!
//! let spec = table.lookup("Phosphoric Ester").unwrap();
//! assert_eq!(spec.stability, 9.0);
//!
//! assert_eq!(table.get(Chemistry::PhosphoricEster), spec);
//! assert!(table.lookup("Unknown Oil").is_err());
//! ```

use std::{fmt, str::FromStr, sync::LazyLock};

use thiserror::Error;

/// Fatliquor chemistry families accepted by the wet-end models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chemistry {
    SulphatedFishOil,
    SulphitedFishOil,
    SulphatedVegetableOil,
    SyntheticWaterproofingOil,
    PhosphoricEster,
    NeatsfootOil,
}

impl Chemistry {
    /// All chemistry families, in table order.
    pub const ALL: [Chemistry; 6] = [
        Chemistry::SulphatedFishOil,
        Chemistry::SulphitedFishOil,
        Chemistry::SulphatedVegetableOil,
        Chemistry::SyntheticWaterproofingOil,
        Chemistry::PhosphoricEster,
        Chemistry::NeatsfootOil,
    ];

    /// Returns the identifier used by the input collection surface.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::SulphatedFishOil => "Sulphated Fish Oil",
            Self::SulphitedFishOil => "Sulphited Fish Oil",
            Self::SulphatedVegetableOil => "Sulphated Vegetable Oil",
            Self::SyntheticWaterproofingOil => "Synthetic Waterproofing Oil",
            Self::PhosphoricEster => "Phosphoric Ester",
            Self::NeatsfootOil => "Raw/Neutral Oil (Neatsfoot)",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Chemistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Chemistry {
    type Err = UnknownChemistry;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|chemistry| chemistry.label() == s)
            .ok_or_else(|| UnknownChemistry {
                identifier: s.to_owned(),
            })
    }
}

/// Returned when a chemistry identifier is not in the reference table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown fatliquor chemistry: {identifier:?}")]
pub struct UnknownChemistry {
    /// The identifier that failed to resolve.
    pub identifier: String,
}

/// Physical and chemical properties of one fatliquor family.
#[derive(Debug, Clone, PartialEq)]
pub struct FatliquorSpec {
    /// Electrolyte stability score (observed range 1 to 9).
    ///
    /// Higher scores resist electrolyte-driven binding at the grain surface.
    pub stability: f64,

    /// Intrinsic core mobility of the emulsion, in `[0, 1]`.
    pub penetration_affinity: f64,

    /// Processing note shown alongside simulation results.
    pub description: &'static str,
}

/// The frozen fatliquor reference table.
#[derive(Debug)]
pub struct ChemistryTable {
    specs: [FatliquorSpec; 6],
}

static TABLE: LazyLock<ChemistryTable> = LazyLock::new(ChemistryTable::build);

impl ChemistryTable {
    /// Returns the process-wide table.
    #[must_use]
    pub fn global() -> &'static ChemistryTable {
        &TABLE
    }

    /// Resolves a chemistry identifier to its spec.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownChemistry`] if `identifier` is not one of the
    /// [`Chemistry`] labels.
    pub fn lookup(&self, identifier: &str) -> Result<&FatliquorSpec, UnknownChemistry> {
        let chemistry = identifier.parse::<Chemistry>()?;
        Ok(self.get(chemistry))
    }

    /// Returns the spec of a known chemistry.
    #[must_use]
    pub fn get(&self, chemistry: Chemistry) -> &FatliquorSpec {
        &self.specs[chemistry.index()]
    }

    /// Iterates over every chemistry and its spec, in table order.
    pub fn iter(&self) -> impl Iterator<Item = (Chemistry, &FatliquorSpec)> {
        Chemistry::ALL.into_iter().zip(self.specs.iter())
    }

    fn build() -> Self {
        Self {
            specs: [
                FatliquorSpec {
                    stability: 3.0,
                    penetration_affinity: 0.65,
                    description: "Classic anionic softener. Moderate electrolyte stability; \
                                  binds at the surface when the pH runs high.",
                },
                FatliquorSpec {
                    stability: 8.0,
                    penetration_affinity: 0.85,
                    description: "Sulphited emulsion with strong electrolyte stability; \
                                  penetrates deeply and tolerates late neutralization.",
                },
                FatliquorSpec {
                    stability: 4.0,
                    penetration_affinity: 0.6,
                    description: "Vegetable-based sulphated oil. Full handle, borderline \
                                  stability against chrome salts.",
                },
                FatliquorSpec {
                    stability: 6.0,
                    penetration_affinity: 0.5,
                    description: "Hydrophobic synthetic blend. Needs good fixation to avoid \
                                  a sealed, vapour-tight grain.",
                },
                FatliquorSpec {
                    stability: 9.0,
                    penetration_affinity: 0.9,
                    description: "Highly stable phosphate ester; light-fast and well suited \
                                  to thick substrates.",
                },
                FatliquorSpec {
                    stability: 1.0,
                    penetration_affinity: 0.3,
                    description: "Unemulsified neutral oil. Stays at the surface unless carried \
                                  by a stable emulsifier.",
                },
            ],
        }
    }
}
