use std::{fmt, str::FromStr};

use crate::models::tanning::wet_end::core::WetEndError;

/// Implements the label contract shared by the categorical process inputs.
macro_rules! labelled {
    ($ty:ident, $category:literal, { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $ty {
            /// All variants, in the order the collection surface lists them.
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            /// Returns the label used by the input collection surface.
            #[must_use]
            pub fn label(self) -> &'static str {
                match self {
                    $($ty::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $ty {
            type Err = WetEndError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok($ty::$variant),)+
                    _ => Err(WetEndError::UnknownCategory {
                        category: $category,
                        label: s.to_owned(),
                    }),
                }
            }
        }
    };
}

/// Vegetable tannin used in the retannage, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum VegTannin {
    #[default]
    None,
    Tara,
    Mimosa,
    Chestnut,
}

labelled!(VegTannin, "vegetable tannin", {
    None => "None",
    Tara => "Tara",
    Mimosa => "Mimosa",
    Chestnut => "Chestnut",
});

/// Pickle strategy used ahead of tanning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PickleStrategy {
    /// Salt and acid balanced through the cross section.
    #[default]
    Equilibrium,
    /// A late acid chaser that leaves a dense mineral wall near the grain.
    Chaser,
}

labelled!(PickleStrategy, "pickle strategy", {
    Equilibrium => "Equilibrium",
    Chaser => "Chaser",
});

/// Drying method applied after setting out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DryMethod {
    #[default]
    AirDrying,
    PartialVacuum,
}

labelled!(DryMethod, "drying method", {
    AirDrying => "Air Drying",
    PartialVacuum => "Partial Vacuum",
});

/// Ambient climate of the drying loft.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Climate {
    #[default]
    Temperate,
    Tropical,
}

labelled!(Climate, "climate", {
    Temperate => "Temperate",
    Tropical => "Tropical",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_parse_back() {
        for veg in VegTannin::ALL {
            assert_eq!(veg.label().parse::<VegTannin>().unwrap(), *veg);
        }
        for pickle in PickleStrategy::ALL {
            assert_eq!(pickle.label().parse::<PickleStrategy>().unwrap(), *pickle);
        }
        for method in DryMethod::ALL {
            assert_eq!(method.to_string().parse::<DryMethod>().unwrap(), *method);
        }
        for climate in Climate::ALL {
            assert_eq!(climate.label().parse::<Climate>().unwrap(), *climate);
        }
    }

    #[test]
    fn collection_surface_labels() {
        assert_eq!(
            "Partial Vacuum".parse::<DryMethod>().unwrap(),
            DryMethod::PartialVacuum
        );
        assert_eq!(DryMethod::AirDrying.label(), "Air Drying");
        assert_eq!(VegTannin::ALL.len(), 4);
    }

    #[test]
    fn unknown_label_names_its_category() {
        let err = "Kiln".parse::<DryMethod>().unwrap_err();
        assert_eq!(
            err,
            WetEndError::UnknownCategory {
                category: "drying method",
                label: "Kiln".to_owned(),
            }
        );
        assert!("tropical".parse::<Climate>().is_err());
        assert!("Quebracho".parse::<VegTannin>().is_err());
    }
}
