use thiserror::Error;

use crate::support::{chemistry::UnknownChemistry, constraint::ConstraintError};

/// Errors raised by the wet-end twin model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WetEndError {
    /// The fatliquor chemistry is not in the reference table.
    #[error(transparent)]
    UnknownChemistry(#[from] UnknownChemistry),

    /// A categorical label did not match any known variant.
    #[error("unknown {category}: {label:?}")]
    UnknownCategory {
        /// The category being parsed (e.g., "drying method").
        category: &'static str,

        /// The label that failed to parse.
        label: String,
    },

    /// A parameter is outside its operating range.
    ///
    /// Only raised by the opt-in boundary validation.
    #[error("invalid {parameter}")]
    InvalidParameter {
        /// The parameter that failed validation.
        parameter: &'static str,

        /// The violated constraint.
        #[source]
        source: ConstraintError,
    },
}

impl WetEndError {
    pub(super) fn invalid(parameter: &'static str) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::InvalidParameter { parameter, source }
    }
}
