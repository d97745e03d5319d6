//! Error types for charge microstate reduction and ranking.
//!
//! Every variant is a deterministic contract violation: bad input data (unknown
//! conformers, unusable charges, degenerate counts) or a malformed ranking request.
//! None of them is transient, so callers report rather than retry.

use thiserror::Error;

use super::config::SortKey;

/// Errors that can occur while reducing or ranking charge microstates.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A microstate refers to a conformer the charge lookup does not know.
    #[error("microstate {sample} refers to unknown conformer {conformer}")]
    UnknownConformer {
        /// Position of the offending sample in the input.
        sample: usize,
        /// Conformer index that failed to resolve.
        conformer: usize,
    },

    /// A conformer charge cannot be rounded to a formal integer charge.
    #[error("conformer {conformer} has unusable charge {value}")]
    InvalidCharge {
        /// Conformer index carrying the charge.
        conformer: usize,
        /// The raw charge value.
        value: f64,
    },

    /// An identity accumulated no occurrences, so its average energy is undefined.
    ///
    /// Surfaced at finalization instead of producing a NaN or infinite energy.
    #[error("charge state {charges:?} has a total count of zero; average energy is undefined")]
    ZeroCount {
        /// The decoded charge pattern.
        charges: Vec<i32>,
    },

    /// Folding another sample would push an identity's count past `u64::MAX`.
    #[error("charge state {charges:?} has more occurrences than a 64-bit count can hold")]
    CountOverflow {
        /// The decoded charge pattern.
        charges: Vec<i32>,
    },

    /// The energy sum of an identity overflowed to infinity or became NaN.
    #[error("charge state {charges:?} has a non-finite total energy; average energy is undefined")]
    NonFiniteEnergy {
        /// The decoded charge pattern.
        charges: Vec<i32>,
    },

    /// A byte string is not a valid charge state identity.
    #[error("malformed charge state identity: {0}")]
    MalformedIdentity(String),

    /// The requested sort key is not a charge state field.
    #[error("invalid sort key '{0}'; expected one of: count, E, total_E")]
    InvalidSortKey(String),

    /// The sort direction contradicts the meaning of "top" for the key.
    #[error("top-N by {key} must be sorted {expected}, not {requested}")]
    InvalidTopDirection {
        /// The requested key.
        key: SortKey,
        /// The direction the key requires.
        expected: &'static str,
        /// The direction that was requested.
        requested: &'static str,
    },

    /// Top-N was requested with N = 0.
    #[error("top-N requires N >= 1")]
    InvalidTopCount,

    /// Failed to parse a ranking configuration file.
    #[error("failed to parse ranking configuration: {0}")]
    ConfigParse(String),
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::ConfigParse(e.to_string())
    }
}

impl Error {
    /// Creates an [`InvalidTopDirection`](Error::InvalidTopDirection) error for `key`
    /// requested with the given direction.
    pub fn invalid_top_direction(key: SortKey, descending: bool) -> Self {
        let direction = |d: bool| if d { "descending" } else { "ascending" };
        Self::InvalidTopDirection {
            key,
            expected: direction(!descending),
            requested: direction(descending),
        }
    }

    pub fn malformed_identity(details: impl Into<String>) -> Self {
        Self::MalformedIdentity(details.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_direction_message_names_both_directions() {
        let err = Error::invalid_top_direction(SortKey::Count, false);
        assert_eq!(
            err.to_string(),
            "top-N by count must be sorted descending, not ascending"
        );

        let err = Error::invalid_top_direction(SortKey::AverageEnergy, true);
        assert_eq!(
            err.to_string(),
            "top-N by E must be sorted ascending, not descending"
        );
    }

    #[test]
    fn toml_errors_convert_to_config_parse() {
        let toml_err = toml::from_str::<toml::Value>("rank = [").unwrap_err();
        let err: Error = toml_err.into();
        assert!(matches!(err, Error::ConfigParse(_)));
    }
}
