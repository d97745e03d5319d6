use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::error::Error;

/// Charge state field used as a ranking key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum SortKey {
    /// Number of sampled occurrences.
    #[default]
    Count,
    /// Count-weighted mean energy (the state's "E").
    AverageEnergy,
    /// Sum of energy × count over all folded samples.
    TotalEnergy,
}

impl SortKey {
    /// Whether ranking by this key treats lower values as better.
    #[inline]
    pub fn is_energy(self) -> bool {
        matches!(self, SortKey::AverageEnergy | SortKey::TotalEnergy)
    }

    /// The only sort direction under which "top" is meaningful for this key:
    /// descending for frequency, ascending for energy.
    #[inline]
    pub fn top_descending(self) -> bool {
        !self.is_energy()
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Count => write!(f, "count"),
            SortKey::AverageEnergy => write!(f, "E"),
            SortKey::TotalEnergy => write!(f, "total_E"),
        }
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "count" => Ok(SortKey::Count),
            "E" | "energy" | "average_E" | "average_energy" => Ok(SortKey::AverageEnergy),
            "total_E" | "total_energy" => Ok(SortKey::TotalEnergy),
            _ => Err(Error::InvalidSortKey(s.to_string())),
        }
    }
}

impl TryFrom<String> for SortKey {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Ranking options: which field to sort by, in which direction, and how many
/// entries a top-N selection keeps.
///
/// The default is the "most frequent" selection: `count`, descending, N = 1.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RankConfig {
    pub key: SortKey,
    pub descending: bool,
    pub n: usize,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            key: SortKey::Count,
            descending: true,
            n: 1,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RankFile {
    #[serde(default)]
    rank: RankConfig,
}

impl RankConfig {
    /// The canonical top-N configuration for `key`: descending for count,
    /// ascending for either energy.
    pub fn top(key: SortKey, n: usize) -> Self {
        Self {
            key,
            descending: key.top_descending(),
            n,
        }
    }

    /// Parses a `[rank]` table from TOML text. A missing table yields the default.
    ///
    /// The result is not validated; call [`validate`](Self::validate) once any
    /// overrides have been applied.
    pub fn from_toml_str(text: &str) -> Result<Self, Error> {
        let file: RankFile = toml::from_str(text)?;
        Ok(file.rank)
    }

    /// Checks that this configuration describes a meaningful top-N selection.
    pub fn validate(&self) -> Result<(), Error> {
        if self.n == 0 {
            return Err(Error::InvalidTopCount);
        }
        if self.descending != self.key.top_descending() {
            return Err(Error::invalid_top_direction(self.key, self.descending));
        }
        Ok(())
    }
}
