use std::cmp::Ordering;

use super::config::{RankConfig, SortKey};
use super::error::Error;
use crate::model::charge_state::ChargeState;

fn cmp_by(key: SortKey, a: &ChargeState, b: &ChargeState) -> Ordering {
    match key {
        SortKey::Count => a.count().cmp(&b.count()),
        SortKey::AverageEnergy => a.average_energy().total_cmp(&b.average_energy()),
        SortKey::TotalEnergy => a.total_energy().total_cmp(&b.total_energy()),
    }
}

/// Returns the states ordered by `key`.
///
/// The sort is stable in both directions: states with equal keys keep their
/// input order. Energies use IEEE total ordering, so a NaN energy sorts after
/// every number when ascending.
pub fn sort(states: &[ChargeState], key: SortKey, descending: bool) -> Vec<ChargeState> {
    let mut sorted = states.to_vec();
    if descending {
        sorted.sort_by(|a, b| cmp_by(key, b, a));
    } else {
        sorted.sort_by(|a, b| cmp_by(key, a, b));
    }
    sorted
}

/// Returns the `n` most frequent (key = count, descending) or most favorable
/// (energy key, ascending) states.
///
/// Any other direction is refused, since "top" means highest for frequency but
/// lowest for energy. Asking for more states than exist returns them all.
pub fn top_n(
    states: &[ChargeState],
    n: usize,
    key: SortKey,
    descending: bool,
) -> Result<Vec<ChargeState>, Error> {
    RankConfig { key, descending, n }.validate()?;

    let mut sorted = sort(states, key, descending);
    sorted.truncate(n);
    Ok(sorted)
}

impl RankConfig {
    /// Sorts by this configuration's key and direction. `n` is not applied.
    pub fn sort(&self, states: &[ChargeState]) -> Vec<ChargeState> {
        sort(states, self.key, self.descending)
    }

    /// Top-N selection with this configuration.
    pub fn select(&self, states: &[ChargeState]) -> Result<Vec<ChargeState>, Error> {
        top_n(states, self.n, self.key, self.descending)
    }
}
