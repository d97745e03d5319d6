mod config;
mod error;
mod rank;
mod tally;

pub use config::{RankConfig, SortKey};
pub use error::Error;
pub use rank::{sort, top_n};
pub use tally::{Tally, resolve_charges};

use log::debug;

use crate::model::charge_state::ChargeState;
use crate::model::conformer::ChargeLookup;
use crate::model::microstate::Sample;

/// Collapses raw microstates into charge states.
///
/// Each sample's conformer choices are resolved through `lookup` to rounded
/// formal charges. Samples sharing a charge pattern are merged (energies weighted
/// by count), then every state's average energy is computed once. States come
/// back in the order their pattern was first seen; each identity appears once.
///
/// For keyed collections pass the values, e.g. `reduce(map.values(), &table)`.
pub fn reduce<I, L>(samples: I, lookup: &L) -> Result<Vec<ChargeState>, Error>
where
    I: IntoIterator,
    I::Item: Sample,
    L: ChargeLookup + ?Sized,
{
    let mut tally = Tally::new();
    for sample in samples {
        tally.fold(&sample, lookup)?;
    }

    debug!(
        "reduced {} microstates to {} charge states",
        tally.samples(),
        tally.len()
    );

    tally.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::microstate::Microstate;
    use std::collections::{BTreeMap, HashMap};

    fn charges() -> HashMap<usize, f64> {
        [(0, 1.0), (1, 0.0), (2, -1.0)].into_iter().collect()
    }

    fn samples() -> Vec<Microstate> {
        vec![
            Microstate::new(vec![0, 1, 2], 10.0, 5),
            Microstate::new(vec![0, 1, 2], 20.0, 3),
            Microstate::new(vec![1, 1, 2], 5.0, 2),
        ]
    }

    #[test]
    fn reduces_reference_scenario() {
        let states = reduce(&samples(), &charges()).unwrap();
        assert_eq!(states.len(), 2);

        let merged = states.iter().find(|s| s.charges() == [1, 0, -1]).unwrap();
        assert_eq!(merged.count(), 8);
        assert_eq!(merged.average_energy(), (10.0 * 5.0 + 20.0 * 3.0) / 8.0);
        assert_eq!(merged.average_energy(), 13.75);

        let single = states.iter().find(|s| s.charges() == [0, 0, -1]).unwrap();
        assert_eq!(single.count(), 2);
        assert_eq!(single.average_energy(), 5.0);

        let top = top_n(&states, 1, SortKey::Count, true).unwrap();
        assert_eq!(top[0].charges(), vec![1, 0, -1]);
    }

    #[test]
    fn disjoint_patterns_keep_their_own_statistics() {
        let input = vec![
            Microstate::new(vec![0, 0], 1.5, 4),
            Microstate::new(vec![0, 1], -2.5, 1),
            Microstate::new(vec![2, 1], 0.0, 7),
        ];
        let states = reduce(&input, &charges()).unwrap();
        assert_eq!(states.len(), input.len());
        for (state, sample) in states.iter().zip(&input) {
            assert_eq!(state.count(), sample.count);
            assert_eq!(state.average_energy(), sample.energy);
        }
    }

    #[test]
    fn output_preserves_first_observation_order() {
        let states = reduce(&samples(), &charges()).unwrap();
        assert_eq!(states[0].charges(), vec![1, 0, -1]);
        assert_eq!(states[1].charges(), vec![0, 0, -1]);
    }

    #[test]
    fn keyed_input_uses_values_only() {
        let keyed: BTreeMap<&str, Microstate> = ["c", "a", "b"]
            .into_iter()
            .zip(samples())
            .collect();
        let from_map = reduce(keyed.values(), &charges()).unwrap();
        let from_vec = reduce(&samples(), &charges()).unwrap();

        assert_eq!(from_map.len(), from_vec.len());
        for state in &from_vec {
            let other = from_map.iter().find(|s| s.id() == state.id()).unwrap();
            assert_eq!(other.count(), state.count());
            assert_eq!(other.average_energy(), state.average_energy());
        }
    }

    #[test]
    fn accepts_owned_samples() {
        let states = reduce(samples(), &charges()).unwrap();
        assert_eq!(states.len(), 2);
    }

    #[test]
    fn empty_input_reduces_to_nothing() {
        let states = reduce(Vec::<Microstate>::new(), &charges()).unwrap();
        assert!(states.is_empty());
    }

    #[test]
    fn sole_zero_count_sample_fails() {
        let input = vec![
            Microstate::new(vec![0, 1, 2], 10.0, 5),
            Microstate::new(vec![2, 2, 2], 1.0, 0),
        ];
        let err = reduce(&input, &charges()).unwrap_err();
        assert_eq!(
            err,
            Error::ZeroCount {
                charges: vec![-1, -1, -1]
            }
        );
    }

    #[test]
    fn counts_beyond_u64_are_an_error() {
        let input = vec![
            Microstate::new(vec![0], 1.0, u64::MAX),
            Microstate::new(vec![0], 1.0, 1),
        ];
        let err = reduce(&input, &vec![1.0]).unwrap_err();
        assert_eq!(err, Error::CountOverflow { charges: vec![1] });
    }

    #[test]
    fn cancelling_infinite_energies_are_an_error() {
        let input = vec![
            Microstate::new(vec![0], 1e300, 10_000_000_000),
            Microstate::new(vec![0], -1e300, 10_000_000_000),
        ];
        let err = reduce(&input, &vec![1.0]).unwrap_err();
        assert_eq!(err, Error::NonFiniteEnergy { charges: vec![1] });
    }

    #[test]
    fn unknown_conformer_names_the_sample() {
        let input = vec![
            Microstate::new(vec![0, 1, 2], 10.0, 5),
            Microstate::new(vec![0, 9, 2], 1.0, 1),
        ];
        let err = reduce(&input, &charges()).unwrap_err();
        assert_eq!(
            err,
            Error::UnknownConformer {
                sample: 1,
                conformer: 9
            }
        );
    }
}
