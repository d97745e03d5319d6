use std::collections::HashMap;

use log::warn;

use super::error::Error;
use crate::model::charge_state::{ChargeState, ChargeStateId};
use crate::model::conformer::ChargeLookup;
use crate::model::microstate::Sample;

/// In-progress reduction: one accumulating [`ChargeState`] per distinct identity,
/// kept in first-observation order.
///
/// Averages are not meaningful while folding. They are computed once, by
/// [`finalize`](Tally::finalize), which consumes the tally. Partial tallies built
/// over disjoint partitions of the input can be combined with [`merge`](Tally::merge)
/// before finalizing.
#[derive(Debug, Default)]
pub struct Tally {
    index: HashMap<ChargeStateId, usize>,
    states: Vec<ChargeState>,
    samples: usize,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct charge patterns seen so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Number of raw samples folded in, including those from merged tallies.
    #[inline]
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Resolves `sample` to its charge pattern and folds its statistics in.
    pub fn fold<S, L>(&mut self, sample: &S, lookup: &L) -> Result<(), Error>
    where
        S: Sample + ?Sized,
        L: ChargeLookup + ?Sized,
    {
        let charges = resolve_charges(sample.state(), lookup, self.samples)?;
        if sample.count() == 0 {
            warn!(
                "microstate {} has a zero count and contributes nothing to {:?}",
                self.samples, charges
            );
        }
        self.samples += 1;

        let id = ChargeStateId::encode(&charges);
        match self.index.get(&id) {
            Some(&slot) => self.states[slot].accumulate(sample.energy(), sample.count())?,
            None => {
                let total_energy = sample.energy() * sample.count() as f64;
                self.index.insert(id.clone(), self.states.len());
                self.states
                    .push(ChargeState::from_id(id, total_energy, sample.count()));
            }
        }
        Ok(())
    }

    /// Combines a tally built over another partition of the input: totals and
    /// counts add up per identity; identities new to `self` keep `other`'s order.
    ///
    /// Fails with [`Error::CountOverflow`] if a combined count exceeds `u64::MAX`;
    /// states merged before the failing one stay merged.
    pub fn merge(&mut self, other: Tally) -> Result<(), Error> {
        self.samples += other.samples;
        for state in other.states {
            match self.index.get(state.id()) {
                Some(&slot) => self.states[slot].absorb(state.total_energy(), state.count())?,
                None => {
                    self.index.insert(state.id().clone(), self.states.len());
                    self.states.push(state);
                }
            }
        }
        Ok(())
    }

    /// Computes every state's average energy and releases the states.
    pub fn finalize(self) -> Result<Vec<ChargeState>, Error> {
        let mut states = self.states;
        for state in &mut states {
            state.finalize()?;
        }
        Ok(states)
    }
}

/// Maps each site's conformer choice to its formal charge, rounded half-to-even.
pub fn resolve_charges<L>(state: &[usize], lookup: &L, sample: usize) -> Result<Vec<i32>, Error>
where
    L: ChargeLookup + ?Sized,
{
    state
        .iter()
        .map(|&conformer| {
            let value = lookup
                .charge(conformer)
                .ok_or(Error::UnknownConformer { sample, conformer })?;
            round_charge(value).ok_or(Error::InvalidCharge { conformer, value })
        })
        .collect()
}

fn round_charge(value: f64) -> Option<i32> {
    let rounded = value.round_ties_even();
    if rounded.is_finite() && rounded >= f64::from(i32::MIN) && rounded <= f64::from(i32::MAX) {
        Some(rounded as i32)
    } else {
        None
    }
}
