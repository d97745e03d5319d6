//! Aggregation of Monte-Carlo protonation microstates into charge microstates.
//!
//! A protonation/redox Monte-Carlo run samples microstates: one conformer per
//! titratable site, with an energy and a visit count. Many conformers carry the
//! same formal charge, so many microstates describe the same *charge* pattern.
//! This crate collapses them into [`ChargeState`]s, one per distinct pattern of
//! rounded site charges, with count-weighted average energies, and ranks the
//! result by frequency or energy.
//!
//! # Quick Start
//!
//! ```
//! use crgms::{Microstate, ReduceError, SortKey, reduce, top_n};
//!
//! // Conformer index -> formal charge
//! let charges = vec![1.0, 0.0, -1.0];
//!
//! let samples = vec![
//!     Microstate::new(vec![0, 1, 2], 10.0, 5),
//!     Microstate::new(vec![0, 1, 2], 20.0, 3),
//!     Microstate::new(vec![1, 1, 2], 5.0, 2),
//! ];
//!
//! let states = reduce(&samples, &charges)?;
//! assert_eq!(states.len(), 2);
//!
//! // The two samples of pattern [1, 0, -1] merge: (10·5 + 20·3) / 8
//! let top = top_n(&states, 1, SortKey::Count, true)?;
//! assert_eq!(top[0].charges(), vec![1, 0, -1]);
//! assert_eq!(top[0].count(), 8);
//! assert_eq!(top[0].average_energy(), 13.75);
//!
//! // "Top" by energy means lowest first; asking for the highest is refused
//! assert!(top_n(&states, 1, SortKey::AverageEnergy, true).is_err());
//! # Ok::<(), ReduceError>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`]: Conformer table and microstate table readers, report writers
//! - [`reduce()`]: Fold raw microstates into charge states
//! - [`sort`] / [`top_n`]: Ranking over reduced states
//! - [`RankConfig`]: Validated ranking options, loadable from TOML
//!
//! # Data Types
//!
//! - [`Microstate`]: One raw sample; any type implementing [`Sample`] works
//! - [`ConformerTable`] / [`Conformer`]: Charge per conformer; any [`ChargeLookup`] works
//! - [`ChargeState`]: Aggregated charge pattern with count, total and average energy
//! - [`ChargeStateId`]: Compact, lossless, content-addressed identity of a charge pattern
//! - [`ChargeRecord`]: The identity/energy/count capability used for comparison

mod model;
mod reduce;

pub mod io;

pub use model::charge_state::{
    ChargeRecord, ChargeState, ChargeStateId, compare, format_count, format_energy,
};
pub use model::conformer::{ChargeLookup, Conformer, ConformerTable};
pub use model::microstate::{Microstate, Sample};

pub use reduce::{RankConfig, SortKey, Tally, reduce, resolve_charges, sort, top_n};

pub use reduce::Error as ReduceError;
