//! Core data structures for charge microstate analysis.
//!
//! - [`microstate`] – Raw Monte-Carlo samples and the [`Sample`](microstate::Sample) capability.
//! - [`conformer`] – Conformer charges and the [`ChargeLookup`](conformer::ChargeLookup) capability.
//! - [`charge_state`] – Aggregated charge patterns with their content-addressed identity.
//!
//! Raw samples are keyed by conformer choice; charge states are keyed by the rounded
//! formal charge at each site, so many samples collapse into one charge state.

pub mod charge_state;
pub mod conformer;
pub mod microstate;
