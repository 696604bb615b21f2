//! Visible-set derivation and pagination policy.
//!
//! # Responsibility
//! - Derive the ordered task sequence a list view should show from a store
//!   snapshot plus (filter, search, sort) inputs.
//! - Track the incremental pagination cursor over that sequence.
//!
//! # Invariants
//! - Derivation is a pure function: same inputs, same output, no mutation.
//! - The pagination cursor never exceeds the visible sequence length.

pub mod pager;
pub mod visible;
