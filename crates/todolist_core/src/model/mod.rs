//! Domain model for the task list.
//!
//! # Responsibility
//! - Define the canonical task record and its validation rules.
//! - Own all timestamp bookkeeping for task mutations.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - A task title is never empty after trimming, at any mutation point.
//! - Deletion is immediate and final; there are no tombstones.

pub mod task;
