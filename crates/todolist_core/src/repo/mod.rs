//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for tasks and prefs.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Repositories are pass-through: input validation belongs to the caller.
//! - Read paths reject invalid persisted state instead of masking it.
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod prefs_repo;
pub mod task_repo;
