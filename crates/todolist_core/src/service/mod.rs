//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate validation, repository calls and feedback side-effects into
//!   use-case level APIs.
//! - Keep presentation layers decoupled from storage details.

pub mod task_service;
