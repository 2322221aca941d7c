//! Quiz catalog bounded context.
//!
//! Responsible for the lifecycle of quiz records: listing, showing,
//! creating, editing and deleting them, plus the default seed set.

pub mod application;
pub mod domain;
