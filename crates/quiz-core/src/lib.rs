//! Quiz Core: shared domain abstractions.
//!
//! This crate defines the record types, traits and errors that the catalog
//! and play contexts depend on. It contains no infrastructure code.

pub mod clock;
pub mod error;
pub mod quiz;
pub mod repository;
pub mod rng;
