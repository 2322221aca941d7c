//! Domain layer for the catalog context.

pub mod commands;
pub mod validation;
