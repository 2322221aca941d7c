//! Application layer for the play context.

pub mod direct_play;
pub mod random_play;
