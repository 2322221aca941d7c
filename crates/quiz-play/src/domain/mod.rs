//! Domain layer for the play context.

pub mod answer;
pub mod random_play;
