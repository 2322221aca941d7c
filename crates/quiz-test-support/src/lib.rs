//! Shared test doubles and utilities for the quiz web application.

mod clock;
mod repository;
mod rng;

pub use clock::{FixedClock, fixed_now};
pub use repository::{FailingQuizRepository, InMemoryQuizRepository, VanishingQuizRepository};
pub use rng::{MockRng, SequenceRng};
