//! Shared application state.

use std::sync::{Arc, Mutex};

use quiz_core::clock::Clock;
use quiz_core::repository::QuizRepository;
use quiz_core::rng::DeterministicRng;

use crate::session::SessionStore;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Time source for quiz timestamps and session expiry.
    pub clock: Arc<dyn Clock + Send + Sync>,
    /// Random source for random play.
    pub rng: Arc<Mutex<dyn DeterministicRng + Send>>,
    /// Quiz persistence.
    pub quiz_repository: Arc<dyn QuizRepository>,
    /// Browser sessions.
    pub sessions: SessionStore,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock + Send + Sync>,
        rng: Arc<Mutex<dyn DeterministicRng + Send>>,
        quiz_repository: Arc<dyn QuizRepository>,
        sessions: SessionStore,
    ) -> Self {
        Self {
            clock,
            rng,
            quiz_repository,
            sessions,
        }
    }
}
