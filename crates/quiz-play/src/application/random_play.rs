//! Random play-through handlers.
//!
//! Each round picks a quiz uniformly among those not yet answered correctly
//! in the current run. The `Mutex` around the RNG is locked only for the
//! synchronous pick, never across an await.

use std::sync::Mutex;

use quiz_core::error::DomainError;
use quiz_core::quiz::Quiz;
use quiz_core::repository::QuizRepository;
use quiz_core::rng::DeterministicRng;
use tracing::{debug, warn};

use crate::application::direct_play::load_quiz;
use crate::domain::answer::is_correct;
use crate::domain::random_play::RandomPlayState;

/// A quiz can vanish between counting and fetching; retry the pick this
/// many times before declaring the run finished.
const MAX_PICK_ATTEMPTS: usize = 2;

/// What the next random-play page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RandomRound {
    /// A quiz not yet answered in this run.
    Question {
        /// The quiz to ask.
        quiz: Quiz,
        /// Score so far.
        score: usize,
    },
    /// Every quiz has been answered; the run has been reset.
    Finished {
        /// Final score of the run.
        score: usize,
    },
}

/// Outcome of answering a quiz during random play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomCheckResult {
    /// The quiz that was answered.
    pub quiz_id: i64,
    /// The answer as submitted.
    pub answer: String,
    /// Whether the answer matched.
    pub correct: bool,
    /// Score after this answer.
    pub score: usize,
}

fn pick_offset(
    remaining: i64,
    rng: &Mutex<dyn DeterministicRng + Send>,
) -> Result<i64, DomainError> {
    let max = u32::try_from(remaining - 1).unwrap_or(u32::MAX);
    let mut rng_guard = rng
        .lock()
        .map_err(|e| DomainError::Infrastructure(format!("RNG mutex poisoned: {e}")))?;
    Ok(i64::from(rng_guard.next_u32_range(0, max)))
}

/// Chooses the next quiz of a random play-through.
///
/// When no unanswered quiz remains, returns `RandomRound::Finished` with the
/// run's score and resets `state`.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the repository fails or the RNG
/// mutex is poisoned.
pub async fn next_random_round(
    state: &mut RandomPlayState,
    rng: &Mutex<dyn DeterministicRng + Send>,
    repo: &dyn QuizRepository,
) -> Result<RandomRound, DomainError> {
    for _ in 0..MAX_PICK_ATTEMPTS {
        let remaining = repo.count_excluding(state.answered()).await?;
        if remaining <= 0 {
            break;
        }

        let offset = pick_offset(remaining, rng)?;
        if let Some(quiz) = repo.nth_excluding(state.answered(), offset).await? {
            debug!(quiz_id = quiz.id, remaining, "picked random quiz");
            return Ok(RandomRound::Question {
                quiz,
                score: state.score(),
            });
        }
        warn!(offset, remaining, "random quiz vanished before it could be loaded");
    }

    let score = state.score();
    state.reset();
    Ok(RandomRound::Finished { score })
}

/// Checks an answer given during random play and updates `state`.
///
/// # Errors
///
/// Returns `DomainError::QuizNotFound` if the quiz does not exist.
pub async fn check_random_answer(
    state: &mut RandomPlayState,
    quiz_id: i64,
    answer: &str,
    repo: &dyn QuizRepository,
) -> Result<RandomCheckResult, DomainError> {
    let quiz = load_quiz(quiz_id, repo).await?;
    let outcome = state.record(quiz.id, is_correct(answer, &quiz.answer));

    Ok(RandomCheckResult {
        quiz_id: quiz.id,
        answer: answer.to_owned(),
        correct: outcome.correct,
        score: outcome.score,
    })
}
