//! Random play-through state.
//!
//! The state is the ordered list of quiz ids answered correctly in the
//! current run. It lives in the player's session between requests.

/// Result of recording one answer in a random play-through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomCheckOutcome {
    /// Whether the answer was correct.
    pub correct: bool,
    /// Score after this answer. On a miss this is the score the run reached
    /// before ending.
    pub score: usize,
}

/// Progress of a random play-through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RandomPlayState {
    answered: Vec<i64>,
}

impl RandomPlayState {
    /// Creates an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids answered correctly so far, in answer order.
    #[must_use]
    pub fn answered(&self) -> &[i64] {
        &self.answered
    }

    /// Number of quizzes answered correctly in this run.
    #[must_use]
    pub fn score(&self) -> usize {
        self.answered.len()
    }

    /// Records an answer to `quiz_id`. A correct answer adds the quiz to the
    /// answered set (once); an incorrect one ends the run and clears it.
    pub fn record(&mut self, quiz_id: i64, correct: bool) -> RandomCheckOutcome {
        if correct {
            if !self.answered.contains(&quiz_id) {
                self.answered.push(quiz_id);
            }
            RandomCheckOutcome {
                correct,
                score: self.score(),
            }
        } else {
            let score = self.score();
            self.reset();
            RandomCheckOutcome { correct, score }
        }
    }

    /// Starts a fresh run.
    pub fn reset(&mut self) {
        self.answered.clear();
    }
}
