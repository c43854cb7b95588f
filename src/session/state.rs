//! Session states and per-question outcomes

use serde::Serialize;
use std::fmt;

/// Where the quiz currently is
///
/// Feedback carries the answer it is showing, so "feedback without an
/// answer" cannot be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum QuizState {
    /// No questions loaded; the user is choosing book, difficulty and count
    #[default]
    Selecting,
    /// Waiting for an answer to the current question
    Active,
    /// Showing the result of the answer just given
    Feedback { selected: usize, is_correct: bool },
    /// Every question answered and acknowledged
    Completed,
    /// Browsing the answered questions from the results screen
    Reviewing,
}

impl QuizState {
    pub fn name(&self) -> &'static str {
        match self {
            QuizState::Selecting => "selecting",
            QuizState::Active => "active",
            QuizState::Feedback { .. } => "feedback",
            QuizState::Completed => "completed",
            QuizState::Reviewing => "reviewing",
        }
    }
}

impl fmt::Display for QuizState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of one question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    #[default]
    Unanswered,
    Correct,
    Incorrect,
}

impl Outcome {
    pub fn is_answered(self) -> bool {
        self != Outcome::Unanswered
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Unanswered => "unanswered",
            Outcome::Correct => "correct",
            Outcome::Incorrect => "incorrect",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
