//! Bible Quiz Core - question selection and quiz-session state machine
//!
//! This crate holds the logic behind a multiple-choice Bible trivia quiz:
//! loading and filtering questions by book and difficulty, sampling a session,
//! shuffling answer options, driving the answer/feedback/results flow and
//! summarizing the score. Rendering is left to the caller; with the `python`
//! feature the engine is also exposed as a Python extension module.
//!
//! ```
//! use bible_quiz_core::{Book, Difficulty, QuestionRepository, QuizConfig, QuizEngine};
//!
//! let mut engine = QuizEngine::with_seed(QuestionRepository::embedded(), QuizConfig::default(), 7);
//! engine.select_book(Some(Book::Exodus));
//! engine.select_difficulty(Some(Difficulty::Easy));
//! engine.select_count(Some(5));
//! engine.start_quiz()?;
//!
//! while !engine.is_complete() {
//!     engine.select_answer(0)?;
//!     engine.proceed()?;
//! }
//! let summary = engine.summary()?;
//! assert_eq!(summary.total, 5);
//! # Ok::<(), bible_quiz_core::QuizError>(())
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod question;
pub mod results;
pub mod sampler;
pub mod session;

#[cfg(feature = "python")]
mod python;

pub use crate::config::{BandThresholds, QuizConfig};
pub use crate::engine::QuizEngine;
pub use crate::error::{QuizError, Result};
pub use crate::question::{
    Book, Difficulty, EmbeddedSource, JsonDirSource, MemorySource, QuestionCache,
    QuestionRecord, QuestionRepository, QuestionSource, RawQuestion,
};
pub use crate::results::{summarize, QuestionSummary, QuizSummary, ScoreBand};
pub use crate::sampler::{available_counts, randomize_options, select_count, QuestionCount};
pub use crate::session::{
    AnswerFeedback, AnsweredQuestion, Outcome, QuizSession, QuizState, SelectionCriteria,
    SelectionDraft,
};
