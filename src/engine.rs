//! QuizEngine - everything the presentation layer talks to
//!
//! Owns the repository, the selection draft, the current session and the RNG.
//! The presentation layer reads state from here and forwards user intents.

use crate::config::QuizConfig;
use crate::error::{QuizError, Result};
use crate::question::{Book, Difficulty, QuestionRecord, QuestionRepository};
use crate::results::{summarize, QuizSummary, ScoreBand};
use crate::sampler::{available_counts, randomize_all, select_count};
use crate::session::{AnswerFeedback, QuizSession, QuizState, SelectionDraft};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

pub struct QuizEngine {
    repository: QuestionRepository,
    config: QuizConfig,
    draft: SelectionDraft,
    session: QuizSession,
    rng: StdRng,
}

impl QuizEngine {
    pub fn new(repository: QuestionRepository, config: QuizConfig) -> Self {
        Self::with_rng(repository, config, StdRng::from_entropy())
    }

    /// Engine whose sampling and option order are reproducible
    pub fn with_seed(repository: QuestionRepository, config: QuizConfig, seed: u64) -> Self {
        Self::with_rng(repository, config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(repository: QuestionRepository, config: QuizConfig, rng: StdRng) -> Self {
        Self {
            repository,
            config,
            draft: SelectionDraft::new(),
            session: QuizSession::new(),
            rng,
        }
    }

    pub fn repository(&self) -> &QuestionRepository {
        &self.repository
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn draft(&self) -> &SelectionDraft {
        &self.draft
    }

    // ------------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------------

    pub fn available_books(&self) -> &[Book] {
        self.repository.available_books()
    }

    pub fn available_difficulties(&self) -> &'static [Difficulty] {
        &Difficulty::ALL
    }

    /// Question counts to offer for a book/difficulty filter
    pub fn available_counts(&self, book: Option<Book>, difficulty: Option<Difficulty>) -> Vec<usize> {
        available_counts(
            self.repository.count(book, difficulty),
            &self.config.count_thresholds,
        )
    }

    /// Number of questions matching the current draft
    pub fn question_count(&self) -> usize {
        self.repository
            .count(self.draft.book(), self.draft.difficulty())
    }

    pub fn select_book(&mut self, book: Option<Book>) {
        self.draft.select_book(book);
    }

    pub fn select_difficulty(&mut self, difficulty: Option<Difficulty>) {
        self.draft.select_difficulty(difficulty);
    }

    pub fn select_count(&mut self, count: Option<usize>) {
        self.draft.select_count(count);
    }

    /// Build a fresh session from the current draft
    ///
    /// Samples the questions and shuffles every question's options anew; a
    /// selection matching nothing fails with `NoQuestionsAvailable`.
    pub fn start_quiz(&mut self) -> Result<()> {
        if self.session.state() != QuizState::Selecting {
            return Err(QuizError::InvalidTransition {
                action: "start a quiz",
                state: self.session.state().name(),
            });
        }

        let pool = self
            .repository
            .get_questions(self.draft.book(), self.draft.difficulty());
        let criteria = self.draft.criteria(pool.len());
        let chosen = select_count(pool, criteria.count, &mut self.rng);
        let questions: Vec<QuestionRecord> = randomize_all(&chosen, &mut self.rng);

        self.session.initialize(questions, criteria)?;
        info!(
            "Started quiz: {} questions (book: {}, difficulty: {}, count: {})",
            self.session.len(),
            criteria.book.map_or("all".to_string(), |b| b.to_string()),
            criteria
                .difficulty
                .map_or("all".to_string(), |d| d.to_string()),
            criteria.count
        );
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Session intents
    // ------------------------------------------------------------------------

    pub fn select_answer(&mut self, index: usize) -> Result<AnswerFeedback> {
        self.session.select_answer(index)
    }

    pub fn proceed(&mut self) -> Result<QuizState> {
        self.session.proceed()
    }

    pub fn restart(&mut self) -> Result<()> {
        self.session.restart()
    }

    /// Abandon the session and clear the selection
    pub fn return_to_selection(&mut self) {
        self.session.return_to_selection();
        self.draft.clear();
    }

    pub fn review_questions(&mut self) -> Result<()> {
        self.session.review_questions()
    }

    pub fn return_to_results(&mut self) -> Result<()> {
        self.session.return_to_results()
    }

    // ------------------------------------------------------------------------
    // Session view
    // ------------------------------------------------------------------------

    pub fn state(&self) -> QuizState {
        self.session.state()
    }

    pub fn current_question(&self) -> Option<&QuestionRecord> {
        self.session.current_question()
    }

    pub fn progress_fraction(&self) -> f64 {
        self.session.progress_fraction()
    }

    pub fn is_complete(&self) -> bool {
        self.session.is_complete()
    }

    pub fn score(&self) -> usize {
        self.session.score()
    }

    pub fn summary(&self) -> Result<QuizSummary> {
        summarize(&self.session)
    }

    /// Band of the finished session under the configured thresholds
    pub fn band(&self) -> Result<ScoreBand> {
        Ok(self.summary()?.band(&self.config.bands))
    }
}

impl std::fmt::Debug for QuizEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuizEngine")
            .field("repository", &self.repository)
            .field("config", &self.config)
            .field("draft", &self.draft)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}
