//! QuizSession - the quiz state machine
//!
//! ```text
//! Selecting --initialize--> Active --select_answer--> Feedback --proceed--> Active ...
//!                                                       |
//!                                                       +--proceed (last)--> Completed <--> Reviewing
//! ```
//!
//! `restart` goes back to Active with the same questions in the same order;
//! `return_to_selection` drops everything and goes back to Selecting.

use super::{Outcome, QuizState, SelectionCriteria};
use crate::error::{QuizError, Result};
use crate::question::QuestionRecord;
use serde::Serialize;
use tracing::warn;

/// A question together with how it was answered in this session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnsweredQuestion {
    pub question: QuestionRecord,
    pub outcome: Outcome,
    /// Option the user picked, once answered
    pub selected: Option<usize>,
}

impl AnsweredQuestion {
    pub fn new(question: QuestionRecord) -> Self {
        Self {
            question,
            outcome: Outcome::Unanswered,
            selected: None,
        }
    }

    fn reset(&mut self) {
        self.outcome = Outcome::Unanswered;
        self.selected = None;
    }

    /// Text of the picked option, if any
    pub fn selected_option(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.question.options().get(i))
            .map(String::as_str)
    }
}

/// What the presentation layer shows after an answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerFeedback {
    pub selected: usize,
    pub correct_option_index: usize,
    pub correct_option: String,
    pub is_correct: bool,
    pub reference: String,
    pub source_text: String,
}

/// One run of the quiz
#[derive(Debug, Clone, Default)]
pub struct QuizSession {
    items: Vec<AnsweredQuestion>,
    current_index: usize,
    score: usize,
    criteria: Option<SelectionCriteria>,
    state: QuizState,
}

impl QuizSession {
    /// Empty session in the Selecting state
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session over `questions`, in the given order
    ///
    /// Only valid while Selecting. An empty sequence is rejected with
    /// `NoQuestionsAvailable` and leaves the session Selecting.
    pub fn initialize(
        &mut self,
        questions: Vec<QuestionRecord>,
        criteria: SelectionCriteria,
    ) -> Result<()> {
        self.expect_state("initialize", |s| matches!(s, QuizState::Selecting))?;
        if questions.is_empty() {
            warn!("Refusing to start a quiz without questions");
            return Err(QuizError::NoQuestionsAvailable);
        }

        self.items = questions.into_iter().map(AnsweredQuestion::new).collect();
        self.current_index = 0;
        self.score = 0;
        self.criteria = Some(criteria);
        self.state = QuizState::Active;
        Ok(())
    }

    /// Answer the current question with option `index`
    ///
    /// Only valid while Active; a second answer during Feedback is rejected,
    /// so a question can never be scored twice.
    pub fn select_answer(&mut self, index: usize) -> Result<AnswerFeedback> {
        self.expect_state("select an answer", |s| matches!(s, QuizState::Active))?;

        let item = &mut self.items[self.current_index];
        if item.outcome.is_answered() {
            return Err(self.rejected("select an answer"));
        }
        let option_count = item.question.options().len();
        if index >= option_count {
            return Err(QuizError::AnswerOutOfRange {
                index,
                options: option_count,
            });
        }

        let is_correct = index == item.question.correct_option_index();
        item.outcome = if is_correct {
            Outcome::Correct
        } else {
            Outcome::Incorrect
        };
        item.selected = Some(index);

        let feedback = AnswerFeedback {
            selected: index,
            correct_option_index: item.question.correct_option_index(),
            correct_option: item.question.correct_option().to_string(),
            is_correct,
            reference: item.question.reference().to_string(),
            source_text: item.question.source_text().to_string(),
        };

        if is_correct {
            self.score += 1;
        }
        self.state = QuizState::Feedback {
            selected: index,
            is_correct,
        };
        Ok(feedback)
    }

    /// Leave Feedback: next question, or Completed after the last one
    pub fn proceed(&mut self) -> Result<QuizState> {
        self.expect_state("proceed", |s| matches!(s, QuizState::Feedback { .. }))?;

        self.state = if self.current_index + 1 >= self.items.len() {
            QuizState::Completed
        } else {
            self.current_index += 1;
            QuizState::Active
        };
        Ok(self.state)
    }

    /// Replay the same questions in the same order from the start
    pub fn restart(&mut self) -> Result<()> {
        self.expect_state("restart", |s| !matches!(s, QuizState::Selecting))?;

        self.items.iter_mut().for_each(AnsweredQuestion::reset);
        self.current_index = 0;
        self.score = 0;
        self.state = QuizState::Active;
        Ok(())
    }

    /// Drop the questions and criteria and go back to Selecting
    pub fn return_to_selection(&mut self) {
        *self = Self::default();
    }

    /// Completed -> Reviewing
    pub fn review_questions(&mut self) -> Result<()> {
        self.expect_state("review questions", |s| matches!(s, QuizState::Completed))?;
        self.state = QuizState::Reviewing;
        Ok(())
    }

    /// Reviewing -> Completed
    pub fn return_to_results(&mut self) -> Result<()> {
        self.expect_state("return to results", |s| matches!(s, QuizState::Reviewing))?;
        self.state = QuizState::Completed;
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Read access
    // ------------------------------------------------------------------------

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn items(&self) -> &[AnsweredQuestion] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn criteria(&self) -> Option<&SelectionCriteria> {
        self.criteria.as_ref()
    }

    /// Question being asked or shown with feedback
    pub fn current_question(&self) -> Option<&QuestionRecord> {
        match self.state {
            QuizState::Active | QuizState::Feedback { .. } => {
                self.items.get(self.current_index).map(|item| &item.question)
            }
            _ => None,
        }
    }

    /// Completed or reviewing
    pub fn is_complete(&self) -> bool {
        matches!(self.state, QuizState::Completed | QuizState::Reviewing)
    }

    /// `current_index / len`, 0.0 without questions and 1.0 once complete
    pub fn progress_fraction(&self) -> f64 {
        if self.items.is_empty() {
            return 0.0;
        }
        if self.is_complete() {
            return 1.0;
        }
        self.current_index as f64 / self.items.len() as f64
    }

    /// Rounded score percentage, available once complete
    pub fn score_percentage(&self) -> Option<u32> {
        if !self.is_complete() || self.items.is_empty() {
            return None;
        }
        Some(percentage(self.score, self.items.len()))
    }

    /// Correct answers counted from the items themselves
    pub fn count_correct(&self) -> usize {
        self.items
            .iter()
            .filter(|item| item.outcome == Outcome::Correct)
            .count()
    }

    // ------------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------------

    fn expect_state(&self, action: &'static str, allowed: impl Fn(&QuizState) -> bool) -> Result<()> {
        if allowed(&self.state) {
            Ok(())
        } else {
            Err(self.rejected(action))
        }
    }

    fn rejected(&self, action: &'static str) -> QuizError {
        warn!("Rejected attempt to {} while {}", action, self.state);
        QuizError::InvalidTransition {
            action,
            state: self.state.name(),
        }
    }
}

/// `round(score / total * 100)`, halves rounded up; 0 for an empty session
///
/// Integer arithmetic, so exact halves such as 23/40 = 57.5 land on 58.
pub fn percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((score * 200 + total) / (2 * total)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::{Book, Difficulty};

    fn questions(n: usize) -> Vec<QuestionRecord> {
        (0..n)
            .map(|i| {
                QuestionRecord::new(
                    format!("q{}", i),
                    format!("Question {}", i),
                    ["A", "B", "C", "D"].map(String::from),
                    i % 4,
                    Book::Exodus,
                    Difficulty::Easy,
                )
                .unwrap()
                .with_reference(format!("Exodus {}:1", i + 1), "")
            })
            .collect()
    }

    fn started(n: usize) -> QuizSession {
        let mut session = QuizSession::new();
        session
            .initialize(questions(n), SelectionCriteria::default())
            .unwrap();
        session
    }

    #[test]
    fn test_new_session_is_selecting() {
        let session = QuizSession::new();
        assert_eq!(session.state(), QuizState::Selecting);
        assert!(session.current_question().is_none());
        assert_eq!(session.progress_fraction(), 0.0);
        assert_eq!(session.score_percentage(), None);
    }

    #[test]
    fn test_initialize_empty_is_rejected() {
        let mut session = QuizSession::new();
        assert_eq!(
            session.initialize(Vec::new(), SelectionCriteria::default()),
            Err(QuizError::NoQuestionsAvailable)
        );
        assert_eq!(session.state(), QuizState::Selecting);
        assert!(session.criteria().is_none());
    }

    #[test]
    fn test_initialize_twice_is_rejected() {
        let mut session = started(2);
        assert!(matches!(
            session.initialize(questions(3), SelectionCriteria::default()),
            Err(QuizError::InvalidTransition { .. })
        ));
        assert_eq!(session.len(), 2);
    }

    #[test]
    fn test_single_question_flow() {
        let mut session = started(1);
        assert_eq!(session.state(), QuizState::Active);

        let feedback = session.select_answer(0).unwrap();
        assert!(feedback.is_correct);
        assert_eq!(feedback.correct_option, "A");
        assert_eq!(feedback.reference, "Exodus 1:1");
        assert_eq!(session.score(), 1);
        assert_eq!(
            session.state(),
            QuizState::Feedback {
                selected: 0,
                is_correct: true
            }
        );

        assert_eq!(session.proceed().unwrap(), QuizState::Completed);
        assert!(session.is_complete());
        assert_eq!(session.score_percentage(), Some(100));
        assert_eq!(session.progress_fraction(), 1.0);
    }

    #[test]
    fn test_double_answer_is_rejected() {
        let mut session = started(3);
        session.select_answer(0).unwrap();
        assert!(matches!(
            session.select_answer(0),
            Err(QuizError::InvalidTransition { state: "feedback", .. })
        ));
        assert_eq!(session.score(), 1);
        assert_eq!(session.items()[0].selected, Some(0));
    }

    #[test]
    fn test_answer_out_of_range() {
        let mut session = started(1);
        assert_eq!(
            session.select_answer(4),
            Err(QuizError::AnswerOutOfRange { index: 4, options: 4 })
        );
        assert_eq!(session.state(), QuizState::Active);
        assert_eq!(session.items()[0].outcome, Outcome::Unanswered);
    }

    #[test]
    fn test_proceed_outside_feedback_is_rejected() {
        let mut session = started(2);
        assert!(session.proceed().is_err());
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn test_progress_and_scoring() {
        let mut session = started(4);
        session.select_answer(0).unwrap();
        session.proceed().unwrap();
        assert_eq!(session.progress_fraction(), 0.25);
        // q1 expects 1
        session.select_answer(0).unwrap();
        session.proceed().unwrap();
        session.select_answer(2).unwrap();
        session.proceed().unwrap();
        assert_eq!(session.progress_fraction(), 0.75);
        session.select_answer(3).unwrap();
        session.proceed().unwrap();

        assert_eq!(session.score(), 3);
        assert_eq!(session.count_correct(), 3);
        assert_eq!(session.score_percentage(), Some(75));
        assert_eq!(session.items()[1].outcome, Outcome::Incorrect);
        assert_eq!(session.items()[1].selected_option(), Some("A"));
    }

    #[test]
    fn test_restart_keeps_questions() {
        let mut session = started(3);
        let before: Vec<QuestionRecord> =
            session.items().iter().map(|i| i.question.clone()).collect();

        session.select_answer(0).unwrap();
        session.proceed().unwrap();
        session.select_answer(1).unwrap();
        session.restart().unwrap();

        assert_eq!(session.state(), QuizState::Active);
        assert_eq!(session.score(), 0);
        assert_eq!(session.current_index(), 0);
        assert!(session.items().iter().all(|i| i.outcome == Outcome::Unanswered));
        assert!(session.items().iter().all(|i| i.selected.is_none()));
        let after: Vec<QuestionRecord> =
            session.items().iter().map(|i| i.question.clone()).collect();
        assert_eq!(before, after);
        assert!(session.criteria().is_some());
    }

    #[test]
    fn test_restart_while_selecting_is_rejected() {
        let mut session = QuizSession::new();
        assert!(session.restart().is_err());
    }

    #[test]
    fn test_review_toggle() {
        let mut session = started(1);
        assert!(session.review_questions().is_err());
        session.select_answer(1).unwrap();
        session.proceed().unwrap();

        session.review_questions().unwrap();
        assert_eq!(session.state(), QuizState::Reviewing);
        assert!(session.is_complete());
        assert_eq!(session.score_percentage(), Some(0));
        assert!(session.review_questions().is_err());

        session.return_to_results().unwrap();
        assert_eq!(session.state(), QuizState::Completed);
        assert!(session.return_to_results().is_err());
        assert_eq!(session.items()[0].outcome, Outcome::Incorrect);
    }

    #[test]
    fn test_return_to_selection_from_any_state() {
        let mut session = started(2);
        session.select_answer(0).unwrap();
        session.return_to_selection();
        assert_eq!(session.state(), QuizState::Selecting);
        assert!(session.is_empty());
        assert!(session.criteria().is_none());
        assert_eq!(session.score(), 0);

        session.return_to_selection();
        assert_eq!(session.state(), QuizState::Selecting);
    }

    #[test]
    fn test_percentage_rounding() {
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(0, 5), 0);
        assert_eq!(percentage(0, 0), 0);
    }

    #[test]
    fn test_percentage_exact_halves_round_up() {
        assert_eq!(percentage(23, 40), 58);
        assert_eq!(percentage(29, 200), 15);
        assert_eq!(percentage(113, 200), 57);
        assert_eq!(percentage(1, 200), 1);

        // Every exact half up to 400 questions rounds up
        for total in 1..=400usize {
            for score in 0..=total {
                if (score * 200) % total == 0 && (score * 200 / total) % 2 == 1 {
                    let expected = (score * 200 / total + 1) / 2;
                    assert_eq!(percentage(score, total) as usize, expected, "{}/{}", score, total);
                }
            }
        }
    }
}
