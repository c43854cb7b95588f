//! Score summary for a completed session

use crate::config::BandThresholds;
use crate::error::{QuizError, Result};
use crate::session::{percentage, Outcome, QuizSession, SelectionCriteria};
use serde::Serialize;
use std::fmt;

/// Presentation hint derived from the percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Pass,
    Warn,
    Fail,
}

impl ScoreBand {
    pub fn from_percentage(percentage: u32, thresholds: &BandThresholds) -> Self {
        if percentage >= thresholds.pass {
            ScoreBand::Pass
        } else if percentage >= thresholds.warn {
            ScoreBand::Warn
        } else {
            ScoreBand::Fail
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScoreBand::Pass => "pass",
            ScoreBand::Warn => "warn",
            ScoreBand::Fail => "fail",
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the per-question breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionSummary {
    pub question_text: String,
    pub outcome: Outcome,
    pub correct_option: String,
    pub selected_option: Option<String>,
    pub reference: String,
    pub source_text: String,
}

/// Score summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizSummary {
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
    pub criteria: Option<SelectionCriteria>,
    pub breakdown: Vec<QuestionSummary>,
}

impl QuizSummary {
    pub fn band(&self, thresholds: &BandThresholds) -> ScoreBand {
        ScoreBand::from_percentage(self.percentage, thresholds)
    }
}

/// Summarize a completed (or reviewing) session without touching it
pub fn summarize(session: &QuizSession) -> Result<QuizSummary> {
    if !session.is_complete() || session.is_empty() {
        return Err(QuizError::InvalidTransition {
            action: "summarize",
            state: session.state().name(),
        });
    }

    let breakdown = session
        .items()
        .iter()
        .map(|item| QuestionSummary {
            question_text: item.question.text().to_string(),
            outcome: item.outcome,
            correct_option: item.question.correct_option().to_string(),
            selected_option: item.selected_option().map(str::to_string),
            reference: item.question.reference().to_string(),
            source_text: item.question.source_text().to_string(),
        })
        .collect();

    Ok(QuizSummary {
        score: session.score(),
        total: session.len(),
        percentage: percentage(session.score(), session.len()),
        criteria: session.criteria().copied(),
        breakdown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::{Book, Difficulty, QuestionRecord};
    use crate::sampler::QuestionCount;

    fn session_with(correct_answers: &[bool]) -> QuizSession {
        let questions = correct_answers
            .iter()
            .enumerate()
            .map(|(i, _)| {
                QuestionRecord::new(
                    format!("q{}", i),
                    format!("Question {}", i),
                    ["Nile", "Jordan"].map(String::from),
                    0,
                    Book::Exodus,
                    Difficulty::Easy,
                )
                .unwrap()
                .with_reference("Exodus 2:3", "among the reeds")
            })
            .collect();

        let criteria = SelectionCriteria {
            book: Some(Book::Exodus),
            difficulty: Some(Difficulty::Easy),
            count: QuestionCount::limit(correct_answers.len()),
        };
        let mut session = QuizSession::new();
        session.initialize(questions, criteria).unwrap();
        for &correct in correct_answers {
            session.select_answer(if correct { 0 } else { 1 }).unwrap();
            session.proceed().unwrap();
        }
        session
    }

    #[test]
    fn test_single_correct_answer() {
        let summary = summarize(&session_with(&[true])).unwrap();
        assert_eq!(summary.score, 1);
        assert_eq!(summary.total, 1);
        assert_eq!(summary.percentage, 100);
        assert_eq!(summary.band(&BandThresholds::default()), ScoreBand::Pass);
    }

    #[test]
    fn test_breakdown_rows() {
        let summary = summarize(&session_with(&[true, false, true])).unwrap();
        assert_eq!(summary.percentage, 67);
        assert_eq!(summary.breakdown.len(), 3);

        let wrong = &summary.breakdown[1];
        assert_eq!(wrong.question_text, "Question 1");
        assert_eq!(wrong.outcome, Outcome::Incorrect);
        assert_eq!(wrong.correct_option, "Nile");
        assert_eq!(wrong.selected_option.as_deref(), Some("Jordan"));
        assert_eq!(wrong.reference, "Exodus 2:3");

        let criteria = summary.criteria.unwrap();
        assert_eq!(criteria.book, Some(Book::Exodus));
    }

    #[test]
    fn test_summarize_does_not_mutate() {
        let session = session_with(&[false, true]);
        let before_items = session.items().to_vec();
        let _ = summarize(&session).unwrap();
        assert_eq!(session.items(), before_items.as_slice());
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn test_summarize_requires_completion() {
        let mut session = QuizSession::new();
        assert!(summarize(&session).is_err());

        session
            .initialize(
                vec![QuestionRecord::new(
                    "q",
                    "?",
                    ["a", "b"].map(String::from),
                    0,
                    Book::Exodus,
                    Difficulty::Easy,
                )
                .unwrap()],
                SelectionCriteria::default(),
            )
            .unwrap();
        assert!(matches!(
            summarize(&session),
            Err(QuizError::InvalidTransition { state: "active", .. })
        ));
    }

    #[test]
    fn test_summary_available_while_reviewing() {
        let mut session = session_with(&[true, true]);
        session.review_questions().unwrap();
        assert_eq!(summarize(&session).unwrap().percentage, 100);
    }

    #[test]
    fn test_bands() {
        let t = BandThresholds::default();
        assert_eq!(ScoreBand::from_percentage(100, &t), ScoreBand::Pass);
        assert_eq!(ScoreBand::from_percentage(80, &t), ScoreBand::Pass);
        assert_eq!(ScoreBand::from_percentage(79, &t), ScoreBand::Warn);
        assert_eq!(ScoreBand::from_percentage(50, &t), ScoreBand::Warn);
        assert_eq!(ScoreBand::from_percentage(49, &t), ScoreBand::Fail);
        assert_eq!(ScoreBand::from_percentage(0, &t), ScoreBand::Fail);

        let strict = BandThresholds { pass: 95, warn: 70 };
        assert_eq!(ScoreBand::from_percentage(90, &strict), ScoreBand::Warn);
    }
}
