//! Per-session option order randomization

use crate::question::{Options, QuestionRecord};
use rand::seq::SliceRandom;
use rand::Rng;

/// Copy of `question` with its options uniformly permuted
///
/// The correct index is relocated by value: after shuffling it points at the
/// first option equal to the originally correct text.
pub fn randomize_options<R: Rng + ?Sized>(question: &QuestionRecord, rng: &mut R) -> QuestionRecord {
    let correct = question.correct_option();
    let mut options: Options = question.options().iter().cloned().collect();
    options.shuffle(rng);

    let relocated = options
        .iter()
        .position(|option| option == correct)
        .unwrap_or(question.correct_option_index());

    question.with_options(options, relocated)
}

/// Randomize option order for every question in a session
pub fn randomize_all<R: Rng + ?Sized>(questions: &[QuestionRecord], rng: &mut R) -> Vec<QuestionRecord> {
    questions.iter().map(|q| randomize_options(q, rng)).collect()
}
