//! Bounded random sub-selection of a question pool

use crate::question::QuestionRecord;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;

/// Requested number of questions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionCount {
    /// Every matching question, in pool order
    #[default]
    All,
    /// At most this many, sampled without replacement
    Limit(NonZeroUsize),
}

impl QuestionCount {
    /// `Limit(n)`, or `All` for zero
    pub fn limit(n: usize) -> Self {
        NonZeroUsize::new(n).map_or(QuestionCount::All, QuestionCount::Limit)
    }

    /// Number of questions this request yields from a pool of `available`
    pub fn resolve(self, available: usize) -> usize {
        match self {
            QuestionCount::All => available,
            QuestionCount::Limit(n) => n.get().min(available),
        }
    }
}

impl fmt::Display for QuestionCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionCount::All => f.write_str("all"),
            QuestionCount::Limit(n) => write!(f, "{}", n),
        }
    }
}

/// Pick `count` questions from `pool`
///
/// `All`, or a limit at or above the pool size, returns the pool unchanged.
/// A smaller limit shuffles the whole pool (Fisher-Yates) and keeps the first
/// `n`, so every subset of size `n` is equally likely.
pub fn select_count<R: Rng + ?Sized>(
    mut pool: Vec<QuestionRecord>,
    count: QuestionCount,
    rng: &mut R,
) -> Vec<QuestionRecord> {
    let n = count.resolve(pool.len());
    if n < pool.len() {
        pool.shuffle(rng);
        pool.truncate(n);
    }
    pool
}
