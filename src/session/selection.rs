//! Selection step: the draft being edited and the criteria a session keeps

use crate::question::{Book, Difficulty};
use crate::sampler::QuestionCount;
use serde::Serialize;

/// The (book, difficulty, count) tuple a session was built from
///
/// `None` for book or difficulty means "any".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SelectionCriteria {
    pub book: Option<Book>,
    pub difficulty: Option<Difficulty>,
    pub count: QuestionCount,
}

/// Choices made on the selection screen so far
///
/// Changing the book clears difficulty and count; changing the difficulty
/// clears the count, since the offered counts depend on both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionDraft {
    book: Option<Book>,
    difficulty: Option<Difficulty>,
    count: Option<usize>,
}

impl SelectionDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn book(&self) -> Option<Book> {
        self.book
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn count(&self) -> Option<usize> {
        self.count
    }

    pub fn select_book(&mut self, book: Option<Book>) {
        if self.book != book {
            self.book = book;
            self.difficulty = None;
            self.count = None;
        }
    }

    pub fn select_difficulty(&mut self, difficulty: Option<Difficulty>) {
        if self.difficulty != difficulty {
            self.difficulty = difficulty;
            self.count = None;
        }
    }

    pub fn select_count(&mut self, count: Option<usize>) {
        self.count = count;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Freeze the draft against a pool of `available` questions
    ///
    /// A count at or above the pool size becomes `QuestionCount::All`.
    pub fn criteria(&self, available: usize) -> SelectionCriteria {
        let count = match self.count {
            Some(n) if n < available => QuestionCount::limit(n),
            _ => QuestionCount::All,
        };
        SelectionCriteria {
            book: self.book,
            difficulty: self.difficulty,
            count,
        }
    }
}
