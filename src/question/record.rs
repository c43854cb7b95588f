//! Question records and their on-disk representation

use super::{Book, Difficulty};
use crate::error::{QuizError, Result};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Answer options; almost every question has four
pub type Options = SmallVec<[String; 4]>;

/// Minimum number of options a question must offer
pub const MIN_OPTIONS: usize = 2;

/// Question record as stored in a book partition (snake_case JSON)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawQuestion {
    #[serde(default)]
    pub id: Option<String>,
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer_index: i64,
    pub book: String,
    pub difficulty: String,
    #[serde(default)]
    pub verse_reference: String,
    #[serde(default)]
    pub verse_text: String,
}

/// Immutable, validated question
///
/// `correct_option_index` always points into `options`; the only ways to build
/// or reshape a record go through constructors that check it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionRecord {
    id: String,
    text: String,
    options: Options,
    correct_option_index: usize,
    book: Book,
    difficulty: Difficulty,
    reference: String,
    source_text: String,
}

impl QuestionRecord {
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        options: impl IntoIterator<Item = String>,
        correct_option_index: usize,
        book: Book,
        difficulty: Difficulty,
    ) -> Result<Self> {
        let text = text.into();
        let options: Options = options.into_iter().collect();
        check_shape(&text, &options, correct_option_index).map_err(QuizError::InvalidQuestion)?;

        Ok(Self {
            id: id.into(),
            text,
            options,
            correct_option_index,
            book,
            difficulty,
            reference: String::new(),
            source_text: String::new(),
        })
    }

    /// Attach the verse reference and quoted text shown as feedback context
    pub fn with_reference(mut self, reference: impl Into<String>, source_text: impl Into<String>) -> Self {
        self.reference = reference.into();
        self.source_text = source_text.into();
        self
    }

    /// Validate a raw record loaded from the `partition` book at `position`
    pub fn try_from_raw(raw: RawQuestion, partition: Book, position: usize) -> Result<Self> {
        let malformed = |reason: String| QuizError::MalformedRecord { position, reason };

        let book: Book = raw.book.parse().map_err(|e: QuizError| malformed(e.to_string()))?;
        if book != partition {
            return Err(malformed(format!(
                "record tagged {} inside the {} partition",
                book, partition
            )));
        }
        let difficulty: Difficulty = raw
            .difficulty
            .parse()
            .map_err(|e: QuizError| malformed(e.to_string()))?;
        let correct = usize::try_from(raw.correct_answer_index)
            .map_err(|_| malformed(format!("negative answer index {}", raw.correct_answer_index)))?;

        let options: Options = raw.options.into_iter().collect();
        check_shape(&raw.text, &options, correct).map_err(malformed)?;

        let id = raw
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| format!("{}-{:03}", partition.file_stem(), position + 1));

        Ok(Self {
            id,
            text: raw.text,
            options,
            correct_option_index: correct,
            book,
            difficulty,
            reference: raw.verse_reference,
            source_text: raw.verse_text,
        })
    }

    /// Same question with a new option order; `correct_option_index` must
    /// already point at the relocated correct option
    pub(crate) fn with_options(&self, options: Options, correct_option_index: usize) -> Self {
        debug_assert!(correct_option_index < options.len());
        debug_assert_eq!(options.len(), self.options.len());
        Self {
            options,
            correct_option_index,
            ..self.clone()
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct_option_index(&self) -> usize {
        self.correct_option_index
    }

    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_option_index]
    }

    pub fn book(&self) -> Book {
        self.book
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    /// Whether `book`/`difficulty` filters (None = any) accept this question
    #[inline]
    pub fn matches(&self, book: Option<Book>, difficulty: Option<Difficulty>) -> bool {
        book.map_or(true, |b| b == self.book) && difficulty.map_or(true, |d| d == self.difficulty)
    }
}

fn check_shape(text: &str, options: &[String], correct: usize) -> std::result::Result<(), String> {
    if text.trim().is_empty() {
        return Err("empty question text".to_string());
    }
    if options.len() < MIN_OPTIONS {
        return Err(format!(
            "{} options, at least {} required",
            options.len(),
            MIN_OPTIONS
        ));
    }
    if correct >= options.len() {
        return Err(format!(
            "answer index {} out of range for {} options",
            correct,
            options.len()
        ));
    }
    Ok(())
}
