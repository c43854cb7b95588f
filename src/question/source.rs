//! Question sources - where book partitions come from

use super::{Book, RawQuestion};
use crate::error::{QuizError, Result};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Bundled Exodus question bank
const EMBEDDED_EXODUS: &str = include_str!("../../data/exodus.json");

/// Provider of raw question partitions, one per book
pub trait QuestionSource: Send + Sync {
    /// Books this source has a partition for
    fn books(&self) -> Vec<Book>;

    /// Raw records of one partition
    ///
    /// Returns `QuizError::NoDataForBook` when the partition does not exist.
    fn fetch(&self, book: Book) -> Result<Vec<RawQuestion>>;
}

/// Parse a partition from its JSON text
pub fn parse_partition(json: &str) -> Result<Vec<RawQuestion>> {
    Ok(serde_json::from_str(json)?)
}

/// In-process source, mostly for hosts that already hold the data
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    partitions: BTreeMap<Book, Vec<RawQuestion>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the partition for `book`
    pub fn with_partition(mut self, book: Book, records: Vec<RawQuestion>) -> Self {
        self.partitions.insert(book, records);
        self
    }

    /// Group records into partitions by their book tag
    ///
    /// Records whose tag is not a known book are dropped here, the same way
    /// the repository drops any other malformed record.
    pub fn from_records(records: impl IntoIterator<Item = RawQuestion>) -> Self {
        let mut partitions: BTreeMap<Book, Vec<RawQuestion>> = BTreeMap::new();
        for raw in records {
            match raw.book.parse::<Book>() {
                Ok(book) => partitions.entry(book).or_default().push(raw),
                Err(e) => tracing::debug!("Dropping record {:?}: {}", raw.text, e),
            }
        }
        Self { partitions }
    }
}

impl QuestionSource for MemorySource {
    fn books(&self) -> Vec<Book> {
        self.partitions.keys().copied().collect()
    }

    fn fetch(&self, book: Book) -> Result<Vec<RawQuestion>> {
        self.partitions
            .get(&book)
            .cloned()
            .ok_or(QuizError::NoDataForBook(book))
    }
}

/// Directory of `<file_stem>.json` files, one per book
#[derive(Debug, Clone)]
pub struct JsonDirSource {
    root: PathBuf,
}

impl JsonDirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, book: Book) -> PathBuf {
        self.root.join(format!("{}.json", book.file_stem()))
    }
}

impl QuestionSource for JsonDirSource {
    fn books(&self) -> Vec<Book> {
        Book::ALL
            .iter()
            .copied()
            .filter(|book| self.path_for(*book).is_file())
            .collect()
    }

    fn fetch(&self, book: Book) -> Result<Vec<RawQuestion>> {
        let path = self.path_for(book);
        if !path.is_file() {
            return Err(QuizError::NoDataForBook(book));
        }
        let json = std::fs::read_to_string(&path)?;
        parse_partition(&json)
    }
}

/// Question bank compiled into the library
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl QuestionSource for EmbeddedSource {
    fn books(&self) -> Vec<Book> {
        vec![Book::Exodus]
    }

    fn fetch(&self, book: Book) -> Result<Vec<RawQuestion>> {
        match book {
            Book::Exodus => parse_partition(EMBEDDED_EXODUS),
            other => Err(QuizError::NoDataForBook(other)),
        }
    }
}
