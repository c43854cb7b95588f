//! Question repository with a lazily populated per-book cache

use super::{Book, Difficulty, EmbeddedSource, QuestionRecord, QuestionSource};
use ahash::AHashMap;
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, warn};

/// Parsed partitions keyed by book
///
/// Entries are filled on first request and never invalidated; the backing data
/// is static for the lifetime of the process. Empty partitions are cached too,
/// so a missing book is only reported once. Share one cache between
/// repositories with `Arc<QuestionCache>`.
#[derive(Debug, Default)]
pub struct QuestionCache {
    entries: RwLock<AHashMap<Book, Arc<[QuestionRecord]>>>,
}

impl QuestionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cached partition for `book`, or build and cache it
    pub fn get_or_load(
        &self,
        book: Book,
        load: impl FnOnce() -> Vec<QuestionRecord>,
    ) -> Arc<[QuestionRecord]> {
        // Fast path: check read lock first
        {
            let entries = self.entries.read();
            if let Some(records) = entries.get(&book) {
                return Arc::clone(records);
            }
        }

        // Slow path: load without holding any lock, then insert.
        // If another thread cached the book meanwhile, its entry is kept.
        let records: Arc<[QuestionRecord]> = load().into();
        let mut entries = self.entries.write();
        let cached = entries.entry(book).or_insert_with(|| {
            debug!("Cached {} questions for {}", records.len(), book);
            Arc::clone(&records)
        });
        Arc::clone(cached)
    }

    pub fn contains(&self, book: Book) -> bool {
        self.entries.read().contains_key(&book)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

/// Loads, validates and filters question partitions
pub struct QuestionRepository {
    source: Box<dyn QuestionSource>,
    cache: Arc<QuestionCache>,
    available_books: OnceCell<Vec<Book>>,
}

impl QuestionRepository {
    /// Repository over `source` with its own cache
    pub fn new(source: impl QuestionSource + 'static) -> Self {
        Self::with_cache(source, Arc::new(QuestionCache::new()))
    }

    /// Repository over `source` backed by a shared cache
    pub fn with_cache(source: impl QuestionSource + 'static, cache: Arc<QuestionCache>) -> Self {
        Self {
            source: Box::new(source),
            cache,
            available_books: OnceCell::new(),
        }
    }

    /// Repository over the bundled question bank
    pub fn embedded() -> Self {
        Self::new(EmbeddedSource)
    }

    pub fn cache(&self) -> &Arc<QuestionCache> {
        &self.cache
    }

    /// Valid questions of one book
    ///
    /// A missing or unreadable partition yields an empty slice and a warning,
    /// never an error. Malformed records are skipped individually.
    pub fn load(&self, book: Book) -> Arc<[QuestionRecord]> {
        self.cache.get_or_load(book, || self.parse_partition(book))
    }

    fn parse_partition(&self, book: Book) -> Vec<QuestionRecord> {
        let raw = match self.source.fetch(book) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Could not load questions for {}: {}", book, e);
                return Vec::new();
            }
        };

        let total = raw.len();
        let records: Vec<QuestionRecord> = raw
            .into_iter()
            .enumerate()
            .filter_map(|(position, raw)| {
                QuestionRecord::try_from_raw(raw, book, position)
                    .map_err(|e| debug!("Skipping record in {}: {}", book, e))
                    .ok()
            })
            .collect();

        if records.len() < total {
            debug!(
                "Skipped {} of {} records for {}",
                total - records.len(),
                total,
                book
            );
        }
        records
    }

    /// Books whose partition holds at least one valid question, in canonical order
    pub fn available_books(&self) -> &[Book] {
        self.available_books.get_or_init(|| {
            let mut books = self.source.books();
            books.sort_unstable();
            books.dedup();
            books.retain(|book| !self.load(*book).is_empty());
            books
        })
    }

    /// Questions matching the filters; `None` means "any"
    ///
    /// Without a book, every available book is aggregated in canonical order.
    pub fn get_questions(
        &self,
        book: Option<Book>,
        difficulty: Option<Difficulty>,
    ) -> Vec<QuestionRecord> {
        self.books_for(book)
            .into_iter()
            .flat_map(|book| {
                self.load(book)
                    .iter()
                    .filter(|q| q.matches(None, difficulty))
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    /// Number of questions matching the filters
    pub fn count(&self, book: Option<Book>, difficulty: Option<Difficulty>) -> usize {
        self.books_for(book)
            .into_iter()
            .map(|book| {
                self.load(book)
                    .iter()
                    .filter(|q| q.matches(None, difficulty))
                    .count()
            })
            .sum()
    }

    fn books_for(&self, book: Option<Book>) -> Vec<Book> {
        match book {
            Some(book) => vec![book],
            None => self.available_books().to_vec(),
        }
    }
}

impl std::fmt::Debug for QuestionRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuestionRepository")
            .field("cache", &self.cache)
            .field("available_books", &self.available_books.get())
            .finish_non_exhaustive()
    }
}
