//! Python bindings for the presentation layer
//!
//! Exposes `QuizEngine` as a Python class. Question, feedback and summary data
//! come back as plain dicts so the UI side never holds Rust references.

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::config::QuizConfig;
use crate::engine::QuizEngine;
use crate::question::{Book, Difficulty, JsonDirSource, QuestionRecord, QuestionRepository};
use crate::results::QuizSummary;
use crate::session::AnswerFeedback;

// ============================================================================
// Helper Functions
// ============================================================================

fn parse_book(book: Option<String>) -> PyResult<Option<Book>> {
    Ok(book.map(|b| b.parse::<Book>()).transpose()?)
}

fn parse_difficulty(difficulty: Option<String>) -> PyResult<Option<Difficulty>> {
    Ok(difficulty.map(|d| d.parse::<Difficulty>()).transpose()?)
}

fn question_to_dict<'py>(py: Python<'py>, question: &QuestionRecord) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("id", question.id())?;
    dict.set_item("text", question.text())?;
    dict.set_item("options", question.options().to_vec())?;
    dict.set_item("book", question.book().name())?;
    dict.set_item("difficulty", question.difficulty().as_str())?;
    dict.set_item("reference", question.reference())?;
    Ok(dict)
}

fn feedback_to_dict<'py>(py: Python<'py>, feedback: &AnswerFeedback) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("selected", feedback.selected)?;
    dict.set_item("correct_option_index", feedback.correct_option_index)?;
    dict.set_item("correct_option", &feedback.correct_option)?;
    dict.set_item("is_correct", feedback.is_correct)?;
    dict.set_item("reference", &feedback.reference)?;
    dict.set_item("source_text", &feedback.source_text)?;
    Ok(dict)
}

fn summary_to_dict<'py>(
    py: Python<'py>,
    summary: &QuizSummary,
    band: &str,
) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("score", summary.score)?;
    dict.set_item("total", summary.total)?;
    dict.set_item("percentage", summary.percentage)?;
    dict.set_item("band", band)?;

    if let Some(criteria) = &summary.criteria {
        dict.set_item("book", criteria.book.map(Book::name))?;
        dict.set_item("difficulty", criteria.difficulty.map(Difficulty::as_str))?;
        dict.set_item("count", criteria.count.to_string())?;
    }

    let rows = PyList::empty(py);
    for row in &summary.breakdown {
        let row_dict = PyDict::new(py);
        row_dict.set_item("question_text", &row.question_text)?;
        row_dict.set_item("outcome", row.outcome.as_str())?;
        row_dict.set_item("correct_option", &row.correct_option)?;
        row_dict.set_item("selected_option", row.selected_option.as_deref())?;
        row_dict.set_item("reference", &row.reference)?;
        row_dict.set_item("source_text", &row.source_text)?;
        rows.append(row_dict)?;
    }
    dict.set_item("breakdown", rows)?;
    Ok(dict)
}

// ============================================================================
// QuizEngine PyClass
// ============================================================================

/// Quiz engine handle held by the Python UI
#[pyclass(name = "QuizEngine")]
pub struct PyQuizEngine {
    inner: QuizEngine,
}

#[pymethods]
impl PyQuizEngine {
    /// Create an engine
    ///
    /// # Arguments
    /// * `data_dir` - Directory of `<book>.json` files (default: bundled questions)
    /// * `config_json` - JSON config document (default: built-in policy)
    /// * `seed` - Fixed RNG seed for reproducible sessions
    #[new]
    #[pyo3(signature = (data_dir=None, config_json=None, seed=None))]
    fn new(data_dir: Option<String>, config_json: Option<String>, seed: Option<u64>) -> PyResult<Self> {
        let repository = match data_dir {
            Some(dir) => QuestionRepository::new(JsonDirSource::new(dir)),
            None => QuestionRepository::embedded(),
        };
        let config = match config_json {
            Some(json) => QuizConfig::from_json(&json)?,
            None => QuizConfig::default(),
        };
        let inner = match seed {
            Some(seed) => QuizEngine::with_seed(repository, config, seed),
            None => QuizEngine::new(repository, config),
        };
        Ok(Self { inner })
    }

    // ------------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------------

    fn available_books(&self) -> Vec<&'static str> {
        self.inner.available_books().iter().map(|b| b.name()).collect()
    }

    fn available_difficulties(&self) -> Vec<&'static str> {
        self.inner
            .available_difficulties()
            .iter()
            .map(|d| d.as_str())
            .collect()
    }

    #[pyo3(signature = (book=None, difficulty=None))]
    fn available_counts(&self, book: Option<String>, difficulty: Option<String>) -> PyResult<Vec<usize>> {
        Ok(self
            .inner
            .available_counts(parse_book(book)?, parse_difficulty(difficulty)?))
    }

    #[getter]
    fn question_count(&self) -> usize {
        self.inner.question_count()
    }

    #[pyo3(signature = (book=None))]
    fn select_book(&mut self, book: Option<String>) -> PyResult<()> {
        self.inner.select_book(parse_book(book)?);
        Ok(())
    }

    #[pyo3(signature = (difficulty=None))]
    fn select_difficulty(&mut self, difficulty: Option<String>) -> PyResult<()> {
        self.inner.select_difficulty(parse_difficulty(difficulty)?);
        Ok(())
    }

    #[pyo3(signature = (count=None))]
    fn select_count(&mut self, count: Option<usize>) {
        self.inner.select_count(count);
    }

    fn start_quiz(&mut self) -> PyResult<()> {
        Ok(self.inner.start_quiz()?)
    }

    // ------------------------------------------------------------------------
    // Session intents
    // ------------------------------------------------------------------------

    /// Answer the current question; returns the feedback dict
    fn select_answer(&mut self, py: Python<'_>, index: usize) -> PyResult<Py<PyAny>> {
        let feedback = self.inner.select_answer(index)?;
        Ok(feedback_to_dict(py, &feedback)?.into_any().unbind())
    }

    /// Advance past feedback; returns the new state name
    fn proceed(&mut self) -> PyResult<&'static str> {
        Ok(self.inner.proceed()?.name())
    }

    fn restart(&mut self) -> PyResult<()> {
        Ok(self.inner.restart()?)
    }

    fn return_to_selection(&mut self) {
        self.inner.return_to_selection();
    }

    fn review_questions(&mut self) -> PyResult<()> {
        Ok(self.inner.review_questions()?)
    }

    fn return_to_results(&mut self) -> PyResult<()> {
        Ok(self.inner.return_to_results()?)
    }

    // ------------------------------------------------------------------------
    // Session view
    // ------------------------------------------------------------------------

    #[getter]
    fn state(&self) -> &'static str {
        self.inner.state().name()
    }

    #[getter]
    fn current_index(&self) -> usize {
        self.inner.session().current_index()
    }

    #[getter]
    fn total_questions(&self) -> usize {
        self.inner.session().len()
    }

    #[getter]
    fn progress_fraction(&self) -> f64 {
        self.inner.progress_fraction()
    }

    #[getter]
    fn is_complete(&self) -> bool {
        self.inner.is_complete()
    }

    #[getter]
    fn score(&self) -> usize {
        self.inner.score()
    }

    /// Current question dict, or None outside a running quiz
    fn current_question(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        match self.inner.current_question() {
            Some(question) => Ok(question_to_dict(py, question)?.into_any().unbind()),
            None => Ok(py.None()),
        }
    }

    /// Summary dict of the completed quiz
    fn summary(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        let summary = self.inner.summary()?;
        let band = summary.band(&self.inner.config().bands);
        Ok(summary_to_dict(py, &summary, band.as_str())?.into_any().unbind())
    }
}

// ============================================================================
// Python Module Definition
// ============================================================================

#[pymodule]
fn bible_quiz_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyQuizEngine>()?;
    Ok(())
}
