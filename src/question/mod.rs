//! Question data: identifiers, records, sources and the caching repository

mod book;
mod record;
mod repository;
mod source;

pub use book::*;
pub use record::*;
pub use repository::*;
pub use source::*;
