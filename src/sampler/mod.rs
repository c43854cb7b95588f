//! Question sampling: count selection, option shuffling and count policy

mod counts;
mod options;
mod selector;


pub use counts::*;
pub use options::*;
pub use selector::*;
