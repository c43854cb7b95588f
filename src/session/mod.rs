//! Quiz session state machine and selection step

mod quiz;
mod selection;
mod state;


pub use quiz::*;
pub use selection::*;
pub use state::*;
