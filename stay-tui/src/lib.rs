//! stay-tui library
//!
//! Exports the reducer, state and rendering for testing without a terminal.

pub mod app;
pub mod error;
pub mod terminal;
pub mod ui;

// Re-export commonly used types
pub use app::{reduce, Action, AppState, Screen};
pub use error::{Result, TuiError};
