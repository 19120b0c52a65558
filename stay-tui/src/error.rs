//! Error types for stay-tui
//!
//! Wraps booking core errors and terminal/IO errors for unified handling.

use thiserror::Error;

/// TUI-specific errors
#[derive(Error, Debug)]
pub enum TuiError {
    /// Booking core error (config, catalog lookup)
    #[error("Booking error: {0}")]
    Booking(#[from] libstaybook::StaybookError),

    /// Terminal/IO error
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Result type for TUI operations
pub type Result<T> = std::result::Result<T, TuiError>;
