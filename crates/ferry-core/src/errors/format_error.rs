//! Errors raised by temporal formatters.

use super::error_code::{self, FerryErrorCode};
use crate::models::DateSubtype;

/// Errors that can occur while building or running a temporal formatter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("invalid {subtype} pattern: {pattern:?}")]
    InvalidPattern { subtype: DateSubtype, pattern: String },

    #[error("invalid UTC offset: {seconds} seconds")]
    InvalidOffset { seconds: i32 },

    #[error("failed to render {subtype} value with pattern {pattern:?}")]
    RenderFailed { subtype: DateSubtype, pattern: String },
}

impl FerryErrorCode for FormatError {
    fn error_code(&self) -> &'static str {
        error_code::FORMAT_ERROR
    }
}
