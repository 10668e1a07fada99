use super::error_code::{self, FerryErrorCode};
use super::FormatError;
use crate::models::ColumnKind;

/// Errors raised by column values and their accessors.
#[derive(Debug, thiserror::Error)]
pub enum ColumnError {
    #[error("cannot convert {from} to {to}: {detail}")]
    ConversionNotSupported {
        from: ColumnKind,
        to: ColumnKind,
        detail: String,
    },

    #[error("invalid temporal state: {0}")]
    InvalidTemporalState(String),

    #[error("epoch millisecond {millis} is outside the representable instant range")]
    InstantOutOfRange { millis: i64 },

    #[error("format error: {0}")]
    Format(#[from] FormatError),
}

impl ColumnError {
    /// Build a `ConversionNotSupported` error.
    pub fn conversion(from: ColumnKind, to: ColumnKind, detail: impl Into<String>) -> Self {
        Self::ConversionNotSupported {
            from,
            to,
            detail: detail.into(),
        }
    }

    /// Column errors signal a schema or programming mismatch; retrying the
    /// same request always fails the same way.
    pub fn is_retryable(&self) -> bool {
        false
    }
}

impl FerryErrorCode for ColumnError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ConversionNotSupported { .. } => error_code::CONVERT_NOT_SUPPORTED,
            Self::InvalidTemporalState(_) => error_code::INVALID_TEMPORAL_STATE,
            Self::InstantOutOfRange { .. } => error_code::INSTANT_OUT_OF_RANGE,
            Self::Format(e) => e.error_code(),
        }
    }
}

/// Convenience type alias.
pub type ColumnResult<T> = Result<T, ColumnError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DateSubtype;

    #[test]
    fn conversion_message_names_both_kinds() {
        let err = ColumnError::conversion(
            ColumnKind::Temporal,
            ColumnKind::Boolean,
            "no boolean reading of an instant",
        );
        assert_eq!(
            err.to_string(),
            "cannot convert temporal to boolean: no boolean reading of an instant"
        );
        assert_eq!(err.error_code(), error_code::CONVERT_NOT_SUPPORTED);
        assert!(!err.is_retryable());
    }

    #[test]
    fn format_errors_keep_their_code() {
        let err: ColumnError = FormatError::InvalidOffset { seconds: 90_000 }.into();
        assert_eq!(err.error_code(), error_code::FORMAT_ERROR);

        let err: ColumnError = FormatError::InvalidPattern {
            subtype: DateSubtype::Date,
            pattern: "%Q".to_string(),
        }
        .into();
        assert!(err.to_string().contains("invalid date pattern"));
    }
}
