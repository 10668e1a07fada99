//! Stable error codes shared by every error type in the workspace.

pub const CONVERT_NOT_SUPPORTED: &str = "CONVERT_NOT_SUPPORTED";
pub const INVALID_TEMPORAL_STATE: &str = "INVALID_TEMPORAL_STATE";
pub const INSTANT_OUT_OF_RANGE: &str = "INSTANT_OUT_OF_RANGE";
pub const FORMAT_ERROR: &str = "FORMAT_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";

/// Maps an error to a stable, machine-readable code.
pub trait FerryErrorCode {
    fn error_code(&self) -> &'static str;
}
