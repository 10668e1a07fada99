pub mod error_code;

mod column_error;
mod config_error;
mod format_error;

pub use column_error::{ColumnError, ColumnResult};
pub use config_error::ConfigError;
pub use format_error::FormatError;
