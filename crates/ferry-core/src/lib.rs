//! # ferry-core
//!
//! Foundation crate for the ferry column value model.
//! Defines the value-kind vocabulary, errors, config, collaborator traits,
//! and tracing setup. Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod models;
pub mod observability;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{FerryConfig, TemporalFormatConfig};
pub use errors::error_code::FerryErrorCode;
pub use errors::{ColumnError, ColumnResult, ConfigError, FormatError};
pub use models::{ColumnKind, DateSubtype};
pub use traits::{TemporalFormatter, TemporalObserver};
