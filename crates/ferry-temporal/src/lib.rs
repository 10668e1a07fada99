//! # ferry-temporal
//!
//! Temporal column values for the ferry value model: a nullable instant with
//! nanosecond fidelity, tagged as date, time, or date-time, with a strict
//! conversion contract toward every other value kind.
//!
//! ```rust
//! use chrono::DateTime;
//! use ferry_core::DateSubtype;
//! use ferry_temporal::{PatternFormatter, TemporalValue};
//!
//! let instant = DateTime::from_timestamp(1_700_000_000, 123_456_789).unwrap();
//! let value = TemporalValue::from_timestamp(Some(instant));
//!
//! assert_eq!(value.subtype(), DateSubtype::DateTime);
//! assert_eq!(value.as_integer(), Some(1_700_000_000_123));
//! assert_eq!(value.as_temporal()?, Some(instant));
//! assert!(value.as_boolean().is_err());
//!
//! let text = value.as_text(&PatternFormatter::default())?;
//! assert_eq!(text.as_deref(), Some("2023-11-14 22:13:20"));
//! # Ok::<(), ferry_core::ColumnError>(())
//! ```

pub mod format;
pub mod observer;
pub mod value;

pub use format::PatternFormatter;
pub use observer::{NoopObserver, TracingObserver};
pub use value::TemporalValue;
