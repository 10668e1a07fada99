//! Rendering configuration for temporal values.

use serde::{Deserialize, Serialize};

use crate::models::DateSubtype;

/// Patterns and offset used when a temporal value is rendered as text.
///
/// Patterns use chrono's strftime syntax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemporalFormatConfig {
    pub date_format: String,
    pub time_format: String,
    pub datetime_format: String,
    /// Fixed offset east of UTC, applied to date-time values only.
    pub utc_offset_seconds: i32,
}

impl TemporalFormatConfig {
    /// Returns the pattern used for the given subtype.
    pub fn pattern_for(&self, subtype: DateSubtype) -> &str {
        match subtype {
            DateSubtype::Date => &self.date_format,
            DateSubtype::Time => &self.time_format,
            DateSubtype::DateTime => &self.datetime_format,
        }
    }
}

impl Default for TemporalFormatConfig {
    fn default() -> Self {
        Self {
            date_format: "%Y-%m-%d".to_string(),
            time_format: "%H:%M:%S".to_string(),
            datetime_format: "%Y-%m-%d %H:%M:%S".to_string(),
            utc_offset_seconds: 0,
        }
    }
}
