//! Subtype discriminant for temporal values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which source shape produced a temporal value.
///
/// The subtype never changes the stored instant; it selects how the
/// instant is rendered and what the consumer should expect from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateSubtype {
    /// Calendar date only, normalized to UTC midnight.
    Date,
    /// Time of day only, anchored on 1970-01-01 UTC.
    Time,
    /// Full date and time.
    #[default]
    DateTime,
}

impl fmt::Display for DateSubtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Date => "date",
            Self::Time => "time",
            Self::DateTime => "datetime",
        })
    }
}
