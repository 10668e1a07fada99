use chrono::{DateTime, Utc};

use crate::errors::FormatError;
use crate::models::DateSubtype;

/// Renders temporal values as text.
///
/// The formatter owns the null rendering policy: it receives `None` for an
/// absent value and decides what, if anything, that renders to.
pub trait TemporalFormatter: Send + Sync {
    fn format(
        &self,
        instant: Option<DateTime<Utc>>,
        subtype: DateSubtype,
    ) -> Result<Option<String>, FormatError>;
}
