//! Pattern-based rendering of temporal values.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, Offset, Utc};
use tracing::debug;

use ferry_core::{DateSubtype, FormatError, TemporalFormatConfig, TemporalFormatter};

/// Renders temporal values with one strftime pattern per subtype.
///
/// Date and Time values are wall-clock values stored at UTC and render in
/// UTC. The configured offset applies to DateTime values only.
#[derive(Debug, Clone)]
pub struct PatternFormatter {
    config: TemporalFormatConfig,
    offset: FixedOffset,
}

impl PatternFormatter {
    /// Build a formatter, rejecting malformed patterns and offsets up front.
    pub fn new(config: &TemporalFormatConfig) -> Result<Self, FormatError> {
        for subtype in [DateSubtype::Date, DateSubtype::Time, DateSubtype::DateTime] {
            let pattern = config.pattern_for(subtype);
            if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
                return Err(FormatError::InvalidPattern {
                    subtype,
                    pattern: pattern.to_string(),
                });
            }
        }
        let offset = FixedOffset::east_opt(config.utc_offset_seconds).ok_or(
            FormatError::InvalidOffset {
                seconds: config.utc_offset_seconds,
            },
        )?;
        debug!(
            date = %config.date_format,
            time = %config.time_format,
            datetime = %config.datetime_format,
            offset = %offset,
            "temporal formatter ready"
        );
        Ok(Self {
            config: config.clone(),
            offset,
        })
    }

    pub fn config(&self) -> &TemporalFormatConfig {
        &self.config
    }
}

impl Default for PatternFormatter {
    fn default() -> Self {
        Self {
            config: TemporalFormatConfig::default(),
            offset: Utc.fix(),
        }
    }
}

impl TemporalFormatter for PatternFormatter {
    fn format(
        &self,
        instant: Option<DateTime<Utc>>,
        subtype: DateSubtype,
    ) -> Result<Option<String>, FormatError> {
        let Some(instant) = instant else {
            return Ok(None);
        };
        let pattern = self.config.pattern_for(subtype);
        let offset = match subtype {
            DateSubtype::DateTime => self.offset,
            DateSubtype::Date | DateSubtype::Time => Utc.fix(),
        };

        let mut rendered = String::new();
        write!(rendered, "{}", instant.with_timezone(&offset).format(pattern)).map_err(|_| {
            FormatError::RenderFailed {
                subtype,
                pattern: pattern.to_string(),
            }
        })?;
        Ok(Some(rendered))
    }
}
