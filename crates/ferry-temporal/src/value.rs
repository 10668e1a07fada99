//! TemporalValue: a nullable instant tagged with the subtype of its source.
//!
//! The instant is stored as exact epoch milliseconds plus the nanoseconds
//! below the millisecond. Keeping the remainder strictly sub-millisecond
//! means the two parts never overlap: the millisecond fraction lives only in
//! `raw_millis`, so rebuilding the instant cannot count it twice.

use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use ferry_core::{
    ColumnError, ColumnKind, ColumnResult, DateSubtype, TemporalFormatter, TemporalObserver,
};

use crate::observer::NoopObserver;

pub const NANOS_PER_MILLI: u32 = 1_000_000;
pub const NANOS_PER_SECOND: u32 = 1_000_000_000;
const MILLIS_PER_SECOND: i64 = 1_000;

/// Stored width of a present value, as counted by row accounting.
const PRESENT_BYTE_SIZE: usize = 8;

/// A date, time of day, or full date-time, possibly null.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "TemporalParts")]
pub struct TemporalValue {
    raw_millis: Option<i64>,
    nano_remainder: u32,
    subtype: DateSubtype,
}

/// Unchecked wire shape; validated on the way in.
#[derive(Deserialize)]
struct TemporalParts {
    raw_millis: Option<i64>,
    #[serde(default)]
    nano_remainder: u32,
    #[serde(default)]
    subtype: DateSubtype,
}

impl TryFrom<TemporalParts> for TemporalValue {
    type Error = ColumnError;

    fn try_from(parts: TemporalParts) -> ColumnResult<Self> {
        Ok(Self::from_parts(parts.raw_millis, parts.nano_remainder)?.with_subtype(parts.subtype))
    }
}

fn validate(raw_millis: Option<i64>, nano_remainder: u32) -> ColumnResult<()> {
    if nano_remainder >= NANOS_PER_MILLI {
        return Err(ColumnError::InvalidTemporalState(format!(
            "nano remainder {nano_remainder} must be below {NANOS_PER_MILLI}"
        )));
    }
    if raw_millis.is_none() && nano_remainder != 0 {
        return Err(ColumnError::InvalidTemporalState(format!(
            "null value cannot carry nano remainder {nano_remainder}"
        )));
    }
    Ok(())
}

impl TemporalValue {
    /// The absent value, subtype DateTime.
    pub const fn null() -> Self {
        Self {
            raw_millis: None,
            nano_remainder: 0,
            subtype: DateSubtype::DateTime,
        }
    }

    /// From epoch milliseconds. Subtype DateTime.
    pub fn from_epoch_millis(millis: Option<i64>) -> Self {
        Self {
            raw_millis: millis,
            nano_remainder: 0,
            subtype: DateSubtype::DateTime,
        }
    }

    /// From a calendar date, normalized to UTC midnight. Subtype Date.
    pub fn from_date(date: Option<NaiveDate>) -> Self {
        Self {
            raw_millis: date.map(|d| d.and_time(NaiveTime::MIN).and_utc().timestamp_millis()),
            nano_remainder: 0,
            subtype: DateSubtype::Date,
        }
    }

    /// From a time of day, anchored on 1970-01-01 UTC. Sub-millisecond
    /// precision is dropped. Subtype Time.
    pub fn from_time(time: Option<NaiveTime>) -> Self {
        Self {
            raw_millis: time.map(|t| (t - NaiveTime::MIN).num_milliseconds()),
            nano_remainder: 0,
            subtype: DateSubtype::Time,
        }
    }

    /// From a full timestamp, keeping nanosecond precision. Subtype DateTime.
    pub fn from_timestamp(ts: Option<DateTime<Utc>>) -> Self {
        Self::from_timestamp_observed(ts, &NoopObserver)
    }

    /// Like [`Self::from_timestamp`], reporting the split parts to `observer`.
    pub fn from_timestamp_observed(
        ts: Option<DateTime<Utc>>,
        observer: &dyn TemporalObserver,
    ) -> Self {
        let value = match ts {
            Some(ts) => Self {
                raw_millis: Some(ts.timestamp_millis()),
                // Leap-second nanos (>= 1e9) are already folded into the millis.
                nano_remainder: ts.timestamp_subsec_nanos() % NANOS_PER_MILLI,
                subtype: DateSubtype::DateTime,
            },
            None => Self::null(),
        };
        observer.on_timestamp_ingested(value.raw_millis, value.nano_remainder);
        value
    }

    /// From a zone-less timestamp, read as UTC. Subtype DateTime.
    pub fn from_naive_timestamp(ts: Option<NaiveDateTime>) -> Self {
        Self::from_timestamp(ts.map(|ts| ts.and_utc()))
    }

    /// From already-split parts. Subtype DateTime.
    ///
    /// Fails if `nano_remainder` is not sub-millisecond or if a null value
    /// would carry a remainder.
    pub fn from_parts(raw_millis: Option<i64>, nano_remainder: u32) -> ColumnResult<Self> {
        validate(raw_millis, nano_remainder)?;
        Ok(Self {
            raw_millis,
            nano_remainder,
            subtype: DateSubtype::DateTime,
        })
    }

    pub fn with_subtype(mut self, subtype: DateSubtype) -> Self {
        self.subtype = subtype;
        self
    }

    pub fn kind(&self) -> ColumnKind {
        ColumnKind::Temporal
    }

    pub fn is_null(&self) -> bool {
        self.raw_millis.is_none()
    }

    pub fn byte_size(&self) -> usize {
        if self.is_null() {
            0
        } else {
            PRESENT_BYTE_SIZE
        }
    }

    /// Epoch milliseconds, or `None` when null.
    pub fn as_integer(&self) -> Option<i64> {
        self.raw_millis
    }

    /// Render through `formatter`, which also decides how null renders.
    pub fn as_text(&self, formatter: &dyn TemporalFormatter) -> ColumnResult<Option<String>> {
        let instant = self.as_temporal().map_err(|e| {
            ColumnError::conversion(ColumnKind::Temporal, ColumnKind::Text, e.to_string())
        })?;
        formatter.format(instant, self.subtype).map_err(|e| {
            ColumnError::conversion(
                ColumnKind::Temporal,
                ColumnKind::Text,
                format!("{self:?} cannot be rendered as text: {e}"),
            )
        })
    }

    /// Rebuild the stored instant, or `None` when null.
    pub fn as_temporal(&self) -> ColumnResult<Option<DateTime<Utc>>> {
        self.as_temporal_observed(&NoopObserver)
    }

    /// Like [`Self::as_temporal`], reporting the rebuilt instant to `observer`.
    pub fn as_temporal_observed(
        &self,
        observer: &dyn TemporalObserver,
    ) -> ColumnResult<Option<DateTime<Utc>>> {
        let Some(millis) = self.raw_millis else {
            return Ok(None);
        };
        let secs = millis.div_euclid(MILLIS_PER_SECOND);
        let subsec_millis = millis.rem_euclid(MILLIS_PER_SECOND) as u32;
        let nanos = subsec_millis * NANOS_PER_MILLI + self.nano_remainder;
        let instant = DateTime::from_timestamp(secs, nanos)
            .ok_or(ColumnError::InstantOutOfRange { millis })?;
        observer.on_instant_reconstructed(&instant);
        Ok(Some(instant))
    }

    pub fn as_binary(&self) -> ColumnResult<Option<Vec<u8>>> {
        self.unsupported(ColumnKind::Binary)
    }

    pub fn as_boolean(&self) -> ColumnResult<Option<bool>> {
        self.unsupported(ColumnKind::Boolean)
    }

    /// Always fails: reading the epoch as a float would hide schema mismatches.
    pub fn as_floating_point(&self) -> ColumnResult<Option<f64>> {
        self.unsupported(ColumnKind::FloatingPoint)
    }

    pub fn as_big_integer(&self) -> ColumnResult<Option<BigInt>> {
        self.unsupported(ColumnKind::BigInteger)
    }

    pub fn as_big_decimal(&self) -> ColumnResult<Option<BigDecimal>> {
        self.unsupported(ColumnKind::BigDecimal)
    }

    fn unsupported<T>(&self, to: ColumnKind) -> ColumnResult<T> {
        Err(ColumnError::conversion(
            ColumnKind::Temporal,
            to,
            format!("{} values have no {to} representation", self.subtype),
        ))
    }

    pub fn subtype(&self) -> DateSubtype {
        self.subtype
    }

    /// Any subtype is consistent with any instant; it only selects rendering.
    pub fn set_subtype(&mut self, subtype: DateSubtype) {
        self.subtype = subtype;
    }

    /// Nanoseconds below the millisecond, 0..=999_999.
    pub fn nano_remainder(&self) -> u32 {
        self.nano_remainder
    }

    /// Replace the sub-millisecond nanoseconds. On error the value is unchanged.
    pub fn set_nano_remainder(&mut self, nano_remainder: u32) -> ColumnResult<()> {
        validate(self.raw_millis, nano_remainder)?;
        self.nano_remainder = nano_remainder;
        Ok(())
    }

    /// Full fraction of the second in nanoseconds, or `None` when null.
    pub fn nano_of_second(&self) -> Option<u32> {
        self.raw_millis.map(|millis| {
            millis.rem_euclid(MILLIS_PER_SECOND) as u32 * NANOS_PER_MILLI + self.nano_remainder
        })
    }
}

impl From<DateTime<Utc>> for TemporalValue {
    fn from(ts: DateTime<Utc>) -> Self {
        Self::from_timestamp(Some(ts))
    }
}

impl From<NaiveDate> for TemporalValue {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(Some(date))
    }
}

impl From<NaiveTime> for TemporalValue {
    fn from(time: NaiveTime) -> Self {
        Self::from_time(Some(time))
    }
}
