//! Property tests for TemporalValue round-trip and failure laws.

use proptest::prelude::*;

use chrono::{DateTime, NaiveDate, NaiveTime, Timelike};
use ferry_core::{ColumnError, DateSubtype};
use ferry_temporal::TemporalValue;

// Seconds within chrono's representable range, comfortably inside ±5000 years.
const SECS_RANGE: std::ops::Range<i64> = -95_000_000_000..95_000_000_000;

fn any_value() -> impl Strategy<Value = TemporalValue> {
    prop_oneof![
        any::<Option<i64>>().prop_map(TemporalValue::from_epoch_millis),
        (SECS_RANGE, 0u32..1_000_000_000).prop_map(|(secs, nanos)| {
            TemporalValue::from_timestamp(DateTime::from_timestamp(secs, nanos))
        }),
        (-100_000i32..100_000).prop_map(|days| {
            TemporalValue::from_date(NaiveDate::from_num_days_from_ce_opt(days + 719_163))
        }),
        (0u32..86_400).prop_map(|secs| {
            TemporalValue::from_time(NaiveTime::from_num_seconds_from_midnight_opt(secs, 0))
        }),
        Just(TemporalValue::null()),
    ]
}

// Epoch millis survive construction unchanged, null included.
proptest! {
    #[test]
    fn prop_epoch_millis_roundtrip(millis in any::<Option<i64>>()) {
        let value = TemporalValue::from_epoch_millis(millis);
        prop_assert_eq!(value.as_integer(), millis);
        prop_assert_eq!(value.subtype(), DateSubtype::DateTime);
    }
}

// as_temporal reproduces the ingested instant exactly, nanoseconds included.
proptest! {
    #[test]
    fn prop_timestamp_roundtrip(secs in SECS_RANGE, nanos in 0u32..1_000_000_000) {
        let ts = DateTime::from_timestamp(secs, nanos).unwrap();
        let value = TemporalValue::from_timestamp(Some(ts));

        let rebuilt = value.as_temporal().unwrap().unwrap();
        prop_assert_eq!(rebuilt, ts);
        prop_assert_eq!(rebuilt.nanosecond(), nanos);
        prop_assert_eq!(value.as_integer(), Some(ts.timestamp_millis()));
        prop_assert_eq!(value.nano_of_second(), Some(nanos));
        prop_assert!(value.nano_remainder() < 1_000_000);
    }
}

// Whole-millisecond epochs rebuild to exactly that millisecond.
proptest! {
    #[test]
    fn prop_epoch_millis_rebuild_exactly(millis in -3_000_000_000_000_000i64..3_000_000_000_000_000) {
        let value = TemporalValue::from_epoch_millis(Some(millis));
        let rebuilt = value.as_temporal().unwrap().unwrap();
        prop_assert_eq!(rebuilt.timestamp_millis(), millis);
        prop_assert_eq!(rebuilt.nanosecond() % 1_000_000, 0);
    }
}

// Dates land on UTC midnight and keep the Date subtype.
proptest! {
    #[test]
    fn prop_date_is_midnight(days in -100_000i32..100_000) {
        let date = NaiveDate::from_num_days_from_ce_opt(days + 719_163).unwrap();
        let value = TemporalValue::from_date(Some(date));

        prop_assert_eq!(value.subtype(), DateSubtype::Date);
        prop_assert_eq!(value.as_integer().unwrap().rem_euclid(86_400_000), 0);
        let rebuilt = value.as_temporal().unwrap().unwrap();
        prop_assert_eq!(rebuilt.date_naive(), date);
    }
}

// Times of day stay inside the first epoch day and keep the Time subtype.
proptest! {
    #[test]
    fn prop_time_within_epoch_day(secs in 0u32..86_400, nanos in 0u32..1_000_000_000) {
        let time = NaiveTime::from_num_seconds_from_midnight_opt(secs, nanos).unwrap();
        let value = TemporalValue::from_time(Some(time));

        prop_assert_eq!(value.subtype(), DateSubtype::Time);
        let millis = value.as_integer().unwrap();
        prop_assert!((0..86_400_000).contains(&millis));
        prop_assert_eq!(millis, i64::from(secs) * 1000 + i64::from(nanos / 1_000_000));
        prop_assert_eq!(value.nano_remainder(), 0);
    }
}

// Every value, null or not, refuses the non-temporal targets.
proptest! {
    #[test]
    fn prop_unsupported_targets_always_fail(value in any_value()) {
        let conversion = |e: ColumnError| matches!(e, ColumnError::ConversionNotSupported { .. });
        prop_assert!(value.as_binary().map_err(conversion).unwrap_err());
        prop_assert!(value.as_boolean().map_err(conversion).unwrap_err());
        prop_assert!(value.as_floating_point().map_err(conversion).unwrap_err());
        prop_assert!(value.as_big_integer().map_err(conversion).unwrap_err());
        prop_assert!(value.as_big_decimal().map_err(conversion).unwrap_err());
    }
}

// Rejected setter calls leave the value untouched.
proptest! {
    #[test]
    fn prop_invalid_remainder_leaves_value_unchanged(
        value in any_value(),
        remainder in 1_000_000u32..=u32::MAX,
    ) {
        let mut mutated = value;
        prop_assert!(mutated.set_nano_remainder(remainder).is_err());
        prop_assert_eq!(mutated, value);
    }
}

// Null values propagate through integer and temporal accessors.
proptest! {
    #[test]
    fn prop_null_propagates(value in any_value()) {
        prop_assert_eq!(value.is_null(), value.as_integer().is_none());
        if value.is_null() {
            prop_assert_eq!(value.as_temporal().unwrap(), None);
            prop_assert_eq!(value.byte_size(), 0);
        } else {
            prop_assert_eq!(value.byte_size(), 8);
        }
    }
}
