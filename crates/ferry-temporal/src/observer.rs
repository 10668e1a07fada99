//! Diagnostics observers for temporal values.

use chrono::{DateTime, Utc};
use tracing::trace;

use ferry_core::TemporalObserver;

/// Discards every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl TemporalObserver for NoopObserver {}

/// Emits trace-level records under the `ferry::temporal` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl TemporalObserver for TracingObserver {
    fn on_timestamp_ingested(&self, raw_millis: Option<i64>, nano_remainder: u32) {
        trace!(
            target: "ferry::temporal",
            raw_millis = ?raw_millis,
            nano_remainder,
            "timestamp ingested"
        );
    }

    fn on_instant_reconstructed(&self, instant: &DateTime<Utc>) {
        trace!(
            target: "ferry::temporal",
            instant = %instant.to_rfc3339_opts(chrono::SecondsFormat::Nanos, true),
            "instant reconstructed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use crate::TemporalValue;

    #[derive(Default)]
    struct Recording {
        ingested: Mutex<Vec<(Option<i64>, u32)>>,
        rebuilt: Mutex<Vec<DateTime<Utc>>>,
    }

    impl TemporalObserver for Recording {
        fn on_timestamp_ingested(&self, raw_millis: Option<i64>, nano_remainder: u32) {
            self.ingested.lock().unwrap().push((raw_millis, nano_remainder));
        }

        fn on_instant_reconstructed(&self, instant: &DateTime<Utc>) {
            self.rebuilt.lock().unwrap().push(*instant);
        }
    }

    #[test]
    fn observer_sees_split_parts_and_rebuilt_instant() {
        let recording = Recording::default();
        let instant = DateTime::from_timestamp(42, 7_000_321).unwrap();

        let value = TemporalValue::from_timestamp_observed(Some(instant), &recording);
        let rebuilt = value.as_temporal_observed(&recording).unwrap();

        assert_eq!(*recording.ingested.lock().unwrap(), vec![(Some(42_007), 321)]);
        assert_eq!(*recording.rebuilt.lock().unwrap(), vec![instant]);
        assert_eq!(rebuilt, Some(instant));
    }

    #[test]
    fn null_reconstruction_is_not_reported() {
        let recording = Recording::default();
        let value = TemporalValue::from_timestamp_observed(None, &recording);
        assert_eq!(value.as_temporal_observed(&recording).unwrap(), None);

        assert_eq!(*recording.ingested.lock().unwrap(), vec![(None, 0)]);
        assert!(recording.rebuilt.lock().unwrap().is_empty());
    }

    #[test]
    fn observers_do_not_change_results() {
        let instant = DateTime::from_timestamp(1_700_000_000, 1).unwrap();
        let plain = TemporalValue::from_timestamp(Some(instant));
        let traced = TemporalValue::from_timestamp_observed(Some(instant), &TracingObserver);
        assert_eq!(plain, traced);
        assert_eq!(
            traced.as_temporal_observed(&TracingObserver).unwrap(),
            plain.as_temporal().unwrap()
        );
    }
}
