use chrono::{DateTime, Utc};

/// Optional diagnostics hook for temporal values.
///
/// Purely informational. Omitting it never changes a result.
pub trait TemporalObserver: Send + Sync {
    /// A full timestamp was ingested and split into its stored parts.
    fn on_timestamp_ingested(&self, _raw_millis: Option<i64>, _nano_remainder: u32) {}

    /// An instant was rebuilt from its stored parts.
    fn on_instant_reconstructed(&self, _instant: &DateTime<Utc>) {}
}
