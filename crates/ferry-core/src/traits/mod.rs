mod temporal_formatter;
mod temporal_observer;

pub use temporal_formatter::TemporalFormatter;
pub use temporal_observer::TemporalObserver;
