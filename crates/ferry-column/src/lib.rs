//! # ferry-column
//!
//! The polymorphic column value model: a tagged union over every value kind
//! and the record that owns a row of them.

pub mod column;
pub mod record;

pub use column::Column;
pub use record::Record;
