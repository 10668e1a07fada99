mod column_kind;
mod date_subtype;

pub use column_kind::ColumnKind;
pub use date_subtype::DateSubtype;
