//! Value kinds a column can hold or be converted into.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Discriminant of every value kind in the column model.
///
/// Used both as the tag of a stored value and as the target of a
/// conversion request, so conversion errors can name both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    Integer,
    Text,
    Temporal,
    Binary,
    Boolean,
    FloatingPoint,
    BigInteger,
    BigDecimal,
}

impl ColumnKind {
    /// All kinds, in declaration order.
    pub const ALL: [ColumnKind; 8] = [
        ColumnKind::Integer,
        ColumnKind::Text,
        ColumnKind::Temporal,
        ColumnKind::Binary,
        ColumnKind::Boolean,
        ColumnKind::FloatingPoint,
        ColumnKind::BigInteger,
        ColumnKind::BigDecimal,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Text => "text",
            Self::Temporal => "temporal",
            Self::Binary => "binary",
            Self::Boolean => "boolean",
            Self::FloatingPoint => "floating point",
            Self::BigInteger => "big integer",
            Self::BigDecimal => "big decimal",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
