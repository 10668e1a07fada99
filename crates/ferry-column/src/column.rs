//! Column: the tagged union over every value kind.
//!
//! Each arm owns its row of the conversion table. The temporal arm delegates
//! to [`TemporalValue`]; the other arms carry a deliberately narrow table of
//! identity and lossless widening plus text rendering. Anything else is a
//! `ConversionNotSupported` error, never a silent reinterpretation.

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_bigint::BigInt;

use ferry_core::{ColumnError, ColumnKind, ColumnResult, TemporalFormatter};
use ferry_temporal::TemporalValue;

/// One typed cell of a record.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Integer(Option<i64>),
    Text(Option<String>),
    FloatingPoint(Option<f64>),
    Boolean(Option<bool>),
    Binary(Option<Vec<u8>>),
    BigInteger(Option<BigInt>),
    BigDecimal(Option<BigDecimal>),
    Temporal(TemporalValue),
}

impl Column {
    /// A null column of the given kind.
    pub fn null(kind: ColumnKind) -> Self {
        match kind {
            ColumnKind::Integer => Self::Integer(None),
            ColumnKind::Text => Self::Text(None),
            ColumnKind::Temporal => Self::Temporal(TemporalValue::null()),
            ColumnKind::Binary => Self::Binary(None),
            ColumnKind::Boolean => Self::Boolean(None),
            ColumnKind::FloatingPoint => Self::FloatingPoint(None),
            ColumnKind::BigInteger => Self::BigInteger(None),
            ColumnKind::BigDecimal => Self::BigDecimal(None),
        }
    }

    pub fn kind(&self) -> ColumnKind {
        match self {
            Self::Integer(_) => ColumnKind::Integer,
            Self::Text(_) => ColumnKind::Text,
            Self::FloatingPoint(_) => ColumnKind::FloatingPoint,
            Self::Boolean(_) => ColumnKind::Boolean,
            Self::Binary(_) => ColumnKind::Binary,
            Self::BigInteger(_) => ColumnKind::BigInteger,
            Self::BigDecimal(_) => ColumnKind::BigDecimal,
            Self::Temporal(_) => ColumnKind::Temporal,
        }
    }

    pub fn is_null(&self) -> bool {
        match self {
            Self::Integer(v) => v.is_none(),
            Self::Text(v) => v.is_none(),
            Self::FloatingPoint(v) => v.is_none(),
            Self::Boolean(v) => v.is_none(),
            Self::Binary(v) => v.is_none(),
            Self::BigInteger(v) => v.is_none(),
            Self::BigDecimal(v) => v.is_none(),
            Self::Temporal(v) => v.is_null(),
        }
    }

    /// Approximate payload size used for row accounting. Null is 0.
    pub fn byte_size(&self) -> usize {
        match self {
            Self::Integer(v) => v.map_or(0, |_| 8),
            Self::Text(v) => v.as_ref().map_or(0, String::len),
            Self::FloatingPoint(v) => v.map_or(0, |_| 8),
            Self::Boolean(v) => v.map_or(0, |_| 1),
            Self::Binary(v) => v.as_ref().map_or(0, Vec::len),
            Self::BigInteger(v) => v.as_ref().map_or(0, big_int_size),
            Self::BigDecimal(v) => v
                .as_ref()
                .map_or(0, |d| big_int_size(&d.as_bigint_and_exponent().0) + 8),
            Self::Temporal(v) => v.byte_size(),
        }
    }

    pub fn as_integer(&self) -> ColumnResult<Option<i64>> {
        match self {
            Self::Integer(v) => Ok(*v),
            Self::Temporal(v) => Ok(v.as_integer()),
            _ => self.unsupported(ColumnKind::Integer),
        }
    }

    /// Render as text. `formatter` is only consulted by temporal columns.
    pub fn as_text(&self, formatter: &dyn TemporalFormatter) -> ColumnResult<Option<String>> {
        match self {
            Self::Integer(v) => Ok(v.map(|v| v.to_string())),
            Self::Text(v) => Ok(v.clone()),
            Self::FloatingPoint(v) => Ok(v.map(|v| v.to_string())),
            Self::Boolean(v) => Ok(v.map(|v| v.to_string())),
            Self::BigInteger(v) => Ok(v.as_ref().map(ToString::to_string)),
            Self::BigDecimal(v) => Ok(v.as_ref().map(ToString::to_string)),
            Self::Temporal(v) => v.as_text(formatter),
            Self::Binary(_) => self.unsupported(ColumnKind::Text),
        }
    }

    pub fn as_temporal(&self) -> ColumnResult<Option<DateTime<Utc>>> {
        match self {
            Self::Temporal(v) => v.as_temporal(),
            _ => self.unsupported(ColumnKind::Temporal),
        }
    }

    pub fn as_binary(&self) -> ColumnResult<Option<Vec<u8>>> {
        match self {
            Self::Binary(v) => Ok(v.clone()),
            Self::Text(v) => Ok(v.as_ref().map(|s| s.as_bytes().to_vec())),
            Self::Temporal(v) => v.as_binary(),
            _ => self.unsupported(ColumnKind::Binary),
        }
    }

    pub fn as_boolean(&self) -> ColumnResult<Option<bool>> {
        match self {
            Self::Boolean(v) => Ok(*v),
            Self::Temporal(v) => v.as_boolean(),
            _ => self.unsupported(ColumnKind::Boolean),
        }
    }

    pub fn as_floating_point(&self) -> ColumnResult<Option<f64>> {
        match self {
            Self::FloatingPoint(v) => Ok(*v),
            Self::Temporal(v) => v.as_floating_point(),
            _ => self.unsupported(ColumnKind::FloatingPoint),
        }
    }

    pub fn as_big_integer(&self) -> ColumnResult<Option<BigInt>> {
        match self {
            Self::Integer(v) => Ok(v.map(BigInt::from)),
            Self::BigInteger(v) => Ok(v.clone()),
            Self::Temporal(v) => v.as_big_integer(),
            _ => self.unsupported(ColumnKind::BigInteger),
        }
    }

    pub fn as_big_decimal(&self) -> ColumnResult<Option<BigDecimal>> {
        match self {
            Self::Integer(v) => Ok(v.map(BigDecimal::from)),
            Self::BigInteger(v) => Ok(v.as_ref().map(|b| BigDecimal::new(b.clone(), 0))),
            Self::BigDecimal(v) => Ok(v.clone()),
            Self::Temporal(v) => v.as_big_decimal(),
            _ => self.unsupported(ColumnKind::BigDecimal),
        }
    }

    fn unsupported<T>(&self, to: ColumnKind) -> ColumnResult<T> {
        let from = self.kind();
        Err(ColumnError::conversion(
            from,
            to,
            format!("{from} columns have no {to} reading"),
        ))
    }
}

fn big_int_size(value: &BigInt) -> usize {
    (value.bits() / 8 + 1) as usize
}

impl From<TemporalValue> for Column {
    fn from(value: TemporalValue) -> Self {
        Self::Temporal(value)
    }
}

impl From<i64> for Column {
    fn from(value: i64) -> Self {
        Self::Integer(Some(value))
    }
}

impl From<String> for Column {
    fn from(value: String) -> Self {
        Self::Text(Some(value))
    }
}

impl From<&str> for Column {
    fn from(value: &str) -> Self {
        Self::Text(Some(value.to_string()))
    }
}

impl From<f64> for Column {
    fn from(value: f64) -> Self {
        Self::FloatingPoint(Some(value))
    }
}

impl From<bool> for Column {
    fn from(value: bool) -> Self {
        Self::Boolean(Some(value))
    }
}

impl From<Vec<u8>> for Column {
    fn from(value: Vec<u8>) -> Self {
        Self::Binary(Some(value))
    }
}

impl From<BigInt> for Column {
    fn from(value: BigInt) -> Self {
        Self::BigInteger(Some(value))
    }
}

impl From<BigDecimal> for Column {
    fn from(value: BigDecimal) -> Self {
        Self::BigDecimal(Some(value))
    }
}
