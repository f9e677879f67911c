//! Raw input values and the fallible conversion to `f64`.
//!
//! Samples handed to statkit are only nominally numeric: a JSON array or a
//! spreadsheet column may carry text, nulls, or flags mixed in with numbers.
//! [`ToNumeric`] is the single conversion every operation goes through.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single, possibly non-numeric, element of a raw sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    /// Check if this value converts to a finite number.
    pub fn is_numeric(&self) -> bool {
        self.to_numeric().is_some()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Text(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// Fallible conversion of a raw element to a finite `f64`.
///
/// Returns `None` when the element has no numeric reading, or when its
/// reading is NaN or infinite.
pub trait ToNumeric {
    fn to_numeric(&self) -> Option<f64>;
}

fn finite(x: f64) -> Option<f64> {
    x.is_finite().then_some(x)
}

impl ToNumeric for f64 {
    fn to_numeric(&self) -> Option<f64> {
        finite(*self)
    }
}

impl ToNumeric for f32 {
    fn to_numeric(&self) -> Option<f64> {
        finite(f64::from(*self))
    }
}

macro_rules! impl_to_numeric_int {
    ($($t:ty),*) => {
        $(
            impl ToNumeric for $t {
                fn to_numeric(&self) -> Option<f64> {
                    Some(*self as f64)
                }
            }
        )*
    };
}

impl_to_numeric_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl ToNumeric for bool {
    fn to_numeric(&self) -> Option<f64> {
        Some(if *self { 1.0 } else { 0.0 })
    }
}

impl ToNumeric for str {
    fn to_numeric(&self) -> Option<f64> {
        self.trim().parse::<f64>().ok().and_then(finite)
    }
}

impl ToNumeric for String {
    fn to_numeric(&self) -> Option<f64> {
        self.as_str().to_numeric()
    }
}

impl ToNumeric for Value {
    fn to_numeric(&self) -> Option<f64> {
        match self {
            Value::Null => None,
            Value::Bool(b) => b.to_numeric(),
            Value::Int(i) => i.to_numeric(),
            Value::Float(x) => x.to_numeric(),
            Value::Text(s) => s.to_numeric(),
        }
    }
}

impl<T: ToNumeric> ToNumeric for Option<T> {
    fn to_numeric(&self) -> Option<f64> {
        self.as_ref().and_then(|v| v.to_numeric())
    }
}

impl<T: ToNumeric + ?Sized> ToNumeric for &T {
    fn to_numeric(&self) -> Option<f64> {
        (**self).to_numeric()
    }
}

impl<T: ToNumeric + ?Sized> ToNumeric for Box<T> {
    fn to_numeric(&self) -> Option<f64> {
        (**self).to_numeric()
    }
}
