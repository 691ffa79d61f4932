use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A parameter or result value. Worker counts are integers, everything
/// else is a float.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(u64),
    Float(f64),
}

impl Value {
    pub fn as_f64(&self) -> f64 {
        match *self {
            Value::Int(v) => v as f64,
            Value::Float(v) => v,
        }
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::Int(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(u64::from(v))
    }
}

/// Ordered name to value mapping, in the order the model produced it.
pub type ParameterMap = IndexMap<&'static str, Value>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions() {
        assert_eq!(Value::from(2.5), Value::Float(2.5));
        assert_eq!(Value::from(3u32), Value::Int(3));
        assert_eq!(Value::Int(3).as_f64(), 3.0);
        assert!(Value::Int(1).is_int());
        assert!(!Value::Float(1.0).is_int());
    }

    #[test]
    fn serializes_untagged() {
        let json = serde_json::to_string(&[Value::Int(17), Value::Float(0.25)]).unwrap();
        assert_eq!(json, "[17,0.25]");
    }
}
