// src/state/param.rs
//
// Parameter definitions and their values.

use std::fmt;

/// Canonical identifier for a parameter.
///
/// Identifiers are strings normalized at the boundary (surrounding
/// whitespace is trimmed). Numeric identifiers coming from JS are
/// converted with [`ParamId::from_number`], so `2`, `"2"` and `" 2 "`
/// all name the same parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ParamId(String);

impl ParamId {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_string())
    }

    /// Render a number the way JS `String(n)` does, so a numeric id and
    /// its string form compare equal.
    ///
    /// Magnitudes in `[1e-6, 1e21)` print as plain decimals with no
    /// fractional part for integers; anything outside uses exponent
    /// notation with an explicit sign (`1e+21`, `1e-7`).
    pub fn from_number(n: f64) -> Self {
        let text = if n.is_nan() {
            "NaN".to_string()
        } else if n.is_infinite() {
            let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
            text.to_string()
        } else if n == 0.0 {
            // Covers -0.0 as well.
            "0".to_string()
        } else if (1e-6..1e21).contains(&n.abs()) {
            format!("{}", n)
        } else {
            let exp = format!("{:e}", n);
            match exp.split_once('e') {
                Some((mantissa, power)) if !power.starts_with('-') => {
                    format!("{}e+{}", mantissa, power)
                }
                _ => exp,
            }
        };
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ParamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ParamId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for ParamId {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<u32> for ParamId {
    fn from(n: u32) -> Self {
        Self(n.to_string())
    }
}

/// A named, uniquely identified attribute definition.
///
/// Parameters are immutable once created; only their value in the
/// [`Model`](super::Model) changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub id: ParamId,
    pub name: String,
}

impl Parameter {
    pub fn new(id: impl Into<ParamId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// The current value of one parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamValue {
    pub param_id: ParamId,
    pub value: String,
}

impl ParamValue {
    pub fn new(param_id: impl Into<ParamId>, value: impl Into<String>) -> Self {
        Self {
            param_id: param_id.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_is_trimmed() {
        assert_eq!(ParamId::new("  7 "), ParamId::new("7"));
        assert!(ParamId::new("   ").is_empty());
    }

    #[test]
    fn test_numeric_ids_match_strings() {
        assert_eq!(ParamId::from_number(2.0), ParamId::from("2"));
        assert_eq!(ParamId::from(2u32), ParamId::from("2"));
        assert_eq!(ParamId::from_number(1.5).as_str(), "1.5");
    }

    #[test]
    fn test_large_numeric_ids_stay_distinct() {
        let a = ParamId::from_number(1e19);
        let b = ParamId::from_number(5e19);
        assert_ne!(a, b);
        assert_eq!(a.as_str(), "10000000000000000000");
        assert_eq!(b.as_str(), "50000000000000000000");
        assert_eq!(
            ParamId::from_number(9007199254740993.0),
            ParamId::from("9007199254740992")
        );
    }

    #[test]
    fn test_numeric_ids_use_js_text() {
        assert_eq!(ParamId::from_number(1e21), ParamId::from("1e+21"));
        assert_eq!(ParamId::from_number(1.5e22).as_str(), "1.5e+22");
        assert_eq!(ParamId::from_number(1e-7).as_str(), "1e-7");
        assert_eq!(ParamId::from_number(0.000001).as_str(), "0.000001");
        assert_eq!(ParamId::from_number(-3.0).as_str(), "-3");
        assert_eq!(ParamId::from_number(-0.0).as_str(), "0");
        assert_eq!(ParamId::from_number(f64::INFINITY).as_str(), "Infinity");
        assert_eq!(ParamId::from_number(f64::NEG_INFINITY).as_str(), "-Infinity");
        assert_eq!(ParamId::from_number(f64::NAN).as_str(), "NaN");
    }
}
