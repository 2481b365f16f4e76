use serde::{Deserialize, Serialize};
use std::fmt;

/// A scalar parameter value. Nodes carry a name -> value map used for
/// literal-valued nodes (`float_constant`, `vec2_constant`, ...) and as the
/// fallback for unconnected input ports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Number(f64),
    Text(String),
    Bool(bool),
}

impl ParamValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParamValue::Number(n) => Some(*n),
            ParamValue::Text(s) => s.parse().ok(),
            ParamValue::Bool(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Stringifies a parameter the way the emitter substitutes it into a GLSL
/// template: numbers always carry a decimal point, everything else is
/// passed through as written (e.g. a `custom_code` literal expression).
impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Number(n) => write!(f, "{}", format_glsl_float(*n)),
            ParamValue::Text(s) => write!(f, "{s}"),
            ParamValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Formats a number as a GLSL float literal: always contains a decimal point.
pub fn format_glsl_float(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() {
        format!("{n:.1}")
    } else {
        let s = format!("{n}");
        if s.contains('.') || s.contains('e') || s.contains("inf") || s.contains("NaN") {
            s
        } else {
            format!("{s}.0")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_get_a_decimal_point() {
        assert_eq!(format_glsl_float(2.0), "2.0");
        assert_eq!(format_glsl_float(-1.0), "-1.0");
    }

    #[test]
    fn fractional_values_pass_through() {
        assert_eq!(format_glsl_float(0.5), "0.5");
        assert_eq!(format_glsl_float(3.14), "3.14");
    }
}
