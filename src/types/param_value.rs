//! Parameter values typed into the editor's parameter form.

use serde_json::{Number, Value};

/// Coerced value of a parameter text field.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
  /// Empty field: the parameter is dropped on export.
  Empty,
  Number(Number),
  Text(String),
}

impl ParamValue {
  /// Coerces raw field text: empty stays empty, anything that parses as a
  /// number becomes a number, everything else is kept as text. Numbers with
  /// an integral value (`"1.0"`, `"1e3"`) come out as integers.
  pub fn parse_input(input: &str) -> Self {
    let trimmed = input.trim();
    if input.is_empty() {
      return ParamValue::Empty;
    }
    if trimmed.is_empty() {
      return ParamValue::Text(input.to_string());
    }
    if let Ok(i) = trimmed.parse::<i64>() {
      return ParamValue::Number(Number::from(i));
    }
    match trimmed.parse::<f64>() {
      Ok(f) if is_integral(f) => ParamValue::Number(Number::from(f as i64)),
      Ok(f) => match Number::from_f64(f) {
        Some(n) => ParamValue::Number(n),
        None => ParamValue::Text(input.to_string()),
      },
      Err(_) => ParamValue::Text(input.to_string()),
    }
  }

  /// JSON form; `None` for [`ParamValue::Empty`].
  pub fn into_value(self) -> Option<Value> {
    match self {
      ParamValue::Empty => None,
      ParamValue::Number(n) => Some(Value::Number(n)),
      ParamValue::Text(s) => Some(Value::String(s)),
    }
  }
}

/// Finite, no fractional part and inside the `i64` range.
fn is_integral(f: f64) -> bool {
  f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64
}
