//! Normalization of loosely-typed count-like parameters into signed integers

use runflow_runtime::{
    errors::{ExecError, ExecResult},
    values::Value,
};

/// Normalize a loosely-typed count-like value into a signed integer
///
/// Kinds are checked in a fixed order, first match wins: the null value
/// yields `default`, integers pass through, floats truncate toward zero,
/// booleans become 1 or 0, and text (strings as well as UTF-8 byte strings)
/// goes through the textual fallback chain. Every other kind is rejected.
pub fn coerce_to_int(value: &Value, parameter: &'static str, default: i64) -> ExecResult<i64> {
    match value {
        Value::Null => Ok(default),

        Value::Int(int) => Ok(*int),

        Value::Float(float) => float_to_int(*float, parameter),

        Value::Bool(boolean) => Ok(i64::from(*boolean)),

        Value::String(text) => text_to_int(text, parameter, default),

        Value::Bytes(bytes) => match std::str::from_utf8(bytes) {
            Ok(text) => text_to_int(text, parameter, default),

            Err(_) => Err(ExecError::InvalidValue {
                parameter,
                text: String::from_utf8_lossy(bytes).into_owned(),
            }),
        },

        Value::List(_) | Value::Map(_) => Err(ExecError::UnsupportedKind {
            parameter,
            found: value.clone(),
        }),
    }
}

fn float_to_int(float: f64, parameter: &'static str) -> ExecResult<i64> {
    if float.is_finite() {
        Ok(float as i64)
    } else {
        Err(ExecError::InvalidValue {
            parameter,
            text: float.to_string(),
        })
    }
}

/// Textual fallback chain: integer literal first, then float literal, then
/// the "none" sentinel, then the boolean words.
///
/// Non-finite float literals such as `inf` or `nan` fall through to the
/// final rejection.
fn text_to_int(text: &str, parameter: &'static str, default: i64) -> ExecResult<i64> {
    let trimmed = text.trim();

    if let Ok(int) = trimmed.parse::<i64>() {
        return Ok(int);
    }

    if let Ok(float) = trimmed.parse::<f64>() {
        if float.is_finite() {
            return Ok(float as i64);
        }
    }

    if trimmed.eq_ignore_ascii_case("none") {
        return Ok(default);
    }

    if trimmed.eq_ignore_ascii_case("true") {
        return Ok(1);
    }

    if trimmed.eq_ignore_ascii_case("false") {
        return Ok(0);
    }

    Err(ExecError::InvalidValue {
        parameter,
        text: text.to_owned(),
    })
}
