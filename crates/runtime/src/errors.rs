use std::error::Error;
use std::fmt;

use colored::Colorize;

use crate::values::Value;

pub type ExecResult<T> = Result<T, ExecError>;

/// Error raised while validating the parameters of a native action or while
/// running it
#[derive(Debug)]
pub enum ExecError {
    /// A required parameter was not provided
    MissingParameter { parameter: &'static str },

    /// Parameters were provided that the action does not declare
    UnexpectedParameters { parameters: Vec<String> },

    /// A parameter held a value of the wrong kind
    TypeMismatch {
        parameter: &'static str,
        expected: &'static str,
        found: Value,
    },

    /// A parameter held a kind no conversion is defined for
    UnsupportedKind {
        parameter: &'static str,
        found: Value,
    },

    /// A parameter held text that does not convert to the expected value
    InvalidValue {
        parameter: &'static str,
        text: String,
    },
}

/// Broad classification of an execution error
///
/// `Type` covers values of the wrong kind (including missing and unexpected
/// parameters), `Value` covers well-kinded but malformed content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecErrorKind {
    Type,
    Value,
}

impl ExecError {
    pub fn kind(&self) -> ExecErrorKind {
        match self {
            ExecError::MissingParameter { .. }
            | ExecError::UnexpectedParameters { .. }
            | ExecError::TypeMismatch { .. }
            | ExecError::UnsupportedKind { .. } => ExecErrorKind::Type,

            ExecError::InvalidValue { .. } => ExecErrorKind::Value,
        }
    }

    /// Render the error as a report line for terminal display
    pub fn render_colored(&self) -> String {
        format!("{} {self}", "error:".bright_red().bold())
    }
}

impl fmt::Display for ExecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecError::MissingParameter { parameter } => {
                write!(f, "missing required parameter '{parameter}'")
            }

            ExecError::UnexpectedParameters { parameters } => {
                write!(
                    f,
                    "unknown parameters in action call: {}",
                    parameters.join(", ")
                )
            }

            ExecError::TypeMismatch {
                parameter,
                expected,
                found,
            } => {
                write!(
                    f,
                    "expected {expected} for parameter '{parameter}', found {found} of type {}",
                    found.kind()
                )
            }

            ExecError::UnsupportedKind { parameter, found } => {
                write!(
                    f,
                    "type of parameter '{parameter}' is not valid, found {found} of type {}",
                    found.kind()
                )
            }

            ExecError::InvalidValue { parameter, text } => {
                write!(f, "value of parameter '{parameter}' is not valid, found '{text}'")
            }
        }
    }
}

impl Error for ExecError {}
