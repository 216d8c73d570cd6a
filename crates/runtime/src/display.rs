use std::fmt;

use crate::values::{Value, ValueKind};

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Values render the way they are echoed in diagnostics: scalars bare,
// strings single-quoted, containers recursively.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),

            Value::Bool(value) => write!(f, "{value}"),

            Value::Int(int) => write!(f, "{int}"),

            Value::Float(float) => write!(f, "{float}"),

            Value::String(string) => write!(f, "'{string}'"),

            Value::Bytes(bytes) => write!(f, "b\"{}\"", bytes.escape_ascii()),

            Value::List(values) => {
                f.write_str("[")?;

                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }

                    write!(f, "{value}")?;
                }

                f.write_str("]")
            }

            Value::Map(entries) => {
                f.write_str("{")?;

                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }

                    write!(f, "{key}: {value}")?;
                }

                f.write_str("}")
            }
        }
    }
}
