//!
//! This module defines and exposes *type handlers*, which are simple types
//! that convert the engine's loosely-typed values into plain Rust ones.
//!

use indexmap::IndexMap;

use runflow_runtime::values::Value;

/// Conversion from a loosely-typed value into a precise Rust type
///
/// On mismatch the rejected value is handed back unchanged so the caller can
/// build a diagnostic naming the parameter it came from.
pub trait TypedValueParser {
    /// Short kind name, used when rendering signatures
    const KIND_NAME: &'static str;

    /// Phrase used in type mismatch diagnostics
    const EXPECTED: &'static str;

    type Parsed;

    fn parse(value: Value) -> Result<Self::Parsed, Value>;
}

/// This macro helps create a type handler for any variant of the [`Value`] enum
macro_rules! declare_basic_type_handlers {
    ($($name: ident = $kind: literal, $expected: literal => $type: ty => $value_ident: ident: $parser: expr),+ $(,)?) => {
        $(
            pub struct $name;

            impl TypedValueParser for $name {
                const KIND_NAME: &'static str = $kind;
                const EXPECTED: &'static str = $expected;

                type Parsed = $type;

                fn parse($value_ident: Value) -> Result<Self::Parsed, Value> {
                    $parser
                }
            }
        )+
    };
}

// Implement type handlers for all basic kinds
declare_basic_type_handlers!(
    AnyType = "any", "any value" => Value => value: Ok(value),

    NullType = "null", "the null value" => () => value: match value {
        Value::Null => Ok(()),
        other => Err(other)
    },

    BoolType = "boolean", "a boolean" => bool => value: match value {
        Value::Bool(inner) => Ok(inner),
        other => Err(other)
    },

    IntType = "int", "an integer" => i64 => value: match value {
        Value::Int(inner) => Ok(inner),
        other => Err(other)
    },

    FloatType = "float", "a float" => f64 => value: match value {
        Value::Float(inner) => Ok(inner),
        other => Err(other)
    },

    StringType = "string", "a string" => String => value: match value {
        Value::String(inner) => Ok(inner),
        other => Err(other)
    },

    BytesType = "bytes", "a byte string" => Vec<u8> => value: match value {
        Value::Bytes(inner) => Ok(inner),
        other => Err(other)
    },

    ListType = "list", "a list" => Vec<Value> => value: match value {
        Value::List(inner) => Ok(inner),
        other => Err(other)
    },

    MapType = "map", "a map" => IndexMap<String, Value> => value: match value {
        Value::Map(inner) => Ok(inner),
        other => Err(other)
    },
);
