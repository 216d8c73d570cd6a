//! This module contains utilities for named parameter handling and type-safe
//! value extraction

use std::marker::PhantomData;

use indexmap::IndexMap;

use runflow_runtime::{
    errors::{ExecError, ExecResult},
    values::Value,
};

use super::types::TypedValueParser;

/// Named parameters handed to an action by the calling engine
///
/// Insertion order is preserved so that diagnostics listing leftover
/// parameters are deterministic.
#[derive(Debug, Clone, Default)]
pub struct Params {
    values: IndexMap<String, Value>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    pub fn take(&mut self, name: &str) -> Option<Value> {
        self.values.shift_remove(name)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_names(self) -> Vec<String> {
        self.values.into_keys().collect()
    }
}

impl<S: Into<String>> FromIterator<(S, Value)> for Params {
    fn from_iter<I: IntoIterator<Item = (S, Value)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }
}

/// Handler extracting one declared parameter out of a [`Params`] set
pub trait ArgHandler {
    fn name(&self) -> &'static str;
    fn is_optional(&self) -> bool;

    type Parsed;
    fn parse(&self, value: Option<Value>) -> ExecResult<Self::Parsed>;

    type Parser: TypedValueParser;
}

pub struct Arg<const OPTIONAL: bool, T: TypedValueParser> {
    name: &'static str,
    _t: PhantomData<T>,
}

pub type RequiredArg<T> = Arg<false, T>;
pub type OptionalArg<T> = Arg<true, T>;

impl<const OPTIONAL: bool, T: TypedValueParser> Arg<OPTIONAL, T> {
    pub fn named(name: &'static str) -> Self {
        Self {
            name,
            _t: PhantomData,
        }
    }
}

impl<T: TypedValueParser> ArgHandler for Arg<false, T> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn is_optional(&self) -> bool {
        false
    }

    type Parsed = T::Parsed;

    fn parse(&self, value: Option<Value>) -> ExecResult<Self::Parsed> {
        let value = value.ok_or(ExecError::MissingParameter {
            parameter: self.name,
        })?;

        T::parse(value).map_err(|found| ExecError::TypeMismatch {
            parameter: self.name,
            expected: T::EXPECTED,
            found,
        })
    }

    type Parser = T;
}

impl<T: TypedValueParser> ArgHandler for Arg<true, T> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn is_optional(&self) -> bool {
        true
    }

    type Parsed = Option<T::Parsed>;

    fn parse(&self, value: Option<Value>) -> ExecResult<Self::Parsed> {
        value
            .map(T::parse)
            .transpose()
            .map_err(|found| ExecError::TypeMismatch {
                parameter: self.name,
                expected: T::EXPECTED,
                found,
            })
    }

    type Parser = T;
}
