//! Dynamic values encoded against descriptors.
//!
//! [`ValueCodec`] follows exactly the procedures the emitter writes into
//! generated code, so wire behavior can be checked without compiling the
//! generated module.

mod codec;

#[cfg(test)]
mod codec_tests;

use indexmap::IndexMap;

pub use codec::ValueCodec;

/// A value of any generated type.
///
/// Structs and variants are records keyed by their Rust field names; a
/// variant record carries its `is_*` flags next to the payload fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Unit,
    Bool(bool),
    Char(char),
    Str(String),
    /// Unsigned integers, including compact ones.
    UInt(u128),
    Int(i128),
    /// 256-bit integers as little-endian bytes.
    Word([u8; 32]),
    /// Arrays, sequences and tuples.
    Seq(Vec<Value>),
    Record(IndexMap<String, Value>),
    /// Content of an `rt::Indirect` field.
    Indirect(Option<Box<Value>>),
}

impl Value {
    pub fn record<'a>(fields: impl IntoIterator<Item = (&'a str, Value)>) -> Self {
        Self::Record(
            fields
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
        )
    }

    pub fn str(value: &str) -> Self {
        Self::Str(value.to_string())
    }

    pub fn indirect(value: Value) -> Self {
        Self::Indirect(Some(Box::new(value)))
    }

    /// Field of a record.
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Self::Record(fields) => fields.get(name),
            _ => None,
        }
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut Value> {
        match self {
            Self::Record(fields) => fields.get_mut(name),
            _ => None,
        }
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Self::Unit => "unit",
            Self::Bool(_) => "bool",
            Self::Char(_) => "char",
            Self::Str(_) => "string",
            Self::UInt(_) => "unsigned integer",
            Self::Int(_) => "signed integer",
            Self::Word(_) => "256-bit word",
            Self::Seq(_) => "sequence",
            Self::Record(_) => "record",
            Self::Indirect(_) => "indirect",
        }
    }
}
