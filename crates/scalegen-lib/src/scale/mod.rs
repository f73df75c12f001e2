//! SCALE codec runtime used by generated code.
//!
//! Generated modules import this as `rt` and implement [`Encode`], [`Blank`]
//! and [`Decode`] for every declaration. Encoding only reads the value;
//! decoding writes into an existing value, which is why every decodable type
//! also provides a [`Blank`] starting point.

mod compact;
mod envelope;
mod impls;
mod types;

#[cfg(test)]
mod envelope_tests;

pub use compact::{decode_compact, encode_compact};
pub use envelope::{Call, Hasher, StorageKey};
pub use types::{I128, I256, Indirect, U128, U256, UCompact};

/// Errors raised by encoding and decoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Encoding a variant value with no case flag set.
    #[error("no variant selected for {0}")]
    NoVariantSelected(String),

    #[error("unrecognized variant index {index} for {type_name}")]
    UnrecognizedVariant { type_name: String, index: u8 },

    #[error("unexpected end of input: {needed} more bytes needed, {remaining} left")]
    UnexpectedEof { needed: usize, remaining: usize },

    #[error("invalid bool byte {0:#04x}")]
    InvalidBool(u8),

    #[error("invalid char scalar {0:#x}")]
    InvalidChar(u32),

    #[error("string is not valid utf-8")]
    InvalidUtf8,

    #[error("compact value does not fit in {0} bits")]
    CompactOverflow(u32),

    #[error("encoded call has {0} bytes, expected at least 2")]
    TruncatedCall(usize),

    #[error("{0} holds no value")]
    EmptyIndirect(String),

    #[error("{0} bytes left after decoding")]
    TrailingInput(usize),

    #[error("expected {expected}, found {found}")]
    ValueMismatch { expected: String, found: String },

    #[error("expected {expected} elements, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("type {0} is not resolved")]
    UnresolvedType(u32),

    /// Map keys need one hasher per argument, or a single hasher for all.
    #[error("storage key {item} has {hashers} hashers for {args} arguments")]
    HasherMismatch {
        item: String,
        hashers: usize,
        args: usize,
    },
}

/// Read cursor over encoded bytes.
#[derive(Debug, Clone)]
pub struct Input<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Input<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    pub fn read_byte(&mut self) -> Result<u8, Error> {
        let [b] = self.read_array::<1>()?;
        Ok(b)
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], Error> {
        if len > self.remaining() {
            return Err(Error::UnexpectedEof {
                needed: len,
                remaining: self.remaining(),
            });
        }
        let slice = &self.bytes[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], Error> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }
}

/// Types that can be written in SCALE form.
pub trait Encode {
    fn encode_to(&self, out: &mut Vec<u8>) -> Result<(), Error>;

    fn encode(&self) -> Result<Vec<u8>, Error> {
        let mut out = Vec::new();
        self.encode_to(&mut out)?;
        Ok(out)
    }
}

/// Zero value a decode starts from.
///
/// Stands in for `Default`, which large arrays do not implement. Variant
/// declarations are blank when no case flag is set.
pub trait Blank: Sized {
    fn blank() -> Self;
}

/// Types that can be read from SCALE form.
pub trait Decode: Blank {
    /// Overwrite `self` with the value read from `input`.
    fn decode_into(&mut self, input: &mut Input<'_>) -> Result<(), Error>;

    /// Decode a complete value; trailing bytes are an error.
    fn decode(bytes: &[u8]) -> Result<Self, Error> {
        let mut input = Input::new(bytes);
        let mut value = Self::blank();
        value.decode_into(&mut input)?;
        if !input.is_empty() {
            return Err(Error::TrailingInput(input.remaining()));
        }
        Ok(value)
    }
}
