//! Call and storage-key envelopes built by generated pallet helpers.

use std::fmt;

use blake2::Blake2b;
use blake2::digest::Digest;
use blake2::digest::consts::{U16, U32};
use twox_hash::XxHash64;

use super::{Blank, Decode, Encode, Error, Input};

/// An encoded extrinsic call: pallet index, method index, argument bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Call {
    pub section_index: u8,
    pub method_index: u8,
    pub args: Vec<u8>,
}

impl Call {
    pub fn new(section_index: u8, method_index: u8) -> Self {
        Self {
            section_index,
            method_index,
            args: Vec::new(),
        }
    }

    /// Split the encoding of a runtime call value into its envelope.
    pub fn from_encoded(encoded: &[u8]) -> Result<Self, Error> {
        match encoded {
            [section_index, method_index, args @ ..] => Ok(Self {
                section_index: *section_index,
                method_index: *method_index,
                args: args.to_vec(),
            }),
            _ => Err(Error::TruncatedCall(encoded.len())),
        }
    }

    /// Append one encoded argument.
    pub fn push_arg<T: Encode + ?Sized>(&mut self, arg: &T) -> Result<(), Error> {
        arg.encode_to(&mut self.args)
    }
}

impl Encode for Call {
    fn encode_to(&self, out: &mut Vec<u8>) -> Result<(), Error> {
        out.push(self.section_index);
        out.push(self.method_index);
        out.extend_from_slice(&self.args);
        Ok(())
    }
}

impl Blank for Call {
    fn blank() -> Self {
        Self::default()
    }
}

impl Decode for Call {
    /// Consumes the rest of the input as argument bytes.
    fn decode_into(&mut self, input: &mut Input<'_>) -> Result<(), Error> {
        self.section_index = input.read_byte()?;
        self.method_index = input.read_byte()?;
        self.args = input.read_bytes(input.remaining())?.to_vec();
        Ok(())
    }
}

/// Hashing applied to one storage map key before it joins the final key.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hasher {
    Blake2_128,
    Blake2_256,
    Blake2_128Concat,
    Twox128,
    Twox256,
    Twox64Concat,
    Identity,
}

impl Hasher {
    /// Whether the raw key bytes follow the hash, making the key iterable.
    pub fn is_concat(self) -> bool {
        matches!(
            self,
            Self::Blake2_128Concat | Self::Twox64Concat | Self::Identity
        )
    }
}

impl Hasher {
    /// Hash one encoded key argument. Concat hashers append the raw bytes.
    pub fn hash(self, data: &[u8]) -> Vec<u8> {
        let mut out = match self {
            Self::Blake2_128 | Self::Blake2_128Concat => Blake2b::<U16>::digest(data).to_vec(),
            Self::Blake2_256 => Blake2b::<U32>::digest(data).to_vec(),
            Self::Twox128 => twox(data, 2),
            Self::Twox256 => twox(data, 4),
            Self::Twox64Concat => twox(data, 1),
            Self::Identity => Vec::new(),
        };
        if self.is_concat() {
            out.extend_from_slice(data);
        }
        out
    }
}

/// xxHash64 with seeds `0..lanes`, each lane little-endian.
fn twox(data: &[u8], lanes: u64) -> Vec<u8> {
    (0..lanes)
        .flat_map(|seed| XxHash64::oneshot(seed, data).to_le_bytes())
        .collect()
}

impl fmt::Display for Hasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Storage key parts: prefix, item, and the encoded map key arguments.
/// [`StorageKey::to_bytes`] builds the state key a node is queried with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKey {
    pub prefix: String,
    pub item: String,
    pub hashers: Vec<Hasher>,
    pub args: Vec<Vec<u8>>,
}

impl StorageKey {
    pub fn new(prefix: &str, item: &str, hashers: &[Hasher]) -> Self {
        Self {
            prefix: prefix.to_string(),
            item: item.to_string(),
            hashers: hashers.to_vec(),
            args: Vec::new(),
        }
    }

    pub fn push_arg<T: Encode + ?Sized>(&mut self, arg: &T) -> Result<(), Error> {
        self.args.push(arg.encode()?);
        Ok(())
    }

    /// `twox128(prefix) ++ twox128(item)` followed by each argument hashed
    /// with its hasher. A single hasher covers all arguments together.
    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        let mut out = Hasher::Twox128.hash(self.prefix.as_bytes());
        out.extend(Hasher::Twox128.hash(self.item.as_bytes()));
        match (self.hashers.as_slice(), self.args.len()) {
            (_, 0) => {}
            ([hasher], _) => out.extend(hasher.hash(&self.args.concat())),
            (hashers, args) if hashers.len() == args => {
                for (hasher, arg) in hashers.iter().zip(&self.args) {
                    out.extend(hasher.hash(arg));
                }
            }
            (hashers, args) => {
                return Err(Error::HasherMismatch {
                    item: format!("{}.{}", self.prefix, self.item),
                    hashers: hashers.len(),
                    args,
                });
            }
        }
        Ok(out)
    }
}
