//! Runtime types with no native counterpart.

use std::any::type_name;

use super::compact::{decode_compact, encode_compact};
use super::{Blank, Decode, Encode, Error, Input};

/// Unsigned integer in compact form.
///
/// Shared by every compact field regardless of its declared width; the wire
/// width only depends on the value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UCompact(pub u128);

impl Encode for UCompact {
    fn encode_to(&self, out: &mut Vec<u8>) -> Result<(), Error> {
        encode_compact(self.0, out);
        Ok(())
    }
}

impl Blank for UCompact {
    fn blank() -> Self {
        Self(0)
    }
}

impl Decode for UCompact {
    fn decode_into(&mut self, input: &mut Input<'_>) -> Result<(), Error> {
        self.0 = decode_compact(input)?;
        Ok(())
    }
}

impl From<u64> for UCompact {
    fn from(value: u64) -> Self {
        Self(u128::from(value))
    }
}

macro_rules! wide_int {
    ($(#[$meta:meta])* $name:ident($inner:ty)) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub $inner);

        impl Encode for $name {
            fn encode_to(&self, out: &mut Vec<u8>) -> Result<(), Error> {
                out.extend_from_slice(&self.0.to_le_bytes());
                Ok(())
            }
        }

        impl Blank for $name {
            fn blank() -> Self {
                Self(0)
            }
        }

        impl Decode for $name {
            fn decode_into(&mut self, input: &mut Input<'_>) -> Result<(), Error> {
                self.0 = <$inner>::from_le_bytes(input.read_array()?);
                Ok(())
            }
        }
    };
}

wide_int!(
    /// 128-bit unsigned integer, 16 bytes little-endian.
    U128(u128)
);
wide_int!(
    /// 128-bit signed integer, 16 bytes little-endian.
    I128(i128)
);

macro_rules! word {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub [u8; 32]);

        impl Default for $name {
            fn default() -> Self {
                Self([0; 32])
            }
        }

        impl Encode for $name {
            fn encode_to(&self, out: &mut Vec<u8>) -> Result<(), Error> {
                out.extend_from_slice(&self.0);
                Ok(())
            }
        }

        impl Blank for $name {
            fn blank() -> Self {
                Self::default()
            }
        }

        impl Decode for $name {
            fn decode_into(&mut self, input: &mut Input<'_>) -> Result<(), Error> {
                self.0 = input.read_array()?;
                Ok(())
            }
        }
    };
}

word!(
    /// 256-bit unsigned integer as 32 little-endian bytes.
    U256
);
word!(
    /// 256-bit two's complement integer as 32 little-endian bytes.
    I256
);

/// Heap indirection for fields the source schema boxed.
///
/// Blank is empty rather than a blank `T`, so a type that reaches itself
/// through this field still has a finite blank value. Encoding an empty
/// indirection is an error; decoding always fills it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Indirect<T>(pub Option<Box<T>>);

impl<T> Indirect<T> {
    pub fn new(value: T) -> Self {
        Self(Some(Box::new(value)))
    }

    pub fn get(&self) -> Option<&T> {
        self.0.as_deref()
    }
}

impl<T> Default for Indirect<T> {
    fn default() -> Self {
        Self(None)
    }
}

impl<T> From<T> for Indirect<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Encode> Encode for Indirect<T> {
    fn encode_to(&self, out: &mut Vec<u8>) -> Result<(), Error> {
        match &self.0 {
            Some(value) => value.encode_to(out),
            None => Err(Error::EmptyIndirect(type_name::<Self>().to_string())),
        }
    }
}

impl<T> Blank for Indirect<T> {
    fn blank() -> Self {
        Self(None)
    }
}

impl<T: Decode> Decode for Indirect<T> {
    fn decode_into(&mut self, input: &mut Input<'_>) -> Result<(), Error> {
        let mut value = Box::new(T::blank());
        value.decode_into(input)?;
        self.0 = Some(value);
        Ok(())
    }
}
