//! Codec implementations for standard types.

use super::compact::{decode_len, encode_compact};
use super::{Blank, Decode, Encode, Error, Input};

macro_rules! int_impls {
    ($($ty:ty),*) => {$(
        impl Encode for $ty {
            fn encode_to(&self, out: &mut Vec<u8>) -> Result<(), Error> {
                out.extend_from_slice(&self.to_le_bytes());
                Ok(())
            }
        }

        impl Blank for $ty {
            fn blank() -> Self {
                0
            }
        }

        impl Decode for $ty {
            fn decode_into(&mut self, input: &mut Input<'_>) -> Result<(), Error> {
                *self = <$ty>::from_le_bytes(input.read_array()?);
                Ok(())
            }
        }
    )*};
}

int_impls!(u8, u16, u32, u64, i8, i16, i32, i64);

impl Encode for bool {
    fn encode_to(&self, out: &mut Vec<u8>) -> Result<(), Error> {
        out.push(u8::from(*self));
        Ok(())
    }
}

impl Blank for bool {
    fn blank() -> Self {
        false
    }
}

impl Decode for bool {
    fn decode_into(&mut self, input: &mut Input<'_>) -> Result<(), Error> {
        *self = match input.read_byte()? {
            0 => false,
            1 => true,
            b => return Err(Error::InvalidBool(b)),
        };
        Ok(())
    }
}

// Chars travel as their 32-bit scalar value.
impl Encode for char {
    fn encode_to(&self, out: &mut Vec<u8>) -> Result<(), Error> {
        u32::from(*self).encode_to(out)
    }
}

impl Blank for char {
    fn blank() -> Self {
        '\0'
    }
}

impl Decode for char {
    fn decode_into(&mut self, input: &mut Input<'_>) -> Result<(), Error> {
        let raw = u32::from_le_bytes(input.read_array()?);
        *self = char::from_u32(raw).ok_or(Error::InvalidChar(raw))?;
        Ok(())
    }
}

impl Encode for str {
    fn encode_to(&self, out: &mut Vec<u8>) -> Result<(), Error> {
        encode_compact(self.len() as u128, out);
        out.extend_from_slice(self.as_bytes());
        Ok(())
    }
}

impl Encode for String {
    fn encode_to(&self, out: &mut Vec<u8>) -> Result<(), Error> {
        self.as_str().encode_to(out)
    }
}

impl Blank for String {
    fn blank() -> Self {
        String::new()
    }
}

impl Decode for String {
    fn decode_into(&mut self, input: &mut Input<'_>) -> Result<(), Error> {
        let len = decode_len(input)?;
        let bytes = input.read_bytes(len)?;
        *self = std::str::from_utf8(bytes)
            .map_err(|_| Error::InvalidUtf8)?
            .to_string();
        Ok(())
    }
}

impl<T: Encode> Encode for [T] {
    fn encode_to(&self, out: &mut Vec<u8>) -> Result<(), Error> {
        encode_compact(self.len() as u128, out);
        self.iter().try_for_each(|item| item.encode_to(out))
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode_to(&self, out: &mut Vec<u8>) -> Result<(), Error> {
        self.as_slice().encode_to(out)
    }
}

impl<T> Blank for Vec<T> {
    fn blank() -> Self {
        Vec::new()
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode_into(&mut self, input: &mut Input<'_>) -> Result<(), Error> {
        let len = decode_len(input)?;
        // Every element takes at least one byte, except zero-sized ones.
        let mut items = Vec::with_capacity(len.min(input.remaining()));
        for _ in 0..len {
            let mut item = T::blank();
            item.decode_into(input)?;
            items.push(item);
        }
        *self = items;
        Ok(())
    }
}

// Fixed-size arrays carry no length prefix.
impl<T: Encode, const N: usize> Encode for [T; N] {
    fn encode_to(&self, out: &mut Vec<u8>) -> Result<(), Error> {
        self.iter().try_for_each(|item| item.encode_to(out))
    }
}

impl<T: Blank, const N: usize> Blank for [T; N] {
    fn blank() -> Self {
        std::array::from_fn(|_| T::blank())
    }
}

impl<T: Decode, const N: usize> Decode for [T; N] {
    fn decode_into(&mut self, input: &mut Input<'_>) -> Result<(), Error> {
        self.iter_mut().try_for_each(|item| item.decode_into(input))
    }
}

impl<T: Encode + ?Sized> Encode for Box<T> {
    fn encode_to(&self, out: &mut Vec<u8>) -> Result<(), Error> {
        (**self).encode_to(out)
    }
}

impl<T: Blank> Blank for Box<T> {
    fn blank() -> Self {
        Box::new(T::blank())
    }
}

impl<T: Decode> Decode for Box<T> {
    fn decode_into(&mut self, input: &mut Input<'_>) -> Result<(), Error> {
        (**self).decode_into(input)
    }
}

impl<T: Encode + ?Sized> Encode for &T {
    fn encode_to(&self, out: &mut Vec<u8>) -> Result<(), Error> {
        (**self).encode_to(out)
    }
}

impl Encode for () {
    fn encode_to(&self, _out: &mut Vec<u8>) -> Result<(), Error> {
        Ok(())
    }
}

impl Blank for () {
    fn blank() -> Self {}
}

impl Decode for () {
    fn decode_into(&mut self, _input: &mut Input<'_>) -> Result<(), Error> {
        Ok(())
    }
}
