//! Compact integers: the byte width follows the magnitude.
//!
//! The two low bits of the first byte select the mode:
//! - `00`: single byte, values below 2^6
//! - `01`: two bytes, values below 2^14
//! - `10`: four bytes, values below 2^30
//! - `11`: big-integer mode, the upper six bits hold `byte_count - 4`

use super::{Error, Input};

const SINGLE_BYTE_MAX: u128 = (1 << 6) - 1;
const TWO_BYTE_MAX: u128 = (1 << 14) - 1;
const FOUR_BYTE_MAX: u128 = (1 << 30) - 1;

pub fn encode_compact(value: u128, out: &mut Vec<u8>) {
    match value {
        0..=SINGLE_BYTE_MAX => out.push((value as u8) << 2),
        ..=TWO_BYTE_MAX => out.extend_from_slice(&(((value as u16) << 2) | 0b01).to_le_bytes()),
        ..=FOUR_BYTE_MAX => out.extend_from_slice(&(((value as u32) << 2) | 0b10).to_le_bytes()),
        _ => {
            let bytes = value.to_le_bytes();
            let len = (16 - value.leading_zeros() as usize / 8).max(4);
            out.push((((len - 4) as u8) << 2) | 0b11);
            out.extend_from_slice(&bytes[..len]);
        }
    }
}

pub fn decode_compact(input: &mut Input<'_>) -> Result<u128, Error> {
    let first = input.read_byte()?;
    match first & 0b11 {
        0b00 => Ok(u128::from(first >> 2)),
        0b01 => {
            let second = input.read_byte()?;
            Ok(u128::from(u16::from_le_bytes([first, second]) >> 2))
        }
        0b10 => {
            let rest = input.read_array::<3>()?;
            let raw = u32::from_le_bytes([first, rest[0], rest[1], rest[2]]);
            Ok(u128::from(raw >> 2))
        }
        _ => {
            let len = usize::from(first >> 2) + 4;
            if len > 16 {
                return Err(Error::CompactOverflow(128));
            }
            let mut buf = [0u8; 16];
            buf[..len].copy_from_slice(input.read_bytes(len)?);
            Ok(u128::from_le_bytes(buf))
        }
    }
}

/// Read a compact length prefix.
pub(super) fn decode_len(input: &mut Input<'_>) -> Result<usize, Error> {
    let len = decode_compact(input)?;
    usize::try_from(len).map_err(|_| Error::CompactOverflow(usize::BITS))
}
