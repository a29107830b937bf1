use std::fmt;

use super::width::{BitWidth, NIBBLE_BITS};
use super::{Error, Result, Sign};

/// Fixed-length string of `'0'`/`'1'` characters, most significant bit first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryEncoding(String);

impl BinaryEncoding {
    /// Parse a bit string produced elsewhere. Must be non-empty and nibble-aligned.
    pub fn parse(bits: &str) -> Result<Self> {
        if let Some(c) = bits.chars().find(|&c| c != '0' && c != '1') {
            return Err(Error::InvalidBit(c));
        }
        if bits.is_empty() || bits.len() % NIBBLE_BITS as usize != 0 {
            return Err(Error::AlignmentError(bits.len()));
        }
        Ok(Self(bits.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for BinaryEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Flip every bit, then add one, carrying from the least significant bit.
fn negate(bits: &mut [u8]) {
    for bit in bits.iter_mut() {
        *bit = if *bit == b'0' { b'1' } else { b'0' };
    }
    for bit in bits.iter_mut().rev() {
        if *bit == b'0' {
            *bit = b'1';
            return;
        }
        *bit = b'0';
    }
}

/// Encode `value` in two's complement at exactly `width` bits.
pub fn encode_twos_complement(value: i64, width: BitWidth) -> Result<(BinaryEncoding, Sign)> {
    if !width.fits(value) {
        return Err(Error::ValueExceedsWidth {
            value,
            width: width.bits(),
        });
    }

    let sign = Sign::of(value);
    let padded = format!("{:0>width$b}", value.unsigned_abs(), width = width.bits() as usize);
    let mut bits = padded.into_bytes();
    if sign.is_negative() {
        negate(&mut bits);
    }

    let bits = bits.into_iter().map(char::from).collect();
    Ok((BinaryEncoding(bits), sign))
}
