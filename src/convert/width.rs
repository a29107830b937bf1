use static_assertions::const_assert_eq;
use std::fmt;

use super::{Error, Result};

/// Bits per hexadecimal digit.
pub const NIBBLE_BITS: u32 = 4;

/// Smallest width ever resolved, even for an empty or all-zero batch.
pub const MIN_BITS: u32 = 8;

const_assert_eq!(MIN_BITS % NIBBLE_BITS, 0);

/// Bit width shared by every value of a batch. Always a whole number of nibbles, never below
/// `MIN_BITS`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct BitWidth(u32);

impl BitWidth {
    pub const MIN: BitWidth = BitWidth(MIN_BITS);

    pub fn new(bits: u32) -> Result<Self> {
        if bits < MIN_BITS || bits % NIBBLE_BITS != 0 {
            Err(Error::InvalidWidth(bits))
        } else {
            Ok(Self(bits))
        }
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    /// Whether `value` is within the signed two's-complement range of this width.
    pub fn fits(self, value: i64) -> bool {
        if self.0 >= i64::BITS {
            return true;
        }
        let half = 1i64 << (self.0 - 1);
        (-half..half).contains(&value)
    }
}

impl fmt::Display for BitWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bits", self.0)
    }
}

/// Resolve the width needed to hold every value of `values` in signed two's complement.
pub fn resolve_width(values: &[i64]) -> BitWidth {
    let max_abs = values.iter().map(|v| v.unsigned_abs()).max().unwrap_or(0);

    // Smallest count where 2^(bits - 1) exceeds the magnitude, leaving room for the sign bit.
    let mut threshold: u128 = 1;
    let mut bits: u32 = 1;
    while threshold <= u128::from(max_abs) {
        threshold *= 2;
        bits += 1;
    }

    let rem = bits % NIBBLE_BITS;
    if rem != 0 {
        bits += NIBBLE_BITS - rem;
    }

    BitWidth(bits.max(MIN_BITS))
}
