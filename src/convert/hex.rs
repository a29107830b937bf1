use std::fmt;

use super::binary::BinaryEncoding;
use super::width::NIBBLE_BITS;
use super::Sign;

/// Display length of negative values under `HexPadding::Legacy`.
pub const LEGACY_HEX_DIGITS: usize = 10;

static HEX_DIGITS: [u8; 16] = *b"0123456789ABCDEF";

/// How far negative values are sign-extended with `F` digits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HexPadding {
    /// One digit per nibble of the encoded width.
    #[default]
    Width,
    /// At least `LEGACY_HEX_DIGITS` digits, whatever the width.
    Legacy,
}

impl HexPadding {
    fn digits(self, bits: &BinaryEncoding) -> usize {
        match self {
            Self::Width => bits.len() / NIBBLE_BITS as usize,
            Self::Legacy => LEGACY_HEX_DIGITS,
        }
    }
}

/// Uppercase hexadecimal digits, most significant first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HexEncoding(String);

impl HexEncoding {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pack a binary encoding into hexadecimal, one digit per nibble.
pub fn to_hex(bits: &BinaryEncoding, sign: Sign, padding: HexPadding) -> HexEncoding {
    let mut digits: String = bits
        .as_str()
        .as_bytes()
        .chunks_exact(NIBBLE_BITS as usize)
        .map(|nibble| {
            let index = nibble.iter().fold(0, |acc, &bit| (acc << 1) | usize::from(bit - b'0'));
            char::from(HEX_DIGITS[index])
        })
        .collect();

    if sign.is_negative() {
        let target = padding.digits(bits);
        if digits.len() < target {
            digits.insert_str(0, &"F".repeat(target - digits.len()));
        }
    }

    HexEncoding(digits)
}
