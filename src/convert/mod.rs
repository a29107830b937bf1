//! Decimal to two's-complement binary and hexadecimal conversion.
//!
//! A batch is converted in three steps: a shared `BitWidth` is resolved once from the whole
//! batch, then every value is encoded to binary at that width and packed into hexadecimal.

use std::fmt;
use thiserror::Error;
use tracing::debug;

mod binary;
mod hex;
mod width;

pub use binary::{encode_twos_complement, BinaryEncoding};
pub use hex::{to_hex, HexEncoding, HexPadding, LEGACY_HEX_DIGITS};
pub use width::{resolve_width, BitWidth, MIN_BITS, NIBBLE_BITS};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Bit string length must be a multiple of 4, instead found length: {0}")]
    AlignmentError(usize),
    #[error("Invalid character in bit string: {0:?}")]
    InvalidBit(char),
    #[error("Bit width must be a multiple of 4 and at least 8, instead found: {0}")]
    InvalidWidth(u32),
    #[error("Value {value} does not fit in {width} bits")]
    ValueExceedsWidth { value: i64, width: u32 },
}

pub type Result<T> = ::std::result::Result<T, Error>;

/// Sign flag carried alongside a binary encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sign {
    NonNegative,
    Negative,
}

impl Sign {
    pub fn of(value: i64) -> Self {
        if value < 0 {
            Self::Negative
        } else {
            Self::NonNegative
        }
    }

    pub fn is_negative(self) -> bool {
        matches!(self, Self::Negative)
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonNegative => write!(f, "0"),
            Self::Negative => write!(f, "1"),
        }
    }
}

/// One converted input value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversionRecord {
    pub value: i64,
    pub binary: BinaryEncoding,
    pub hex: HexEncoding,
}

/// Every record of a batch, in input order, with the width they share.
#[derive(Debug)]
pub struct Conversion {
    pub width: BitWidth,
    pub records: Vec<ConversionRecord>,
}

/// Convert a whole batch of values.
pub fn convert_batch(values: &[i64], padding: HexPadding) -> Result<Conversion> {
    let width = resolve_width(values);
    debug!(width = width.bits(), count = values.len(), "resolved bit width");

    let records = values
        .iter()
        .map(|&value| {
            let (binary, sign) = encode_twos_complement(value, width)?;
            let hex = to_hex(&binary, sign, padding);
            Ok(ConversionRecord { value, binary, hex })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Conversion { width, records })
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Results:")?;
        for (index, record) in self.records.iter().enumerate() {
            writeln!(
                f,
                "{} Decimal: {}, Binary: {}, Hexadecimal: {}",
                index + 1,
                record.value,
                record.binary,
                record.hex
            )?;
        }
        Ok(())
    }
}
