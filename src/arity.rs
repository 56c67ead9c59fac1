use crate::{PackError, Result};

/// Radix of the n-ary digits stored in a [`BitPacker`](crate::BitPacker).
///
/// Only powers of two are supported so that every digit occupies a whole number of bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Arity {
    arity: u8,
    nbits: u8,
}

impl Arity {
    /// Plain bits, one per digit.
    pub const BINARY: Arity = Arity { arity: 2, nbits: 1 };

    pub fn new(arity: u8) -> Result<Self> {
        if arity < 2 || !arity.is_power_of_two() {
            return Err(PackError::InvalidArity(arity));
        }
        Ok(Self {
            arity,
            nbits: arity.trailing_zeros() as u8,
        })
    }

    pub fn get(self) -> u8 {
        self.arity
    }

    /// Number of bits per digit, `log2(arity)`.
    pub fn bits_per_digit(self) -> u8 {
        self.nbits
    }

    pub(crate) fn mask(self) -> u64 {
        (1u64 << self.nbits) - 1
    }
}

impl Default for Arity {
    fn default() -> Self {
        Self::BINARY
    }
}

impl TryFrom<u8> for Arity {
    type Error = PackError;

    fn try_from(arity: u8) -> Result<Self> {
        Self::new(arity)
    }
}
