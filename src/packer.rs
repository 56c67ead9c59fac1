use std::hash::{Hash, Hasher};

use log::{debug, trace};

use crate::{Arity, PackError, Result, TraceStep};

/// Append-only accumulator that packs bits LSB-first into a byte buffer.
///
/// The buffer always holds exactly `ceil(len / 8)` bytes and every bit of the last byte at or
/// above `len % 8` is zero.
///
/// Equality and hashing only look at the packed bits; the arity is a reading mode, not content.
#[derive(Debug, Clone, Default)]
pub struct BitPacker {
    /// Number of bits appended so far.
    length: usize,
    /// Radix used by `append_nary` / `get_nary`.
    arity: Arity,
    data: Vec<u8>,
}

impl BitPacker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty packer with room for `bits` bits before reallocating.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            length: 0,
            arity: Arity::BINARY,
            data: Vec::with_capacity(bits.div_ceil(8)),
        }
    }

    pub fn with_arity(mut self, arity: Arity) -> Self {
        self.arity = arity;
        self
    }

    /// Adopt `bytes` as the first `length` bits of a new packer.
    ///
    /// Fails unless `bytes` holds exactly `ceil(length / 8)` bytes. Bits past `length` in the last
    /// byte are cleared.
    pub fn from_bytes(mut bytes: Vec<u8>, length: usize) -> Result<Self> {
        if bytes.len() != length.div_ceil(8) {
            return Err(PackError::LengthMismatch {
                bytes: bytes.len(),
                length,
            });
        }
        let rem = Self::bit_pos(length);
        if rem != 0 {
            if let Some(last) = bytes.last_mut() {
                *last &= low_mask(rem);
            }
        }
        debug!("adopted {} bytes as {} bits", bytes.len(), length);
        Ok(Self {
            length,
            arity: Arity::BINARY,
            data: bytes,
        })
    }

    /// Offset of bit `n` within its byte.
    #[inline]
    pub fn bit_pos(n: usize) -> u8 {
        (n % 8) as u8
    }

    /// Index of the byte holding bit `n`.
    #[inline]
    pub fn byte_pos(n: usize) -> usize {
        n / 8
    }

    #[inline]
    pub fn append_bit(&mut self, value: bool) {
        let byte = Self::byte_pos(self.length);
        if byte == self.data.len() {
            self.data.push(0);
            trace!("buffer grew to {} bytes", self.data.len());
        }
        self.data[byte] |= (value as u8) << Self::bit_pos(self.length);
        self.length += 1;
    }

    /// Same as [`append_bit`](Self::append_bit), but reports every intermediate value.
    pub fn append_bit_traced(&mut self, value: bool) -> TraceStep {
        let index = self.length;
        let byte = Self::byte_pos(index);
        let bit_pos = Self::bit_pos(index);
        let before = self.data.get(byte).copied().unwrap_or(0);

        self.append_bit(value);

        TraceStep {
            index,
            value,
            bit_pos,
            before,
            operand: (value as u8) << bit_pos,
            after: self.data[byte],
        }
    }

    /// Append the low `nbits` bits of `value`, least significant first.
    ///
    /// Counts above 64 zero-extend `value`.
    pub fn append_bits(&mut self, value: u64, nbits: u8) {
        for i in 0..nbits {
            self.append_bit(i < 64 && (value >> i) & 1 != 0);
        }
    }

    /// Append every byte as eight bits, least significant first.
    pub fn append_bytes(&mut self, bytes: &[u8]) {
        if Self::bit_pos(self.length) == 0 {
            self.data.extend_from_slice(bytes);
            self.length += bytes.len() * 8;
            return;
        }
        for &b in bytes {
            self.append_bits(u64::from(b), 8);
        }
    }

    pub fn append_packer(&mut self, other: &BitPacker) {
        let full = Self::byte_pos(other.length);
        self.append_bytes(&other.data[..full]);

        let rem = Self::bit_pos(other.length);
        if rem != 0 {
            self.append_bits(u64::from(other.data[full]), rem);
        }
    }

    /// Append zero bits until the length is a multiple of eight.
    pub fn pad_to_byte(&mut self) {
        // The padding bits already exist in the last byte and are zero.
        let rem = Self::bit_pos(self.length);
        if rem != 0 {
            self.length += usize::from(8 - rem);
        }
    }

    /// Overwrite a bit that has already been appended.
    pub fn set_bit(&mut self, index: usize, value: bool) -> Result<()> {
        if index >= self.length {
            return Err(PackError::OutOfRange {
                index,
                length: self.length,
            });
        }

        let mask = 1u8 << Self::bit_pos(index);
        let byte = &mut self.data[Self::byte_pos(index)];
        if value {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }
        Ok(())
    }

    /// Shorten the packer to `length` bits. Has no effect if `length` is not smaller than the
    /// current length.
    pub fn truncate(&mut self, length: usize) {
        if length >= self.length {
            return;
        }
        debug!("truncating from {} to {} bits", self.length, length);

        self.data.truncate(length.div_ceil(8));
        let rem = Self::bit_pos(length);
        if rem != 0 {
            if let Some(last) = self.data.last_mut() {
                *last &= low_mask(rem);
            }
        }
        self.length = length;
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        if index < self.length {
            Some(self.bit(index))
        } else {
            None
        }
    }

    #[inline]
    fn bit(&self, index: usize) -> bool {
        (self.data[Self::byte_pos(index)] >> Self::bit_pos(index)) & 1 != 0
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = bool> + '_ {
        (0..self.length).map(move |i| self.bit(i))
    }

    /// Total number of bits appended.
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.data.clone()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn arity(&self) -> Arity {
        self.arity
    }

    pub fn set_arity(&mut self, arity: Arity) {
        self.arity = arity;
    }

    /// Append one digit in the current arity, using `log2(arity)` bits.
    pub fn append_nary(&mut self, digit: u8) -> Result<()> {
        if digit >= self.arity.get() {
            return Err(PackError::DigitOutOfRange {
                digit,
                arity: self.arity.get(),
            });
        }
        self.append_bits(u64::from(digit), self.arity.bits_per_digit());
        Ok(())
    }

    /// Read the `index`-th digit in the current arity.
    pub fn get_nary(&self, index: usize) -> Option<u8> {
        let nbits = usize::from(self.arity.bits_per_digit());
        let start = index.checked_mul(nbits)?;
        if start.checked_add(nbits)? > self.length {
            return None;
        }

        let mut digit = 0u64;
        for i in 0..nbits {
            digit |= u64::from(self.bit(start + i)) << i;
        }
        debug_assert!(digit <= self.arity.mask());
        Some(digit as u8)
    }

    /// Number of complete digits in the current arity.
    pub fn nary_len(&self) -> usize {
        self.length / usize::from(self.arity.bits_per_digit())
    }
}

/// Mask selecting the `nbits` lowest bits of a byte, `nbits < 8`.
fn low_mask(nbits: u8) -> u8 {
    debug_assert!(nbits < 8);
    (1u8 << nbits) - 1
}

impl PartialEq for BitPacker {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.data == other.data
    }
}

impl Eq for BitPacker {}

impl Hash for BitPacker {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        self.data.hash(state);
    }
}

impl Extend<bool> for BitPacker {
    fn extend<T: IntoIterator<Item = bool>>(&mut self, iter: T) {
        for value in iter {
            self.append_bit(value);
        }
    }
}

impl FromIterator<bool> for BitPacker {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        let mut packer = BitPacker::new();
        packer.extend(iter);
        packer
    }
}
