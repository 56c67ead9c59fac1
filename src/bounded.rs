use log::warn;

use crate::{BitPacker, PackError, Result};

/// A [`BitPacker`] that refuses to grow past a fixed number of bits.
///
/// Rejected writes leave the packer untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedPacker {
    inner: BitPacker,
    limit: usize,
}

impl BoundedPacker {
    pub fn new(limit: usize) -> Self {
        Self {
            inner: BitPacker::new(),
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Bits that can still be appended.
    pub fn remaining(&self) -> usize {
        self.limit - self.inner.len()
    }

    fn reserve(&self, nbits: usize) -> Result<()> {
        let requested = self.inner.len().saturating_add(nbits);
        if requested > self.limit {
            warn!(
                "rejecting write of {} bits: {} of {} bits used",
                nbits,
                self.inner.len(),
                self.limit
            );
            return Err(PackError::CapacityExceeded {
                limit: self.limit,
                requested,
            });
        }
        Ok(())
    }

    pub fn try_append_bit(&mut self, value: bool) -> Result<()> {
        self.reserve(1)?;
        self.inner.append_bit(value);
        Ok(())
    }

    pub fn try_append_bits(&mut self, value: u64, nbits: u8) -> Result<()> {
        if nbits > 64 {
            return Err(PackError::TooManyBits(nbits));
        }
        self.reserve(usize::from(nbits))?;
        self.inner.append_bits(value, nbits);
        Ok(())
    }

    pub fn try_append_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.reserve(bytes.len().saturating_mul(8))?;
        self.inner.append_bytes(bytes);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.inner.as_bytes()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.inner.to_bytes()
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        self.inner.get(index)
    }

    pub fn into_inner(self) -> BitPacker {
        self.inner
    }
}

impl AsRef<BitPacker> for BoundedPacker {
    fn as_ref(&self) -> &BitPacker {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_to_limit() {
        let mut packer = BoundedPacker::new(9);
        for i in 0..9 {
            packer.try_append_bit(i % 2 == 0).unwrap();
        }
        assert_eq!(packer.remaining(), 0);
        assert_eq!(packer.to_bytes(), vec![85, 1]);

        assert_eq!(
            packer.try_append_bit(true),
            Err(PackError::CapacityExceeded {
                limit: 9,
                requested: 10
            })
        );
        assert_eq!(packer.len(), 9);
        assert_eq!(packer.to_bytes(), vec![85, 1]);
    }

    #[test]
    fn rejects_whole_write() {
        let mut packer = BoundedPacker::new(12);
        packer.try_append_bits(0b1, 1).unwrap();

        assert!(packer.try_append_bytes(&[0xff, 0xff]).is_err());
        assert!(packer.try_append_bits(u64::MAX, 12).is_err());
        assert_eq!(packer.len(), 1);
        assert_eq!(packer.to_bytes(), vec![1]);

        packer.try_append_bytes(&[0xff]).unwrap();
        assert_eq!(packer.remaining(), 3);
        assert_eq!(packer.get(8), Some(true));
    }

    #[test]
    fn rejects_wide_bit_count() {
        let mut packer = BoundedPacker::new(1000);
        assert_eq!(packer.try_append_bits(1, 65), Err(PackError::TooManyBits(65)));
        assert!(packer.is_empty());

        packer.try_append_bits(u64::MAX, 64).unwrap();
        assert_eq!(packer.len(), 64);
    }

    #[test]
    fn zero_limit() {
        let mut packer = BoundedPacker::new(0);
        assert!(packer.try_append_bit(false).is_err());
        packer.try_append_bytes(&[]).unwrap();
        assert!(packer.is_empty());
        assert!(packer.into_inner().is_empty());
    }
}
