//! Append-only bit packing.
//!
//! This crate accumulates boolean values into a byte buffer, one bit at a time. Bit `i` of the
//! stream is stored in byte `i / 8` at position `i % 8`, least significant bit first:
//!
//! - The buffer only ever grows by one zeroed byte when an append crosses a byte boundary.
//! - Bits past the current length are always zero.
//! - Wider values and n-ary digits are split into bits in the same LSB-first order.
//!
//! ```
//! use bitpacker::BitPacker;
//!
//! let mut packer = BitPacker::new();
//! for i in 0..9 {
//!     packer.append_bit(i % 2 == 0);
//! }
//! assert_eq!(packer.len(), 9);
//! assert_eq!(packer.to_bytes(), vec![0b0101_0101, 0b0000_0001]);
//! ```

mod arity;
mod bounded;
mod error;
mod packer;
mod trace;

pub use arity::Arity;
pub use bounded::BoundedPacker;
pub use error::{PackError, Result};
pub use packer::BitPacker;
pub use trace::TraceStep;
