use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PackError {
    /// A bounded packer would grow past its bit limit.
    #[error("capacity exceeded: {requested} bits requested, limit is {limit}")]
    CapacityExceeded { limit: usize, requested: usize },
    /// A single multi-bit write is limited to the 64 bits of its value.
    #[error("cannot write {0} bits from a 64-bit value")]
    TooManyBits(u8),
    #[error("bit index {index} out of range for length {length}")]
    OutOfRange { index: usize, length: usize },
    /// Arity must be a power of two between 2 and 128.
    #[error("invalid arity {0}")]
    InvalidArity(u8),
    #[error("digit {digit} does not fit arity {arity}")]
    DigitOutOfRange { digit: u8, arity: u8 },
    #[error("{bytes} bytes cannot hold exactly {length} bits")]
    LengthMismatch { bytes: usize, length: usize },
}

pub type Result<T> = std::result::Result<T, PackError>;
