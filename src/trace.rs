use std::fmt;

/// Intermediate values of a single [`append_bit`](crate::BitPacker::append_bit) call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceStep {
    /// Packer length before the append, i.e. the index of the new bit.
    pub index: usize,
    pub value: bool,
    pub bit_pos: u8,
    /// Target byte before the append (zero for a freshly allocated byte).
    pub before: u8,
    /// `value << bit_pos`
    pub operand: u8,
    pub after: u8,
}

impl fmt::Display for TraceStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(byte=b:{:08b},d:{:02}) |= ((v={}) << (bit_pos(length={})={}) = rhs=b:{:08b},d:{:02}) = (byte=b:{:08b},d:{:02})",
            self.before,
            self.before,
            self.value as u8,
            self.index,
            self.bit_pos,
            self.operand,
            self.operand,
            self.after,
            self.after,
        )
    }
}
