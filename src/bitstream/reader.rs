use crate::bitmap::BIT_MASK;
use crate::uleb128;

/// Reads bits LSB-first from a byte slice.
///
/// Every read returns `None` without moving the cursor when the slice
/// is exhausted.
pub struct BitReader<'a> {
    bytes: &'a [u8],
    byte_offset: usize,
    /// Bits consumed from the current byte, 0..8.
    bit_offset: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            byte_offset: 0,
            bit_offset: 0,
        }
    }

    /// Reads a single bit.
    #[inline]
    pub fn get_bool(&mut self) -> Option<bool> {
        if self.byte_offset >= self.bytes.len() {
            return None;
        }
        let value = self.bytes[self.byte_offset] & BIT_MASK[self.bit_offset] != 0;
        self.bit_offset += 1;
        if self.bit_offset == 8 {
            self.bit_offset = 0;
            self.byte_offset += 1;
        }
        Some(value)
    }

    /// Undoes the most recent successful [`get_bool`](Self::get_bool).
    pub fn rewind_bool(&mut self) {
        if self.bit_offset == 0 {
            debug_assert!(self.byte_offset > 0);
            self.byte_offset -= 1;
            self.bit_offset = 7;
        } else {
            self.bit_offset -= 1;
        }
    }

    /// Advances to the next byte boundary, then reads one full byte.
    pub fn get_aligned_u8(&mut self) -> Option<u8> {
        let index = self.aligned_offset();
        let value = *self.bytes.get(index)?;
        self.byte_offset = index + 1;
        self.bit_offset = 0;
        Some(value)
    }

    /// Advances to the next byte boundary, then reads a ULEB128 `u32`.
    pub fn get_vlq_int(&mut self) -> Option<u32> {
        let index = self.aligned_offset();
        let (value, consumed) = uleb128::decode(self.bytes.get(index..)?)?;
        self.byte_offset = index + consumed;
        self.bit_offset = 0;
        Some(value)
    }

    #[inline]
    fn aligned_offset(&self) -> usize {
        self.byte_offset + (self.bit_offset != 0) as usize
    }
}
