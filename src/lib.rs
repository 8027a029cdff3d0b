//! Run-length / bit-packed hybrid encoding for sequences of booleans.
//!
//! Long uniform runs are stored as a repetition count plus the repeated
//! value; short or mixed stretches are stored as bit-packed literals.
//! Every run starts on a byte boundary with a ULEB128 indicator whose
//! least significant bit selects the run kind:
//!
//! ```text
//! stream       := run*
//! run          := literal-run | repeated-run
//! literal-run  := vlq(num_groups << 1 | 1) <num_groups bytes, LSB first>
//! repeated-run := vlq(num_repetitions << 1) <value byte, 0x00 or 0x01>
//! ```
//!
//! Literal runs always carry a multiple of 8 values (one group = one
//! byte) so they end on a byte boundary regardless of where they start.
//! The encoder keeps `num_groups` below 128, so the indicator byte it
//! reserves up front never needs to grow.
//!
//! [`RleEncoder`] and [`RleDecoder`] are the streaming entry points;
//! [`runs::Decoder`] offers a zero-copy view of the framed runs of an
//! encoded byte slice.

mod bitmap;
pub mod bitstream;
mod decoder;
mod encoder;
pub mod error;
pub mod runs;
pub mod uleb128;

pub use bitmap::BitmapIter;
pub use bitstream::{BitReader, BitWriter};
pub use decoder::RleDecoder;
pub use encoder::RleEncoder;

/// Returns the ceil of value/8
#[inline]
pub fn ceil8(value: usize) -> usize {
    value / 8 + ((value % 8 != 0) as usize)
}
