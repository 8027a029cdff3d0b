//! Byte-level I/O: packing and unpacking of individual bits, aligned
//! bytes and ULEB128 integers over a growable byte buffer.

mod reader;
mod writer;

pub use reader::BitReader;
pub use writer::BitWriter;
