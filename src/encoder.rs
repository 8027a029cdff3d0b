use crate::bitstream::BitWriter;
use crate::ceil8;

/// Streaming encoder producing the hybrid wire format.
///
/// Incoming values are buffered eight at a time. Once the lookahead
/// fills, the eight values either extend the bit-packed literal run in
/// progress or, when they all repeat the tracked value, are folded into
/// a repeated run. Eight is the break-even point for one-bit values: a
/// repeated run and a literal group both cost two bytes there, and
/// every repetition past eight is free.
pub struct RleEncoder<'a> {
    bit_writer: BitWriter<'a>,
    /// Lookahead of values not yet committed to either run kind.
    buffered_values: [bool; 8],
    num_buffered_values: usize,
    /// The last value seen and how many times in a row it has appeared,
    /// counting occurrences still sitting in the lookahead.
    current_value: bool,
    repeat_count: u32,
    /// Values already flushed into the in-progress literal run; always
    /// a multiple of 8. Excludes the lookahead.
    literal_count: u32,
    /// Buffer index reserved for the in-progress literal run's
    /// indicator byte.
    literal_indicator_byte: Option<usize>,
}

impl<'a> RleEncoder<'a> {
    /// Creates an encoder writing into `buffer`, discarding any
    /// previous content.
    pub fn new(buffer: &'a mut Vec<u8>) -> Self {
        Self {
            bit_writer: BitWriter::new(buffer),
            buffered_values: [false; 8],
            num_buffered_values: 0,
            current_value: false,
            repeat_count: 0,
            literal_count: 0,
            literal_indicator_byte: None,
        }
    }

    /// Appends one value.
    #[inline]
    pub fn put(&mut self, value: bool) {
        self.put_run(value, 1)
    }

    /// Appends `run_length` copies of `value`. Produces output
    /// byte-identical to `run_length` single [`put`](Self::put) calls.
    pub fn put_run(&mut self, value: bool, run_length: usize) {
        // TODO(perf): once repeat_count exceeds 8 the remainder of the
        // run can be added in one step instead of looping per value.
        for _ in 0..run_length {
            if value == self.current_value {
                self.repeat_count += 1;
                if self.repeat_count > 8 {
                    // Continuation of a run already long enough to be
                    // encoded as repeated; the lookahead stays empty.
                    continue;
                }
            } else {
                if self.repeat_count >= 8 {
                    debug_assert_eq!(self.literal_count, 0);
                    self.flush_repeated_run();
                }
                self.repeat_count = 1;
                self.current_value = value;
            }

            self.buffered_values[self.num_buffered_values] = value;
            self.num_buffered_values += 1;
            if self.num_buffered_values == 8 {
                debug_assert_eq!(self.literal_count % 8, 0);
                self.flush_buffered_values(false);
            }
        }
    }

    /// Closes any pending run and returns the total number of bytes
    /// written. The encoder can keep encoding afterwards; the next
    /// value starts a new run.
    pub fn flush(&mut self) -> usize {
        if self.literal_count > 0 || self.repeat_count > 0 || self.num_buffered_values > 0 {
            let all_repeat = self.literal_count == 0
                && (self.repeat_count as usize == self.num_buffered_values
                    || self.num_buffered_values == 0);
            if self.repeat_count > 0 && all_repeat {
                self.flush_repeated_run();
            } else {
                self.literal_count += self.num_buffered_values as u32;
                self.flush_literal_run(true);
                self.repeat_count = 0;
            }
        }
        debug_assert_eq!(self.num_buffered_values, 0);
        debug_assert_eq!(self.literal_count, 0);
        debug_assert_eq!(self.repeat_count, 0);
        self.bit_writer.finish()
    }

    /// Resets the encoder and the underlying buffer to their initial
    /// state.
    pub fn clear(&mut self) {
        self.current_value = false;
        self.repeat_count = 0;
        self.num_buffered_values = 0;
        self.literal_count = 0;
        self.literal_indicator_byte = None;
        self.bit_writer.clear();
    }

    /// The encoded bytes so far.
    #[inline]
    pub fn buffer(&self) -> &[u8] {
        self.bit_writer.buffer()
    }

    /// Number of bytes written so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.bit_writer.bytes_written()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Decides what the eight buffered values are part of: a repeated
    /// run long enough to stand on its own, or eight more literals.
    fn flush_buffered_values(&mut self, done: bool) {
        if self.repeat_count >= 8 {
            // The buffered values belong to the repeated run in
            // progress; they must not be flushed out as literals.
            self.num_buffered_values = 0;
            if self.literal_count != 0 {
                // The literal bits preceding the repeated run are all in
                // the buffer already; only its indicator is outstanding.
                debug_assert_eq!(self.literal_count % 8, 0);
                debug_assert_eq!(self.repeat_count, 8);
                self.flush_literal_run(true);
            }
            debug_assert_eq!(self.literal_count, 0);
            return;
        }

        self.literal_count += self.num_buffered_values as u32;
        let num_groups = ceil8(self.literal_count as usize);
        if num_groups + 1 >= (1 << 6) {
            // The reserved indicator byte cannot count many more
            // groups; close this literal run and start a fresh one.
            debug_assert!(self.literal_indicator_byte.is_some());
            self.flush_literal_run(true);
        } else {
            self.flush_literal_run(done);
        }
        self.repeat_count = 0;
    }

    /// Writes the buffered values as bit-packed literals. If
    /// `update_indicator_byte`, the literal run is complete and its
    /// indicator byte is patched with the final group count.
    fn flush_literal_run(&mut self, update_indicator_byte: bool) {
        let indicator_byte = match self.literal_indicator_byte {
            Some(index) => index,
            None => {
                let index = self.bit_writer.reserve_byte();
                self.literal_indicator_byte = Some(index);
                index
            }
        };

        for i in 0..self.num_buffered_values {
            self.bit_writer.put_bool(self.buffered_values[i]);
        }
        self.num_buffered_values = 0;

        if update_indicator_byte {
            let num_groups = ceil8(self.literal_count as usize);
            assert!(num_groups < 128, "literal indicator overflows one byte");
            let indicator_value = ((num_groups as u8) << 1) | 1;
            self.bit_writer.set_byte(indicator_byte, indicator_value);
            self.literal_indicator_byte = None;
            self.literal_count = 0;
        }
    }

    fn flush_repeated_run(&mut self) {
        debug_assert!(self.repeat_count > 0);
        // The lsb of 0 marks a repeated run.
        let indicator_value = self.repeat_count << 1;
        self.bit_writer.put_vlq_int(indicator_value);
        self.bit_writer.put_aligned(self.current_value as u8);
        self.num_buffered_values = 0;
        self.repeat_count = 0;
    }
}
