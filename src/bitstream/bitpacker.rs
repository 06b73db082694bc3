use log::error;

/// Packs single bits MSB-first into an output byte buffer, counting every bit written so the
/// logical end of the stream can be recorded separately from the padded physical end.
pub struct BitPacker {
    pub output: Vec<u8>,
    queue: u64,
    q_bits: u8,
    bit_count: usize,
}

impl BitPacker {
    /// Create a new BitPacker with an output buffer of the capacity specified. Call flush()
    /// to push the final partial byte to the buffer before reading the output.
    pub fn new(size: usize) -> Self {
        Self {
            output: Vec::with_capacity(size),
            queue: 0,
            q_bits: 0,
            bit_count: 0,
        }
    }

    /// Internal bitstream write function common to all out.XX functions.
    fn write_stream(&mut self) {
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte); //push the packed byte out
            self.q_bits -= 8; //adjust the count of bits left in the queue
        }
    }

    /// Puts one bit on the stream. true is written as 1.
    pub fn out_bit(&mut self, bit: bool) {
        self.queue <<= 1;
        self.queue |= bit as u64;
        self.q_bits += 1;
        self.bit_count += 1;
        self.write_stream();
    }

    /// Flushes the remaining bits (1-7) from the queue, padding with 0s in the least
    /// signficant bits. Padding is not counted in bit_count().
    pub fn flush(&mut self) {
        if self.q_bits > 0 {
            self.queue <<= 8 - self.q_bits; //pad the queue with zeros
            self.q_bits += 8 - self.q_bits;
            self.write_stream(); // write out all that is left
            if self.q_bits > 0 {
                error!("Stuff left in the BitPacker queue.");
            }
        }
    }

    /// Number of logical bits written so far, excluding padding.
    pub fn bit_count(&self) -> usize {
        self.bit_count
    }

    /// Debugging function to return the number of bytes.bits output so far
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.bit_count / 8, self.bit_count % 8)
    }
}

#[cfg(test)]
mod test {
    use super::BitPacker;

    fn pack(bits: &str) -> BitPacker {
        let mut bp = BitPacker::new(8);
        bits.chars().for_each(|c| bp.out_bit(c == '1'));
        bp.flush();
        bp
    }

    #[test]
    fn full_byte_test() {
        let bp = pack("00100001");
        assert_eq!(bp.output, "!".as_bytes());
        assert_eq!(bp.bit_count(), 8);
    }

    #[test]
    fn padding_test() {
        let bp = pack("1111111111");
        assert_eq!(bp.output, [0b1111_1111, 0b1100_0000]);
        assert_eq!(bp.bit_count(), 10);
        assert_eq!(bp.loc(), "[1.2]");
    }

    #[test]
    fn empty_flush_test() {
        let bp = pack("");
        assert!(bp.output.is_empty());
        assert_eq!(bp.bit_count(), 0);
    }
}
