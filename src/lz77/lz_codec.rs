use log::{debug, error, info};

use super::blocks::{Block, BlockReader};
use super::find_match::find_match;
use super::options::Lz77Options;
use crate::error::{LzhError, Result};

/// LZ77 encode a buffer into a stream of literal and reference blocks.
///
/// Bytes with no usable match collect into a literal run, probing again at every position. When
/// a match turns up the run is written (it may be empty), then the reference, and the scan skips
/// past the matched bytes. A run still open at the end of input becomes the final block.
pub fn lz_encode(data: &[u8], opts: &Lz77Options) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(data.len() + data.len() / 64 + 8);
    let mut pos = 0;
    let (mut literals, mut references) = (0_usize, 0_usize);

    while pos < data.len() {
        let start = pos;
        let mut found = find_match(data, pos, opts);
        while found.is_none() {
            pos += 1;
            if pos == data.len() {
                break;
            }
            found = find_match(data, pos, opts);
        }

        Block::Literal(&data[start..pos]).write(&mut out)?;
        literals += 1;

        if !found.is_none() {
            debug!(
                "Reference at {}: {} bytes from {} back",
                pos, found.length, found.jump
            );
            Block::Reference {
                length: found.length,
                jump: found.jump,
            }
            .write(&mut out)?;
            references += 1;
            pos += found.length;
        }
    }

    info!(
        "LZ77 encoded {} bytes into {} bytes ({} literal, {} reference blocks)",
        data.len(),
        out.len(),
        literals,
        references
    );
    Ok(out)
}

/// LZ77 decode a block stream written by lz_encode.
pub fn lz_decode(data: &[u8]) -> Result<Vec<u8>> {
    let mut out: Vec<u8> = Vec::with_capacity(data.len() * 2);
    let mut reader = BlockReader::new(data);
    let mut at = reader.position();

    while let Some(block) = reader.next() {
        match block? {
            Block::Literal(bytes) => out.extend_from_slice(bytes),
            Block::Reference { length, jump } => {
                if jump > out.len() {
                    error!(
                        "Reference at {} jumps {} back with only {} bytes decoded",
                        at,
                        jump,
                        out.len()
                    );
                    return Err(LzhError::malformed("match jump", at));
                }
                // The source may overlap what this copy is producing, so go a byte at a time.
                let from = out.len() - jump;
                for i in from..from + length {
                    let byte = out[i];
                    out.push(byte);
                }
            }
        }
        at = reader.position();
    }

    info!("LZ77 decoded {} bytes into {} bytes", data.len(), out.len());
    Ok(out)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tools::int_codec::encode_i32;

    fn encode(data: &[u8]) -> Vec<u8> {
        lz_encode(data, &Lz77Options::default()).unwrap()
    }

    #[test]
    fn empty_test() {
        assert!(encode(&[]).is_empty());
        assert!(lz_decode(&[]).unwrap().is_empty());
    }

    #[test]
    fn literal_only_test() {
        let out = encode(b"hello");
        assert_eq!(out, [0, 0, 0, 5, b'h', b'e', b'l', b'l', b'o']);
        assert_eq!(lz_decode(&out).unwrap(), b"hello");
    }

    #[test]
    fn nine_byte_reference_test() {
        let data = b"abcdefghiabcdefghi";
        let out = encode(data);
        let mut expected = vec![0, 0, 0, 9];
        expected.extend_from_slice(b"abcdefghi");
        expected.extend_from_slice(&encode_i32(-9));
        expected.extend_from_slice(&encode_i32(9));
        assert_eq!(out, expected);
        assert_eq!(lz_decode(&out).unwrap(), data);
    }

    #[test]
    fn eight_byte_repeat_stays_literal_test() {
        let data = b"abcdefghabcdefgh";
        let out = encode(data);
        assert_eq!(&out[..4], &encode_i32(16));
        assert_eq!(out.len(), 20);
    }

    #[test]
    fn back_to_back_references_test() {
        // The second reference starts right after the first, so an empty literal sits between.
        let mut data = b"0123456789".to_vec();
        data.extend_from_slice(b"0123456789");
        data.extend_from_slice(b"0123456789");
        let out = encode(&data);
        let mut expected = vec![0, 0, 0, 10];
        expected.extend_from_slice(b"0123456789");
        expected.extend_from_slice(&encode_i32(-10));
        expected.extend_from_slice(&encode_i32(10));
        expected.extend_from_slice(&encode_i32(0));
        expected.extend_from_slice(&encode_i32(-10));
        expected.extend_from_slice(&encode_i32(20));
        assert_eq!(out, expected);
        assert_eq!(lz_decode(&out).unwrap(), data);
    }

    #[test]
    fn trailing_literal_test() {
        let data = b"abcdefghiabcdefghi-tail";
        let out = encode(data);
        assert_eq!(&out[out.len() - 9..], &[0, 0, 0, 5, b'-', b't', b'a', b'i', b'l']);
        assert_eq!(lz_decode(&out).unwrap(), data);
    }

    #[test]
    fn overlapping_reference_test() {
        let mut stream = vec![0, 0, 0, 3];
        stream.extend_from_slice(b"ab ");
        stream.extend_from_slice(&encode_i32(-12));
        stream.extend_from_slice(&encode_i32(3));
        assert_eq!(lz_decode(&stream).unwrap(), b"ab ab ab ab ab ");
    }

    #[test]
    fn jump_before_start_test() {
        let mut stream = vec![0, 0, 0, 2, b'a', b'b'];
        stream.extend_from_slice(&encode_i32(-4));
        stream.extend_from_slice(&encode_i32(3));
        assert!(matches!(
            lz_decode(&stream),
            Err(LzhError::MalformedStream { offset: 6, .. })
        ));
    }

    #[test]
    fn long_reference_grows_output_test() {
        let mut stream = vec![0, 0, 0, 1, b'z'];
        stream.extend_from_slice(&encode_i32(-100_000));
        stream.extend_from_slice(&encode_i32(1));
        let out = lz_decode(&stream).unwrap();
        assert_eq!(out.len(), 100_001);
        assert!(out.iter().all(|&b| b == b'z'));
    }

    #[test]
    fn huge_reference_with_bad_jump_test() {
        // The jump is checked before any of the claimed length is produced.
        let mut stream = vec![0, 0, 0, 1, b'z'];
        stream.extend_from_slice(&encode_i32(i32::MIN + 1));
        stream.extend_from_slice(&encode_i32(2));
        assert!(matches!(
            lz_decode(&stream),
            Err(LzhError::MalformedStream { offset: 5, .. })
        ));
    }

    #[test]
    fn repetitive_roundtrip_test() {
        let data: Vec<u8> = b"the rain in spain falls mainly on the plain. "
            .iter()
            .cycle()
            .take(3000)
            .copied()
            .collect();
        let out = encode(&data);
        assert!(out.len() < data.len() / 4);
        assert_eq!(lz_decode(&out).unwrap(), data);
    }

    #[test]
    fn small_window_roundtrip_test() {
        let opts = Lz77Options::new(32, 4).unwrap();
        let data: Vec<u8> = (0..2000_u32).map(|i| (i % 37 + i / 500) as u8).collect();
        let out = lz_encode(&data, &opts).unwrap();
        assert_eq!(lz_decode(&out).unwrap(), data);
    }
}
