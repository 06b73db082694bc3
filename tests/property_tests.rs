use lzhuff::huffman_coding::huffman::{build_tree, CodeTable};
use lzhuff::tools::freq_count::count_frequency;
use lzhuff::tools::int_codec::{decode_i32, encode_i32};
use lzhuff::{compress_bytes, decompress_bytes, huf_decode, huf_encode, lz_decode, lz_encode};
use lzhuff::{LzhError, Lz77Options};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_int_roundtrip(n in any::<i32>()) {
        prop_assert_eq!(decode_i32(&encode_i32(n)), Some(n));
    }

    #[test]
    fn test_pipeline_roundtrip(input in prop::collection::vec(any::<u8>(), 0..2000)) {
        let packed = compress_bytes(&input, &Lz77Options::default()).unwrap();
        prop_assert_eq!(decompress_bytes(&packed).unwrap(), input);
    }

    #[test]
    fn test_repetitive_roundtrip(
        // A small alphabet gives long repeats for the lz77 stage.
        input in prop::collection::vec(0..4u8, 0..1500),
        window in 1..700usize,
        min_match in 1..20usize,
    ) {
        let opts = Lz77Options::new(window, min_match).unwrap();
        let packed = compress_bytes(&input, &opts).unwrap();
        prop_assert_eq!(decompress_bytes(&packed).unwrap(), input);
    }

    #[test]
    fn test_stage_roundtrips(input in prop::collection::vec(any::<u8>(), 0..1000)) {
        let blocks = lz_encode(&input, &Lz77Options::default()).unwrap();
        prop_assert_eq!(lz_decode(&blocks).unwrap(), input.clone());
        let coded = huf_encode(&input).unwrap();
        prop_assert_eq!(huf_decode(&coded).unwrap(), input);
    }

    #[test]
    fn test_tree_is_reproducible(input in prop::collection::vec(any::<u8>(), 1..500)) {
        let table = count_frequency(&input).unwrap();
        let first = CodeTable::new(&build_tree(&table).unwrap());
        let second = CodeTable::new(&build_tree(&table).unwrap());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_truncation_is_an_error(
        input in prop::collection::vec(any::<u8>(), 1..500),
        cut in 1..64usize,
    ) {
        let packed = compress_bytes(&input, &Lz77Options::default()).unwrap();
        let keep = packed.len().saturating_sub(cut);
        // Any prefix either fails cleanly or, if the cut only removed padding, decodes the input.
        match decompress_bytes(&packed[..keep]) {
            Ok(out) => prop_assert_eq!(out, input),
            Err(e) => {
                let is_malformed = matches!(e, LzhError::MalformedStream { .. });
                prop_assert!(is_malformed);
            }
        }
    }
}
