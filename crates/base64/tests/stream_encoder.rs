//! Tests for chunked encoding (StreamEncoder).

use proptest::prelude::*;
use rfc4648_base64::{aligned_chunk_size, decode, encode, StreamEncoder, ALPHABET_URL};

fn encode_in_chunks(data: &[u8], chars: Option<&str>, chunk_size: usize) -> String {
    let mut encoder = StreamEncoder::new(data.len(), chars, chunk_size).unwrap();
    for piece in data.chunks(chunk_size) {
        encoder.buffer()[..piece.len()].copy_from_slice(piece);
        encoder.process(piece.len());
    }
    encoder.finalize()
}

#[test]
fn hello_world_any_aligned_chunk() {
    let data = b"Hello, World! This is a test of different chunk sizes.";
    let expected = encode(data, None).unwrap();
    for requested in [1, 16, 1024, 65536] {
        let chunk_size = aligned_chunk_size(requested);
        let encoded = encode_in_chunks(data, None, chunk_size);
        assert_eq!(encoded, expected);
        assert_eq!(decode(&encoded, None).unwrap(), data);
    }
}

#[test]
fn partial_fills_of_a_large_buffer() {
    // The buffer is larger than each fill; only the filled prefix is encoded.
    let data: Vec<u8> = (0..100u8).collect();
    let mut encoder = StreamEncoder::new(data.len(), None, 30).unwrap();
    for piece in data.chunks(9) {
        encoder.buffer()[..piece.len()].copy_from_slice(piece);
        encoder.process(piece.len());
    }
    assert_eq!(encoder.bytes_processed(), 100);
    assert_eq!(encoder.finalize(), encode(&data, None).unwrap());
}

#[test]
fn stale_buffer_contents_are_ignored() {
    let mut encoder = StreamEncoder::new(4, None, 6).unwrap();
    encoder.buffer().copy_from_slice(b"foobar");
    encoder.process(6);
    encoder.buffer()[..1].copy_from_slice(b"!");
    encoder.process(1);
    assert_eq!(encoder.finalize(), encode(b"foobar!", None).unwrap());
}

proptest! {
    #[test]
    fn equivalent_to_single_call(
        data in proptest::collection::vec(any::<u8>(), 1..2048),
        groups in 1usize..64,
    ) {
        let chunk_size = groups * 3;
        prop_assert_eq!(encode_in_chunks(&data, None, chunk_size), encode(&data, None).unwrap());
        prop_assert_eq!(
            encode_in_chunks(&data, Some(ALPHABET_URL), chunk_size),
            encode(&data, Some(ALPHABET_URL)).unwrap()
        );
    }
}
