use argio::args::{Args, ArgsDecodeError};
use argio::constants::U32_SIZE;
use rand::Rng;

#[test]
fn u32_round_trip_matches_wire_bytes() {
    let mut args = Args::new();
    args.add_u32(42);
    let bytes = args.serialize();
    assert_eq!(bytes, vec![42, 0, 0, 0]); // little-endian

    let mut decoder = Args::from_bytes(bytes);
    assert_eq!(decoder.next_u32().expect("decode failed"), 42);
    assert_eq!(decoder.offset(), U32_SIZE);
}

#[test]
fn string_is_length_prefixed() {
    let mut args = Args::new();
    args.add_string("hi").expect("add failed");
    assert_eq!(args.serialize(), vec![2, 0, 0, 0, b'h', b'i']);

    let mut decoder = Args::from_bytes(args.into_bytes());
    assert_eq!(decoder.next_string().expect("decode failed"), "hi");
}

#[test]
fn mixed_sequence_round_trips_in_write_order() {
    let mut args = Args::new();
    args.add_bool(true)
        .add_u8(0xAB)
        .add_u32(123_456)
        .add_u64(u64::MAX)
        .add_i32(-42)
        .add_i64(i64::MIN)
        .add_f32(1.5)
        .add_f64(-2.25);
    args.add_string("datastore_key").expect("add string failed");
    args.add_bytes(&[9, 8, 7]).expect("add bytes failed");

    let mut decoder = Args::from_bytes(args.into_bytes());
    assert!(decoder.next_bool().expect("bool failed"));
    assert_eq!(decoder.next_u8().expect("u8 failed"), 0xAB);
    assert_eq!(decoder.next_u32().expect("u32 failed"), 123_456);
    assert_eq!(decoder.next_u64().expect("u64 failed"), u64::MAX);
    assert_eq!(decoder.next_i32().expect("i32 failed"), -42);
    assert_eq!(decoder.next_i64().expect("i64 failed"), i64::MIN);
    assert_eq!(decoder.next_f32().expect("f32 failed"), 1.5);
    assert_eq!(decoder.next_f64().expect("f64 failed"), -2.25);
    assert_eq!(decoder.next_string().expect("string failed"), "datastore_key");
    assert_eq!(decoder.next_bytes().expect("bytes failed"), vec![9, 8, 7]);
}

#[test]
fn offset_tracks_serialized_length() {
    let mut args = Args::new();
    args.add_u8(1);
    assert_eq!(args.offset(), args.serialize().len());
    args.add_u64(2);
    assert_eq!(args.offset(), args.serialize().len());
    args.add_string("abc").expect("add string failed");
    assert_eq!(args.offset(), args.serialize().len());
    args.add_bytes(&[1, 2, 3, 4]).expect("add bytes failed");
    assert_eq!(args.offset(), args.serialize().len());
    args.add_native_array(&[7u32, 8, 9]).expect("add array failed");
    assert_eq!(args.offset(), args.serialize().len());
}

#[test]
fn truncated_string_payload_is_rejected() {
    // Prefix advertises 10 payload bytes, only 3 remain
    let mut bytes = vec![10, 0, 0, 0];
    bytes.extend_from_slice(b"abc");

    let mut decoder = Args::from_bytes(bytes);
    assert_eq!(decoder.next_string(), Err(ArgsDecodeError::TruncatedBuffer));
}

#[test]
fn truncated_length_prefix_is_rejected() {
    let mut decoder = Args::from_bytes(vec![1, 0]);
    assert_eq!(decoder.next_string(), Err(ArgsDecodeError::TruncatedBuffer));
}

#[test]
fn scalar_read_past_end_is_rejected() {
    let mut decoder = Args::from_bytes(vec![1, 2, 3]);
    assert_eq!(decoder.next_u64(), Err(ArgsDecodeError::TruncatedBuffer));

    let mut empty = Args::from_bytes(Vec::new());
    assert_eq!(empty.next_u8(), Err(ArgsDecodeError::TruncatedBuffer));
    assert_eq!(empty.next_bool(), Err(ArgsDecodeError::TruncatedBuffer));
}

#[test]
fn invalid_utf8_payload_is_rejected() {
    let mut decoder = Args::from_bytes(vec![2, 0, 0, 0, 0xFF, 0xFE]);
    assert_eq!(decoder.next_string(), Err(ArgsDecodeError::InvalidEncoding));
}

#[test]
fn bool_decodes_any_nonzero_byte_as_true() {
    let mut decoder = Args::from_bytes(vec![0, 1, 7]);
    assert!(!decoder.next_bool().expect("decode failed"));
    assert!(decoder.next_bool().expect("decode failed"));
    assert!(decoder.next_bool().expect("decode failed"));
}

#[test]
fn empty_string_and_bytes_round_trip() {
    let mut args = Args::new();
    args.add_string("").expect("add string failed");
    args.add_bytes(&[]).expect("add bytes failed");
    assert_eq!(args.serialize(), vec![0, 0, 0, 0, 0, 0, 0, 0]);

    let mut decoder = Args::from_bytes(args.into_bytes());
    assert_eq!(decoder.next_string().expect("string failed"), "");
    assert_eq!(decoder.next_bytes().expect("bytes failed"), Vec::<u8>::new());
}

#[test]
fn from_bytes_at_starts_mid_buffer() {
    let mut args = Args::new();
    args.add_u32(99);
    args.add_string("payload").expect("add failed");

    let mut decoder = Args::from_bytes_at(args.into_bytes(), U32_SIZE);
    assert_eq!(decoder.next_string().expect("decode failed"), "payload");
}

#[test]
fn float_round_trips_are_bit_exact() {
    let f32_values = [0.0f32, -0.0, 1.0e-40, f32::MAX, f32::NEG_INFINITY];
    let f64_values = [0.0f64, -0.0, 5.0e-324, f64::MIN, f64::INFINITY];

    let mut args = Args::new();
    for value in f32_values {
        args.add_f32(value);
    }
    for value in f64_values {
        args.add_f64(value);
    }

    let mut decoder = Args::from_bytes(args.into_bytes());
    for value in f32_values {
        let decoded = decoder.next_f32().expect("f32 failed");
        assert_eq!(decoded.to_bits(), value.to_bits());
    }
    for value in f64_values {
        let decoded = decoder.next_f64().expect("f64 failed");
        assert_eq!(decoded.to_bits(), value.to_bits());
    }
}

#[test]
fn randomized_mixed_round_trip() {
    let mut rng = rand::rng();

    for _ in 0..100 {
        let a = rng.random::<u64>();
        let b = rng.random::<i32>();
        let c = rng.random::<f64>();
        let d = rng.random::<bool>();
        let payload: Vec<u8> = (0..rng.random_range(0..64)).map(|_| rng.random()).collect();

        let mut args = Args::new();
        args.add_u64(a).add_i32(b).add_f64(c).add_bool(d);
        args.add_bytes(&payload).expect("add bytes failed");

        let mut decoder = Args::from_bytes(args.into_bytes());
        assert_eq!(decoder.next_u64().expect("u64 failed"), a);
        assert_eq!(decoder.next_i32().expect("i32 failed"), b);
        assert_eq!(decoder.next_f64().expect("f64 failed").to_bits(), c.to_bits());
        assert_eq!(decoder.next_bool().expect("bool failed"), d);
        assert_eq!(decoder.next_bytes().expect("bytes failed"), payload);
    }
}
