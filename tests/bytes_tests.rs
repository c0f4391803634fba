use argio::args::{ArgsDecodeError, ArgsEncodeError};
use argio::bytes::{
    length_prefix, read_f64, read_i64, read_str, read_u8, read_u32, read_u64, write_f64, write_i64,
    write_u32,
};

#[test]
fn writers_emit_little_endian() {
    let mut out = Vec::new();
    write_u32(&mut out, 0x1234_5678);
    assert_eq!(out, vec![0x78, 0x56, 0x34, 0x12]);

    let mut out = Vec::new();
    write_i64(&mut out, -1);
    assert_eq!(out, vec![0xFF; 8]);

    let mut out = Vec::new();
    write_f64(&mut out, 1.5);
    assert_eq!(out, 1.5f64.to_le_bytes());
}

#[test]
fn readers_decode_at_an_offset() {
    let buf = [0xAA, 0x01, 0x00, 0x00, 0x00];
    assert_eq!(read_u8(&buf, 0).expect("read failed"), 0xAA);
    assert_eq!(read_u32(&buf, 1).expect("read failed"), 1);
}

#[test]
fn readers_never_read_past_the_end() {
    assert_eq!(read_u8(&[], 0), Err(ArgsDecodeError::TruncatedBuffer));
    assert_eq!(read_u32(&[1, 2, 3], 0), Err(ArgsDecodeError::TruncatedBuffer));
    assert_eq!(
        read_u64(&[0; 8], 1),
        Err(ArgsDecodeError::TruncatedBuffer)
    );
    assert_eq!(
        read_i64(&[0; 4], 0),
        Err(ArgsDecodeError::TruncatedBuffer)
    );
    assert_eq!(
        read_f64(&[0; 16], 9),
        Err(ArgsDecodeError::TruncatedBuffer)
    );
}

#[test]
fn read_str_requires_valid_utf8() {
    assert_eq!(read_str("héllo".as_bytes()).expect("read failed"), "héllo");
    assert_eq!(read_str(&[0xFF, 0xFE]), Err(ArgsDecodeError::InvalidEncoding));
}

#[test]
fn length_prefix_rejects_over_capacity_payloads() {
    assert_eq!(length_prefix(0), Ok(0));
    assert_eq!(length_prefix(42), Ok(42));
    assert_eq!(length_prefix(u32::MAX as usize), Ok(u32::MAX));
    assert_eq!(
        length_prefix(u32::MAX as usize + 1),
        Err(ArgsEncodeError::ValueTooLarge)
    );
}
