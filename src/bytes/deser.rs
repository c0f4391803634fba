use crate::args::ArgsDecodeError;
use crate::constants::{F32_SIZE, F64_SIZE, I32_SIZE, I64_SIZE, U32_SIZE, U64_SIZE};

// Stateless little-endian readers. Each reads one value starting at
// `offset` and never past the end of `buf`; the caller advances its own
// cursor by the value's wire width.

pub fn read_u8(buf: &[u8], offset: usize) -> Result<u8, ArgsDecodeError> {
    buf.get(offset)
        .copied()
        .ok_or(ArgsDecodeError::TruncatedBuffer)
}

/// Any nonzero byte decodes as `true`.
pub fn read_bool(buf: &[u8], offset: usize) -> Result<bool, ArgsDecodeError> {
    Ok(read_u8(buf, offset)? != 0)
}

pub fn read_u32(buf: &[u8], offset: usize) -> Result<u32, ArgsDecodeError> {
    offset
        .checked_add(U32_SIZE)
        .and_then(|end| buf.get(offset..end))
        .and_then(|bytes| bytes.try_into().ok())
        .map(u32::from_le_bytes)
        .ok_or(ArgsDecodeError::TruncatedBuffer)
}

pub fn read_u64(buf: &[u8], offset: usize) -> Result<u64, ArgsDecodeError> {
    offset
        .checked_add(U64_SIZE)
        .and_then(|end| buf.get(offset..end))
        .and_then(|bytes| bytes.try_into().ok())
        .map(u64::from_le_bytes)
        .ok_or(ArgsDecodeError::TruncatedBuffer)
}

pub fn read_i32(buf: &[u8], offset: usize) -> Result<i32, ArgsDecodeError> {
    offset
        .checked_add(I32_SIZE)
        .and_then(|end| buf.get(offset..end))
        .and_then(|bytes| bytes.try_into().ok())
        .map(i32::from_le_bytes)
        .ok_or(ArgsDecodeError::TruncatedBuffer)
}

pub fn read_i64(buf: &[u8], offset: usize) -> Result<i64, ArgsDecodeError> {
    offset
        .checked_add(I64_SIZE)
        .and_then(|end| buf.get(offset..end))
        .and_then(|bytes| bytes.try_into().ok())
        .map(i64::from_le_bytes)
        .ok_or(ArgsDecodeError::TruncatedBuffer)
}

pub fn read_f32(buf: &[u8], offset: usize) -> Result<f32, ArgsDecodeError> {
    offset
        .checked_add(F32_SIZE)
        .and_then(|end| buf.get(offset..end))
        .and_then(|bytes| bytes.try_into().ok())
        .map(f32::from_le_bytes)
        .ok_or(ArgsDecodeError::TruncatedBuffer)
}

pub fn read_f64(buf: &[u8], offset: usize) -> Result<f64, ArgsDecodeError> {
    offset
        .checked_add(F64_SIZE)
        .and_then(|end| buf.get(offset..end))
        .and_then(|bytes| bytes.try_into().ok())
        .map(f64::from_le_bytes)
        .ok_or(ArgsDecodeError::TruncatedBuffer)
}

/// Decodes the whole of `buf` as a UTF-8 string.
pub fn read_str(buf: &[u8]) -> Result<String, ArgsDecodeError> {
    String::from_utf8(buf.to_vec()).map_err(|_| ArgsDecodeError::InvalidEncoding)
}
