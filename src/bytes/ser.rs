use crate::args::ArgsEncodeError;
use crate::constants::MAX_PREFIXED_LENGTH;

// Stateless little-endian writers. Each appends the canonical encoding of
// one value to `out`; composition into fields and frames happens in the
// `args` module.

pub fn write_u8(out: &mut Vec<u8>, value: u8) {
    out.push(value);
}

pub fn write_bool(out: &mut Vec<u8>, value: bool) {
    out.push(if value { 1 } else { 0 });
}

pub fn write_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_le_bytes());
}

pub fn write_u64(out: &mut Vec<u8>, value: u64) {
    out.extend_from_slice(&value.to_le_bytes());
}

pub fn write_i32(out: &mut Vec<u8>, value: i32) {
    out.extend_from_slice(&value.to_le_bytes());
}

pub fn write_i64(out: &mut Vec<u8>, value: i64) {
    out.extend_from_slice(&value.to_le_bytes());
}

pub fn write_f32(out: &mut Vec<u8>, value: f32) {
    out.extend_from_slice(&value.to_le_bytes());
}

pub fn write_f64(out: &mut Vec<u8>, value: f64) {
    out.extend_from_slice(&value.to_le_bytes());
}

/// Appends the raw UTF-8 bytes of `value`, with no length prefix.
pub fn write_str(out: &mut Vec<u8>, value: &str) {
    out.extend_from_slice(value.as_bytes());
}

/// Converts a payload length into its 4-byte prefix value, rejecting
/// payloads the prefix cannot describe.
pub fn length_prefix(len: usize) -> Result<u32, ArgsEncodeError> {
    if len as u64 > MAX_PREFIXED_LENGTH {
        tracing::warn!("payload of {} bytes exceeds the length-prefix capacity", len);
        return Err(ArgsEncodeError::ValueTooLarge);
    }
    Ok(len as u32)
}
