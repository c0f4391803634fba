// Scalar wire widths in bytes
pub const U8_SIZE: usize = 1;
pub const BOOL_SIZE: usize = 1;
pub const U32_SIZE: usize = 4;
pub const U64_SIZE: usize = 8;
pub const I32_SIZE: usize = 4;
pub const I64_SIZE: usize = 8;
pub const F32_SIZE: usize = 4;
pub const F64_SIZE: usize = 8;

/// Size in bytes of the length prefix carried by every variable-length
/// field (strings, byte arrays, framed arrays). The prefix is an unsigned
/// 32-bit little-endian count of the payload bytes that follow.
pub const LENGTH_PREFIX_SIZE: usize = 4;

/// Largest payload length the 4-byte prefix can describe. Encoding a
/// longer payload fails rather than truncating it.
pub const MAX_PREFIXED_LENGTH: u64 = u32::MAX as u64;
