#[derive(Debug, Clone, PartialEq)]
pub enum ArgsEncodeError {
    /// A string, byte array, or framed array payload exceeds the 4-byte
    /// length-prefix capacity and cannot be described on the wire.
    ValueTooLarge,
}

/// Errors surfaced by the decode path.
///
/// After any decode error the cursor position is undefined and the `Args`
/// instance must not be reused.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgsDecodeError {
    /// A read requires more bytes than remain in the buffer.
    TruncatedBuffer,

    /// A string payload is not valid UTF-8, or an element decoder consumed
    /// no bytes inside a framed array.
    InvalidEncoding,

    UnsupportedNativeType,
}
