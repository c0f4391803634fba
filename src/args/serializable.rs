use crate::args::ArgsDecodeError;

/// A user-defined value that produces and consumes its own byte encoding.
///
/// The codec never inspects such a value's internals: it appends exactly
/// the bytes [`Serializable::serialize`] reports and adopts exactly the
/// offset [`Serializable::deserialize`] returns. Encodings must be
/// self-delimiting, since values are written without a length prefix.
pub trait Serializable: Sized {
    /// Returns the value's canonical byte encoding.
    fn serialize(&self) -> Vec<u8>;

    /// Decodes one value from `buf` starting at `offset`, returning it
    /// together with the offset one past the consumed bytes.
    fn deserialize(buf: &[u8], offset: usize) -> Result<(Self, usize), ArgsDecodeError>;
}

/// Concatenates the encodings of `values`, unframed. The caller is
/// responsible for the 4-byte total-length prefix.
pub fn serializable_array_to_bytes<T: Serializable>(values: &[T]) -> Vec<u8> {
    let mut out = Vec::new();
    for value in values {
        out.extend_from_slice(&value.serialize());
    }
    out
}

/// Decodes back-to-back serializable values until `buf` is exhausted.
pub fn bytes_to_serializable_array<T: Serializable>(
    buf: &[u8],
) -> Result<Vec<T>, ArgsDecodeError> {
    let mut values = Vec::new();
    let mut offset = 0;
    while offset < buf.len() {
        let (value, next_offset) = T::deserialize(buf, offset)?;
        // A decoder that does not advance would loop forever
        if next_offset <= offset {
            return Err(ArgsDecodeError::InvalidEncoding);
        }
        offset = next_offset;
        values.push(value);
    }
    Ok(values)
}
