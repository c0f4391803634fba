use crate::args::{
    Args, ArgsEncodeError, NativeValue, Serializable, native_array_to_bytes,
    serializable_array_to_bytes,
};
use crate::bytes;
use crate::constants::{
    BOOL_SIZE, F32_SIZE, F64_SIZE, I32_SIZE, I64_SIZE, U8_SIZE, U32_SIZE, U64_SIZE,
};

/// Encode path.
///
/// Every `add_*` appends the canonical encoding of its value to the buffer
/// and advances the cursor by exactly the bytes appended, so that
/// [`Args::offset`] always equals the serialized length. Fixed-width adds
/// are infallible and return `&mut Self` for chaining; length-prefixed adds
/// can reject an over-capacity payload and return `Result`.
impl Args {
    pub fn add_u8(&mut self, value: u8) -> &mut Self {
        bytes::write_u8(&mut self.serialized, value);
        self.offset += U8_SIZE;
        self
    }

    /// Appends a bool as a single `0`/`1` byte.
    pub fn add_bool(&mut self, value: bool) -> &mut Self {
        bytes::write_bool(&mut self.serialized, value);
        self.offset += BOOL_SIZE;
        self
    }

    pub fn add_u32(&mut self, value: u32) -> &mut Self {
        bytes::write_u32(&mut self.serialized, value);
        self.offset += U32_SIZE;
        self
    }

    pub fn add_u64(&mut self, value: u64) -> &mut Self {
        bytes::write_u64(&mut self.serialized, value);
        self.offset += U64_SIZE;
        self
    }

    pub fn add_i32(&mut self, value: i32) -> &mut Self {
        bytes::write_i32(&mut self.serialized, value);
        self.offset += I32_SIZE;
        self
    }

    pub fn add_i64(&mut self, value: i64) -> &mut Self {
        bytes::write_i64(&mut self.serialized, value);
        self.offset += I64_SIZE;
        self
    }

    pub fn add_f32(&mut self, value: f32) -> &mut Self {
        bytes::write_f32(&mut self.serialized, value);
        self.offset += F32_SIZE;
        self
    }

    pub fn add_f64(&mut self, value: f64) -> &mut Self {
        bytes::write_f64(&mut self.serialized, value);
        self.offset += F64_SIZE;
        self
    }

    /// Appends a length-prefixed byte array.
    pub fn add_bytes(&mut self, value: &[u8]) -> Result<&mut Self, ArgsEncodeError> {
        let prefix = bytes::length_prefix(value.len())?;
        self.add_u32(prefix);
        self.serialized.extend_from_slice(value);
        self.offset += value.len();
        Ok(self)
    }

    /// Appends a length-prefixed UTF-8 string.
    ///
    /// A string longer than the 4-byte prefix can describe fails with
    /// [`ArgsEncodeError::ValueTooLarge`]; it is never truncated.
    pub fn add_string(&mut self, value: &str) -> Result<&mut Self, ArgsEncodeError> {
        let prefix = bytes::length_prefix(value.len())?;
        self.add_u32(prefix);
        bytes::write_str(&mut self.serialized, value);
        self.offset += value.len();
        Ok(self)
    }

    /// Appends a serializable value's own encoding, with no length prefix.
    /// The value's format must be self-delimiting.
    pub fn add_serializable<T: Serializable>(&mut self, value: &T) -> &mut Self {
        let serialized = value.serialize();
        self.serialized.extend_from_slice(&serialized);
        self.offset += serialized.len();
        self
    }

    /// Appends a framed array of serializable values: a 4-byte prefix
    /// holding the total byte length of the concatenated elements, then the
    /// elements themselves.
    pub fn add_serializable_array<T: Serializable>(
        &mut self,
        values: &[T],
    ) -> Result<&mut Self, ArgsEncodeError> {
        let content = serializable_array_to_bytes(values);
        self.add_framed(&content)
    }

    /// Appends a framed array of native values: a 4-byte prefix holding the
    /// total byte length of the encoded elements, then each element's
    /// fixed-width or length-prefixed encoding.
    pub fn add_native_array<T: NativeValue>(
        &mut self,
        values: &[T],
    ) -> Result<&mut Self, ArgsEncodeError> {
        let content = native_array_to_bytes(values)?;
        self.add_framed(&content)
    }

    fn add_framed(&mut self, content: &[u8]) -> Result<&mut Self, ArgsEncodeError> {
        let prefix = bytes::length_prefix(content.len())?;
        self.add_u32(prefix);
        self.serialized.extend_from_slice(content);
        self.offset += content.len();
        Ok(self)
    }
}
