use crate::args::{
    Args, ArgsDecodeError, NativeValue, Serializable, bytes_to_native_array,
    bytes_to_serializable_array,
};
use crate::bytes;
use crate::constants::{
    BOOL_SIZE, F32_SIZE, F64_SIZE, I32_SIZE, I64_SIZE, U8_SIZE, U32_SIZE, U64_SIZE,
};

/// Decode path.
///
/// Every `next_*` reads the canonical encoding for its type at the current
/// cursor, advances the cursor by exactly the bytes consumed, and returns
/// the value. Reads are strictly sequential; the cursor never moves
/// backward and never past the end of the buffer.
impl Args {
    pub fn next_u8(&mut self) -> Result<u8, ArgsDecodeError> {
        let value = bytes::read_u8(&self.serialized, self.offset)?;
        self.offset += U8_SIZE;
        Ok(value)
    }

    /// Reads a bool; any nonzero byte decodes as `true`.
    pub fn next_bool(&mut self) -> Result<bool, ArgsDecodeError> {
        let value = bytes::read_bool(&self.serialized, self.offset)?;
        self.offset += BOOL_SIZE;
        Ok(value)
    }

    pub fn next_u32(&mut self) -> Result<u32, ArgsDecodeError> {
        let value = bytes::read_u32(&self.serialized, self.offset)?;
        self.offset += U32_SIZE;
        Ok(value)
    }

    pub fn next_u64(&mut self) -> Result<u64, ArgsDecodeError> {
        let value = bytes::read_u64(&self.serialized, self.offset)?;
        self.offset += U64_SIZE;
        Ok(value)
    }

    pub fn next_i32(&mut self) -> Result<i32, ArgsDecodeError> {
        let value = bytes::read_i32(&self.serialized, self.offset)?;
        self.offset += I32_SIZE;
        Ok(value)
    }

    pub fn next_i64(&mut self) -> Result<i64, ArgsDecodeError> {
        let value = bytes::read_i64(&self.serialized, self.offset)?;
        self.offset += I64_SIZE;
        Ok(value)
    }

    pub fn next_f32(&mut self) -> Result<f32, ArgsDecodeError> {
        let value = bytes::read_f32(&self.serialized, self.offset)?;
        self.offset += F32_SIZE;
        Ok(value)
    }

    pub fn next_f64(&mut self) -> Result<f64, ArgsDecodeError> {
        let value = bytes::read_f64(&self.serialized, self.offset)?;
        self.offset += F64_SIZE;
        Ok(value)
    }

    /// Reads a 4-byte length prefix, then exactly that many payload bytes.
    pub fn next_bytes(&mut self) -> Result<Vec<u8>, ArgsDecodeError> {
        let len = self.next_u32()? as usize;
        let payload = self.next_data(len)?;
        Ok(payload.to_vec())
    }

    /// Reads a 4-byte length prefix, then exactly that many bytes of UTF-8
    /// string payload.
    pub fn next_string(&mut self) -> Result<String, ArgsDecodeError> {
        let len = self.next_u32()? as usize;
        let payload = self.next_data(len)?;
        bytes::read_str(payload)
    }

    /// Decodes a serializable value at the cursor, adopting the offset its
    /// decoder reports.
    pub fn next_serializable<T: Serializable>(&mut self) -> Result<T, ArgsDecodeError> {
        let (value, offset) = T::deserialize(&self.serialized, self.offset)?;
        self.offset = offset;
        Ok(value)
    }

    /// Reads a framed array of serializable values.
    ///
    /// A zero-length frame decodes to an empty vector without invoking the
    /// element decoder.
    pub fn next_serializable_array<T: Serializable>(&mut self) -> Result<Vec<T>, ArgsDecodeError> {
        let len = self.next_u32()? as usize;
        if len == 0 {
            return Ok(Vec::new());
        }
        let content = self.next_data(len)?;
        bytes_to_serializable_array(content)
    }

    /// Reads a framed array of native values.
    ///
    /// A zero-length frame decodes to an empty vector without invoking the
    /// element decoder.
    pub fn next_native_array<T: NativeValue>(&mut self) -> Result<Vec<T>, ArgsDecodeError> {
        let len = self.next_u32()? as usize;
        if len == 0 {
            return Ok(Vec::new());
        }
        let content = self.next_data(len)?;
        bytes_to_native_array(content)
    }

    // Slices the next `len` bytes and advances the cursor past them.
    fn next_data(&mut self, len: usize) -> Result<&[u8], ArgsDecodeError> {
        let end = self
            .offset
            .checked_add(len)
            .ok_or(ArgsDecodeError::TruncatedBuffer)?;
        let slice = self
            .serialized
            .get(self.offset..end)
            .ok_or(ArgsDecodeError::TruncatedBuffer)?;
        self.offset = end;
        Ok(slice)
    }
}
