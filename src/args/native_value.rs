use crate::args::{ArgsDecodeError, ArgsEncodeError, NativeType};
use crate::bytes;
use crate::constants::{
    BOOL_SIZE, F32_SIZE, F64_SIZE, I32_SIZE, I64_SIZE, U8_SIZE, U32_SIZE, U64_SIZE,
};

/// A value of one of the native kinds the codec can frame into homogeneous
/// arrays without a caller-supplied decoder.
///
/// Fixed-width kinds occupy exactly [`NativeType::fixed_width`] bytes per
/// element; `String` elements carry their own 4-byte length prefix.
pub trait NativeValue: Sized {
    /// Tag identifying which primitive codec applies to this type.
    const KIND: NativeType;

    /// Appends the canonical wire encoding of `self` to `out`.
    fn write_bytes(&self, out: &mut Vec<u8>) -> Result<(), ArgsEncodeError>;

    /// Reads one value starting at `offset`, returning it together with the
    /// offset one past its encoding.
    fn read_bytes(buf: &[u8], offset: usize) -> Result<(Self, usize), ArgsDecodeError>;
}

impl NativeValue for u8 {
    const KIND: NativeType = NativeType::U8;

    fn write_bytes(&self, out: &mut Vec<u8>) -> Result<(), ArgsEncodeError> {
        bytes::write_u8(out, *self);
        Ok(())
    }

    fn read_bytes(buf: &[u8], offset: usize) -> Result<(Self, usize), ArgsDecodeError> {
        let value = bytes::read_u8(buf, offset)?;
        Ok((value, offset + U8_SIZE))
    }
}

impl NativeValue for bool {
    const KIND: NativeType = NativeType::Bool;

    fn write_bytes(&self, out: &mut Vec<u8>) -> Result<(), ArgsEncodeError> {
        bytes::write_bool(out, *self);
        Ok(())
    }

    fn read_bytes(buf: &[u8], offset: usize) -> Result<(Self, usize), ArgsDecodeError> {
        let value = bytes::read_bool(buf, offset)?;
        Ok((value, offset + BOOL_SIZE))
    }
}

impl NativeValue for u32 {
    const KIND: NativeType = NativeType::U32;

    fn write_bytes(&self, out: &mut Vec<u8>) -> Result<(), ArgsEncodeError> {
        bytes::write_u32(out, *self);
        Ok(())
    }

    fn read_bytes(buf: &[u8], offset: usize) -> Result<(Self, usize), ArgsDecodeError> {
        let value = bytes::read_u32(buf, offset)?;
        Ok((value, offset + U32_SIZE))
    }
}

impl NativeValue for u64 {
    const KIND: NativeType = NativeType::U64;

    fn write_bytes(&self, out: &mut Vec<u8>) -> Result<(), ArgsEncodeError> {
        bytes::write_u64(out, *self);
        Ok(())
    }

    fn read_bytes(buf: &[u8], offset: usize) -> Result<(Self, usize), ArgsDecodeError> {
        let value = bytes::read_u64(buf, offset)?;
        Ok((value, offset + U64_SIZE))
    }
}

impl NativeValue for i32 {
    const KIND: NativeType = NativeType::I32;

    fn write_bytes(&self, out: &mut Vec<u8>) -> Result<(), ArgsEncodeError> {
        bytes::write_i32(out, *self);
        Ok(())
    }

    fn read_bytes(buf: &[u8], offset: usize) -> Result<(Self, usize), ArgsDecodeError> {
        let value = bytes::read_i32(buf, offset)?;
        Ok((value, offset + I32_SIZE))
    }
}

impl NativeValue for i64 {
    const KIND: NativeType = NativeType::I64;

    fn write_bytes(&self, out: &mut Vec<u8>) -> Result<(), ArgsEncodeError> {
        bytes::write_i64(out, *self);
        Ok(())
    }

    fn read_bytes(buf: &[u8], offset: usize) -> Result<(Self, usize), ArgsDecodeError> {
        let value = bytes::read_i64(buf, offset)?;
        Ok((value, offset + I64_SIZE))
    }
}

impl NativeValue for f32 {
    const KIND: NativeType = NativeType::F32;

    fn write_bytes(&self, out: &mut Vec<u8>) -> Result<(), ArgsEncodeError> {
        bytes::write_f32(out, *self);
        Ok(())
    }

    fn read_bytes(buf: &[u8], offset: usize) -> Result<(Self, usize), ArgsDecodeError> {
        let value = bytes::read_f32(buf, offset)?;
        Ok((value, offset + F32_SIZE))
    }
}

impl NativeValue for f64 {
    const KIND: NativeType = NativeType::F64;

    fn write_bytes(&self, out: &mut Vec<u8>) -> Result<(), ArgsEncodeError> {
        bytes::write_f64(out, *self);
        Ok(())
    }

    fn read_bytes(buf: &[u8], offset: usize) -> Result<(Self, usize), ArgsDecodeError> {
        let value = bytes::read_f64(buf, offset)?;
        Ok((value, offset + F64_SIZE))
    }
}

impl NativeValue for String {
    const KIND: NativeType = NativeType::String;

    fn write_bytes(&self, out: &mut Vec<u8>) -> Result<(), ArgsEncodeError> {
        let prefix = bytes::length_prefix(self.len())?;
        bytes::write_u32(out, prefix);
        bytes::write_str(out, self);
        Ok(())
    }

    fn read_bytes(buf: &[u8], offset: usize) -> Result<(Self, usize), ArgsDecodeError> {
        let len = bytes::read_u32(buf, offset)? as usize;
        let start = offset + U32_SIZE;
        let end = start
            .checked_add(len)
            .ok_or(ArgsDecodeError::TruncatedBuffer)?;
        let payload = buf.get(start..end).ok_or(ArgsDecodeError::TruncatedBuffer)?;
        let value = bytes::read_str(payload)?;
        Ok((value, end))
    }
}

/// Concatenates the element encodings of `values`, unframed. The caller is
/// responsible for the 4-byte total-length prefix.
pub fn native_array_to_bytes<T: NativeValue>(values: &[T]) -> Result<Vec<u8>, ArgsEncodeError> {
    let capacity = T::KIND
        .fixed_width()
        .map(|width| width * values.len())
        .unwrap_or(0);
    let mut out = Vec::with_capacity(capacity);
    for value in values {
        value.write_bytes(&mut out)?;
    }
    Ok(out)
}

/// Decodes back-to-back native values until `buf` is exhausted.
///
/// For fixed-width kinds a buffer that does not hold a whole number of
/// elements fails on the final partial element with
/// [`ArgsDecodeError::TruncatedBuffer`].
pub fn bytes_to_native_array<T: NativeValue>(buf: &[u8]) -> Result<Vec<T>, ArgsDecodeError> {
    let capacity = T::KIND
        .fixed_width()
        .map(|width| buf.len() / width)
        .unwrap_or(0);
    let mut values = Vec::with_capacity(capacity);
    let mut offset = 0;
    while offset < buf.len() {
        let (value, next_offset) = T::read_bytes(buf, offset)?;
        offset = next_offset;
        values.push(value);
    }
    Ok(values)
}
