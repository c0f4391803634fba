use crate::args::ArgsDecodeError;
use crate::constants::{
    BOOL_SIZE, F32_SIZE, F64_SIZE, I32_SIZE, I64_SIZE, U8_SIZE, U32_SIZE, U64_SIZE,
};
use std::convert::TryFrom;

/// Tag identifying which primitive codec applies to the elements of a
/// homogeneous array when the element type is not otherwise known
/// structurally (for example, a tag byte stored alongside a datastore
/// entry).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeType {
    String = 0,
    Bool = 1,
    U8 = 2,
    U32 = 3,
    U64 = 4,
    I32 = 5,
    I64 = 6,
    F32 = 7,
    F64 = 8,
}

impl NativeType {
    /// Element width in bytes for fixed-width kinds, `None` for `String`,
    /// whose elements carry their own length prefix.
    pub fn fixed_width(&self) -> Option<usize> {
        match self {
            NativeType::String => None,
            NativeType::Bool => Some(BOOL_SIZE),
            NativeType::U8 => Some(U8_SIZE),
            NativeType::U32 => Some(U32_SIZE),
            NativeType::U64 => Some(U64_SIZE),
            NativeType::I32 => Some(I32_SIZE),
            NativeType::I64 => Some(I64_SIZE),
            NativeType::F32 => Some(F32_SIZE),
            NativeType::F64 => Some(F64_SIZE),
        }
    }
}

impl TryFrom<u8> for NativeType {
    type Error = ArgsDecodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(NativeType::String),
            1 => Ok(NativeType::Bool),
            2 => Ok(NativeType::U8),
            3 => Ok(NativeType::U32),
            4 => Ok(NativeType::U64),
            5 => Ok(NativeType::I32),
            6 => Ok(NativeType::I64),
            7 => Ok(NativeType::F32),
            8 => Ok(NativeType::F64),
            _ => Err(ArgsDecodeError::UnsupportedNativeType),
        }
    }
}
