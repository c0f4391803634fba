mod args_codec;
mod args_decode;
mod args_encode;
mod args_error;
mod native_type;
mod native_value;
mod serializable;

pub use args_codec::Args;
pub use args_error::{ArgsDecodeError, ArgsEncodeError};
pub use native_type::NativeType;
pub use native_value::{NativeValue, bytes_to_native_array, native_array_to_bytes};
pub use serializable::{Serializable, bytes_to_serializable_array, serializable_array_to_bytes};
