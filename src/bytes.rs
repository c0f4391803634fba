mod deser;
mod ser;

pub use deser::{
    read_bool, read_f32, read_f64, read_i32, read_i64, read_str, read_u8, read_u32, read_u64,
};
pub use ser::{
    length_prefix, write_bool, write_f32, write_f64, write_i32, write_i64, write_str, write_u8,
    write_u32, write_u64,
};
