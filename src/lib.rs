//! Typed-argument codec for smart-contract call payloads.
//!
//! `argio` marshals typed values into the single byte buffer a remote
//! execution environment expects as call input, and unmarshals typed values
//! back out of response or datastore buffers. The wire format is
//! little-endian throughout, with 4-byte length prefixes on variable-length
//! fields, and is read strictly in the order it was written.

pub mod args;
pub mod bytes;
pub mod constants;
