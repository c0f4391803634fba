/// Typed-argument codec over a single owned byte buffer.
///
/// `Args` composes the primitive writers and readers in [`crate::bytes`]
/// into a sequential, cursor-based protocol: producers chain typed `add_*`
/// calls to build a call payload, consumers chain typed `next_*` calls
/// against a received buffer to extract values in the same order they were
/// written.
///
/// The format carries no type tags for primitives, so the read order must
/// exactly mirror the write order; a mismatched order yields wrong values
/// rather than a detectable error. This is a caller contract, not a guarded
/// invariant.
///
/// ### Key characteristics:
/// - **Little-endian**: every multi-byte field, including length prefixes.
/// - **Sequential**: the cursor only moves forward, by exactly the bytes
///   each operation consumed or appended.
/// - **Self-contained**: no I/O, no shared state; each instance exclusively
///   owns its buffer.
#[derive(Debug)]
pub struct Args {
    pub(crate) serialized: Vec<u8>,
    pub(crate) offset: usize,
}

impl Args {
    /// Creates an empty encode session.
    pub fn new() -> Self {
        Self {
            serialized: Vec::new(),
            offset: 0,
        }
    }

    /// Wraps a received buffer for decoding, with the cursor at the start.
    pub fn from_bytes(serialized: Vec<u8>) -> Self {
        Self {
            serialized,
            offset: 0,
        }
    }

    /// Wraps a received buffer for decoding, with the cursor already
    /// positioned at `offset`.
    pub fn from_bytes_at(serialized: Vec<u8>, offset: usize) -> Self {
        Self { serialized, offset }
    }

    /// Returns the current cursor position: bytes written so far in encode
    /// mode, bytes consumed so far in decode mode.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns a view of the underlying buffer.
    pub fn as_bytes(&self) -> &[u8] {
        &self.serialized
    }

    /// Returns a copy of the serialized buffer, ready to hand to the
    /// transport layer as call input.
    pub fn serialize(&self) -> Vec<u8> {
        self.serialized.clone()
    }

    /// Consumes the codec and returns the serialized buffer. The hand-off
    /// ends the encode session.
    pub fn into_bytes(self) -> Vec<u8> {
        self.serialized
    }
}

impl Default for Args {
    fn default() -> Self {
        Self::new()
    }
}
