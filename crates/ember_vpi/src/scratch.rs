//! Reusable output storage for string encodings.

use crate::error::VpiError;
use ember_config::ScratchPolicy;

/// A byte buffer owned by one encoder and rewritten on every call.
///
/// Under [`ScratchPolicy::GrowOnly`] the capacity tracks the largest request
/// seen so far. Under [`ScratchPolicy::Exact`] it follows each request.
#[derive(Debug, Clone)]
pub struct ScratchBuffer {
    bytes: Vec<u8>,
    policy: ScratchPolicy,
}

impl ScratchBuffer {
    /// Creates an empty buffer.
    pub fn new(policy: ScratchPolicy) -> Self {
        Self {
            bytes: Vec::new(),
            policy,
        }
    }

    /// Discards the contents and makes room for at least `cnt` bytes.
    pub fn need(&mut self, cnt: usize) {
        self.bytes.clear();
        let before = self.bytes.capacity();
        if before < cnt {
            self.bytes.reserve_exact(cnt);
            log::debug!("scratch buffer grown from {before} to {} bytes", self.bytes.capacity());
        } else if self.policy == ScratchPolicy::Exact {
            self.bytes.shrink_to(cnt);
        }
    }

    /// Discards the contents, reserves `cnt` bytes, and fills `len` of them
    /// with `fill` for indexed writes.
    pub fn need_filled(&mut self, cnt: usize, len: usize, fill: u8) {
        self.need(cnt.max(len));
        self.bytes.resize(len, fill);
    }

    /// Overwrites the byte at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is past the filled length.
    pub fn put(&mut self, idx: usize, byte: u8) {
        self.bytes[idx] = byte;
    }

    /// Appends one byte.
    pub fn push(&mut self, byte: u8) {
        self.bytes.push(byte);
    }

    /// Appends a string.
    pub fn push_str(&mut self, s: &str) {
        self.bytes.extend_from_slice(s.as_bytes());
    }

    /// Current contents.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Current contents as text.
    ///
    /// Fails only if non-ASCII bytes were written by a string encoding,
    /// which would be a codec bug.
    pub fn as_str(&self) -> Result<&str, VpiError> {
        std::str::from_utf8(&self.bytes).map_err(|e| {
            log::error!("scratch buffer holds invalid text: {e}");
            VpiError::Internal(format!("scratch buffer holds invalid text: {e}"))
        })
    }

    /// Bytes the buffer can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    /// Number of bytes currently held.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the buffer holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl Default for ScratchBuffer {
    fn default() -> Self {
        Self::new(ScratchPolicy::GrowOnly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grow_only_keeps_capacity() {
        let mut buf = ScratchBuffer::new(ScratchPolicy::GrowOnly);
        buf.need(64);
        let big = buf.capacity();
        assert!(big >= 64);
        buf.need(4);
        assert_eq!(buf.capacity(), big);
        assert!(buf.is_empty());
    }

    #[test]
    fn exact_releases_capacity() {
        let mut buf = ScratchBuffer::new(ScratchPolicy::Exact);
        buf.need(256);
        buf.need(8);
        assert!(buf.capacity() >= 8);
        assert!(buf.capacity() < 256);
    }

    #[test]
    fn filled_indexed_writes() {
        let mut buf = ScratchBuffer::default();
        buf.need_filled(5, 3, b'0');
        buf.put(2, b'F');
        buf.put(0, b'1');
        assert_eq!(buf.as_str().unwrap(), "10F");
        assert_eq!(buf.len(), 3);
    }

    #[test]
    fn push_and_reuse() {
        let mut buf = ScratchBuffer::default();
        buf.need(4);
        buf.push_str("-12");
        buf.push(b'3');
        assert_eq!(buf.as_bytes(), b"-123");
        buf.need(2);
        assert!(buf.is_empty());
    }

    #[test]
    fn invalid_text_is_internal_error() {
        let mut buf = ScratchBuffer::default();
        buf.need(1);
        buf.push(0xff);
        assert!(matches!(buf.as_str(), Err(VpiError::Internal(_))));
    }
}
