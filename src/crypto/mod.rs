// src/crypto/mod.rs
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    #[error("XOR key must contain at least one byte")]
    EmptyKey,
}

/// Byte-wise XOR key. A single byte, or a short sequence applied cyclically.
#[derive(Clone, PartialEq, Eq)]
pub struct XorKey {
    bytes: Vec<u8>,
}

impl XorKey {
    pub fn single(byte: u8) -> Self {
        Self { bytes: vec![byte] }
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        if bytes.is_empty() {
            return Err(CryptoError::EmptyKey);
        }
        Ok(Self {
            bytes: bytes.to_vec(),
        })
    }

    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        self.bytes[index % self.bytes.len()]
    }
}

// Key material stays out of debug output.
impl std::fmt::Debug for XorKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XorKey").field("len", &self.bytes.len()).finish()
    }
}

impl Drop for XorKey {
    fn drop(&mut self) {
        use zeroize::Zeroize;
        self.bytes.zeroize();
    }
}

/// Apply the keyed transform in place. Applying it twice restores the input.
pub fn xor_in_place(data: &mut [u8], key: &XorKey) {
    for (i, byte) in data.iter_mut().enumerate() {
        *byte ^= key.byte_at(i);
    }
}

/// Return a transformed copy of `data`. Applied to a plaintext secret this
/// yields the stored form; applied to the stored form it yields the plaintext.
pub fn transformed(data: &[u8], key: &XorKey) -> Vec<u8> {
    let mut out = data.to_vec();
    xor_in_place(&mut out, key);
    out
}
