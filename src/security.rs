// src/security.rs
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

/// Constant-time equality. Lengths are not secret, so a length mismatch
/// returns early; equal-length inputs take the same time wherever they differ.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

/// Scratch space for a transformed candidate. Wiped on drop.
pub struct WorkingBuffer {
    bytes: Vec<u8>,
}

impl WorkingBuffer {
    pub fn copy_from(source: &[u8]) -> Self {
        Self {
            bytes: source.to_vec(),
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}

impl Zeroize for WorkingBuffer {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
    }
}

impl Drop for WorkingBuffer {
    fn drop(&mut self) {
        self.zeroize();
    }
}
