// src/verifier/mod.rs
use crate::crypto::{xor_in_place, XorKey};
use crate::security::{constant_time_eq, WorkingBuffer};
use thiserror::Error;

/// Length of the compiled-in flag.
pub const FLAG_LEN: usize = 13;

/// Key the compiled-in flag was obfuscated with.
pub const FLAG_KEY: u8 = 0x42;

/// Compiled-in flag, stored only in obfuscated form.
pub const FLAG_EXPECTED: [u8; FLAG_LEN] = [
    0x11, 0x09, 0x1b, 0x6f,
    0x10, 0x07, 0x14, 0x07,
    0x6f, 0x76, 0x74, 0x7a, 0x72,
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    #[error("candidate must be exactly {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SecretError {
    #[error("expected secret is empty")]
    Empty,
}

/// Checks candidates against an obfuscated secret.
///
/// Holds the secret only in transformed form. `verify` takes `&self` and
/// touches no shared mutable state, so one verifier can be shared across
/// threads freely.
#[derive(Debug, Clone)]
pub struct SecretVerifier {
    expected: Vec<u8>,
    key: XorKey,
}

impl SecretVerifier {
    /// `expected` must already be the transformed secret and non-empty.
    pub fn new(expected: Vec<u8>, key: XorKey) -> Result<Self, SecretError> {
        if expected.is_empty() {
            return Err(SecretError::Empty);
        }
        Ok(Self { expected, key })
    }

    /// Verifier over the compiled-in flag.
    pub fn builtin() -> Self {
        Self {
            expected: FLAG_EXPECTED.to_vec(),
            key: XorKey::single(FLAG_KEY),
        }
    }

    pub fn secret_len(&self) -> usize {
        self.expected.len()
    }

    pub fn verify(&self, candidate: &[u8]) -> Result<bool, VerifyError> {
        if candidate.len() != self.expected.len() {
            log::debug!(
                "Rejecting candidate of {} bytes, expected {}",
                candidate.len(),
                self.expected.len()
            );
            return Err(VerifyError::InvalidLength {
                expected: self.expected.len(),
                actual: candidate.len(),
            });
        }

        let mut working = WorkingBuffer::copy_from(candidate);
        xor_in_place(working.as_mut_slice(), &self.key);

        Ok(constant_time_eq(working.as_slice(), &self.expected))
    }
}

impl Default for SecretVerifier {
    fn default() -> Self {
        Self::builtin()
    }
}
