// src/lib.rs

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use crypto::{CryptoError, XorKey};
pub use metrics::Metrics;
pub use session::{run_session, SessionError, Verdict};
pub use verifier::{SecretError, SecretVerifier, VerifyError, FLAG_LEN};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "FLAG_CHECKER_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct VerifierConfig {
    /// Obfuscated secret, hex encoded.
    pub expected_hex: String,
    /// XOR key, hex encoded. One byte or a short repeating sequence.
    pub key_hex: String,
    pub banner: String,
    pub prompt: String,
    pub success_message: String,
    pub failure_message: String,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            expected_hex: hex::encode(verifier::FLAG_EXPECTED),
            key_hex: hex::encode([verifier::FLAG_KEY]),
            banner: "=== Welcome to the CTF Challenge ===".to_string(),
            prompt: "Enter the flag: ".to_string(),
            success_message: "Correct! Here is your reward.".to_string(),
            failure_message: "Wrong flag. Try again.".to_string(),
        }
    }
}

impl VerifierConfig {
    pub fn test_config() -> Self {
        Self {
            expected_hex: hex::encode(crypto::transformed(b"test-flag", &XorKey::single(0x5a))),
            key_hex: "5a".to_string(),
            banner: "banner".to_string(),
            prompt: "> ".to_string(),
            success_message: "ok".to_string(),
            failure_message: "nope".to_string(),
        }
    }

    /// Load a JSON config. Fields left out keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Pick the config file: `FLAG_CHECKER_CONFIG` if set, otherwise
    /// `<config dir>/flag-checker/config.json` when it exists.
    pub fn resolve_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir()
            .map(|dir| dir.join("flag-checker").join("config.json"))
            .filter(|path| path.is_file())
    }

    pub fn build_verifier(&self) -> Result<SecretVerifier, ConfigError> {
        let expected = hex::decode(self.expected_hex.trim())?;
        let key_bytes = hex::decode(self.key_hex.trim())?;
        let key = XorKey::from_bytes(&key_bytes)?;
        Ok(SecretVerifier::new(expected, key)?)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid hex in config: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("invalid secret: {0}")]
    Secret(#[from] SecretError),
    #[error("invalid key: {0}")]
    Key(#[from] CryptoError),
}

/// Check `candidate` against the compiled-in flag.
pub fn verify(candidate: &[u8]) -> Result<bool, VerifyError> {
    SecretVerifier::builtin().verify(candidate)
}

pub mod crypto;
pub mod metrics;
pub mod security;
pub mod session;
pub mod verifier;
