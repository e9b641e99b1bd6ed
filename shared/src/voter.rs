use sha2::{Sha256, Digest};
use std::fmt;

/// Anonymous, stable identity of a caller: the SHA-256 of its network address
/// as 64 lowercase hex characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VoterId(String);

impl VoterId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First characters of the digest, enough to correlate log lines.
    pub fn short(&self) -> &str {
        self.0.get(..8).unwrap_or(&self.0)
    }
}

impl fmt::Display for VoterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn resolve(address: &str) -> VoterId {
    let mut hasher = Sha256::new();
    hasher.update(address.as_bytes());
    VoterId(format!("{:x}", hasher.finalize()))
}
