/// Ledger-independent mint-pass validation error.
/// Variants carry the byte length that was actually supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassError {
    InvalidPublicKey(usize),
    InvalidSignature(usize),
    InvalidNonce(usize),
}

impl std::fmt::Display for PassError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPublicKey(len) => {
                write!(f, "invalid ed25519 public key: got {len} bytes, want 32")
            }
            Self::InvalidSignature(len) => {
                write!(f, "invalid ed25519 signature: got {len} bytes, want 64")
            }
            Self::InvalidNonce(len) => {
                write!(f, "invalid pass nonce: got {len} bytes, want 32")
            }
        }
    }
}

impl std::error::Error for PassError {}
