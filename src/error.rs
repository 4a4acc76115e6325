use thiserror::Error;

/// Errors reported by the typed key API and by [`exchange`](crate::exchange).
///
/// Every variant describes untrusted input; none of them indicates an
/// internal failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A byte input had the wrong size.
    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// A 32-byte string does not encode a point on edwards25519.
    #[error("invalid curve point encoding")]
    InvalidPoint,

    /// The `S` half of a signature is not reduced modulo the group order.
    #[error("signature scalar is not canonical")]
    NonCanonicalScalar,

    /// The signature is well formed but does not verify.
    #[error("signature verification failed")]
    InvalidSignature,

    /// X25519 produced the all-zero shared secret (small-order peer key).
    #[error("degenerate X25519 shared secret")]
    DegenerateSharedSecret,
}

/// Result type for this crate.
pub type Result<T> = core::result::Result<T, Error>;
