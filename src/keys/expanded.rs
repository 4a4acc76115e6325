use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::curve::EdwardsPoint;
use crate::hash::sha512;
use crate::keys::clamp;
use crate::primitives::Scalar;

/// An Ed25519 secret after hashing and pruning (RFC 8032 §5.1.5).
///
/// `SHA-512(secret)` is split in two halves:
/// - the low half, clamped, is the secret exponent `a`,
/// - the high half is the prefix that keys the deterministic nonce.
///
/// Both halves are wiped when the value is dropped.
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct ExpandedSecret {
    scalar_bytes: [u8; 32],
    prefix: [u8; 32],
}

impl ExpandedSecret {
    pub(crate) fn from_secret(secret: &[u8; 32]) -> Self {
        let mut digest = sha512(&[secret.as_slice()]);

        let mut scalar_bytes = [0u8; 32];
        let mut prefix = [0u8; 32];
        scalar_bytes.copy_from_slice(&digest[..32]);
        prefix.copy_from_slice(&digest[32..]);
        digest.zeroize();

        clamp(&mut scalar_bytes);

        Self {
            scalar_bytes,
            prefix,
        }
    }

    /// The clamped exponent bytes, before reduction modulo ℓ.
    ///
    /// This is also a valid X25519 secret.
    pub(crate) fn scalar_bytes(&self) -> [u8; 32] {
        self.scalar_bytes
    }

    /// The exponent `a`, reduced modulo ℓ.
    pub(crate) fn scalar(&self) -> Scalar {
        Scalar::from_bytes_mod_order(&self.scalar_bytes)
    }

    pub(crate) fn prefix(&self) -> &[u8; 32] {
        &self.prefix
    }

    /// Returns the compressed public key `a·B`.
    pub(crate) fn public_key(&self) -> [u8; 32] {
        let mut a = self.scalar();
        let public = EdwardsPoint::mul_base(&a).compress();
        a.zeroize();

        public
    }
}
