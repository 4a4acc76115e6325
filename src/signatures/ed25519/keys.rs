//! Typed Ed25519 keys and signatures.
//!
//! These wrappers carry the same bytes as the functions in `core` but
//! encode their invariants in the type: a [`PublicKey`] always decodes to
//! a curve point, a [`Signature`] is always 64 bytes, and a [`SecretKey`]
//! is wiped when dropped.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::core::{
    PUBLIC_KEY_LENGTH, SECRET_KEY_LENGTH, SIGNATURE_LENGTH, sign_expanded, verify_checked,
};
use crate::curve::EdwardsPoint;
use crate::error::{Error, Result};
use crate::keys::convert::convert_public;
use crate::keys::expanded::ExpandedSecret;

/// An Ed25519 secret key: the 32-byte seed of RFC 8032.
///
/// The seed is zeroized on drop and never printed by `Debug`.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey([u8; SECRET_KEY_LENGTH]);

impl SecretKey {
    /// Wraps a 32-byte seed. Every seed is a valid secret key.
    pub fn from_bytes(bytes: &[u8; SECRET_KEY_LENGTH]) -> Self {
        Self(*bytes)
    }

    /// Wraps a seed given as a slice.
    ///
    /// ## Errors
    ///
    /// [`Error::InvalidLength`] if `bytes` is not 32 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes: &[u8; SECRET_KEY_LENGTH] =
            bytes.try_into().map_err(|_| Error::InvalidLength {
                expected: SECRET_KEY_LENGTH,
                actual: bytes.len(),
            })?;

        Ok(Self::from_bytes(bytes))
    }

    /// Returns the seed bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; SECRET_KEY_LENGTH] {
        &self.0
    }

    /// Derives the matching public key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey(ExpandedSecret::from_secret(&self.0).public_key())
    }

    /// Signs `message`.
    ///
    /// Expands the seed once and reuses it for both the public key and
    /// the signature.
    pub fn sign(&self, message: &[u8]) -> Signature {
        let expanded = ExpandedSecret::from_secret(&self.0);
        let public = expanded.public_key();

        Signature(sign_expanded(&expanded, &public, message))
    }

    /// Returns the X25519 secret key with the same exponent.
    pub fn to_x25519(&self) -> [u8; 32] {
        ExpandedSecret::from_secret(&self.0).scalar_bytes()
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(..)")
    }
}

/// An Ed25519 public key.
///
/// Construction checks that the encoding is canonical and decodes to a
/// point on the curve, so holding a `PublicKey` means the point is valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; PUBLIC_KEY_LENGTH]);

impl PublicKey {
    /// Validates and wraps a compressed point.
    ///
    /// ## Errors
    ///
    /// [`Error::InvalidPoint`] if `bytes` is not a canonical encoding of a
    /// point on edwards25519.
    pub fn from_bytes(bytes: &[u8; PUBLIC_KEY_LENGTH]) -> Result<Self> {
        EdwardsPoint::decompress(bytes).ok_or(Error::InvalidPoint)?;
        Ok(Self(*bytes))
    }

    /// Validates and wraps a compressed point given as a slice.
    ///
    /// ## Errors
    ///
    /// [`Error::InvalidLength`] for a slice that is not 32 bytes, otherwise
    /// as [`PublicKey::from_bytes`].
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes: &[u8; PUBLIC_KEY_LENGTH] =
            bytes.try_into().map_err(|_| Error::InvalidLength {
                expected: PUBLIC_KEY_LENGTH,
                actual: bytes.len(),
            })?;

        Self::from_bytes(bytes)
    }

    /// Returns the compressed point encoding.
    #[inline]
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        self.0
    }

    /// Borrows the compressed point encoding.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.0
    }

    /// Verifies `signature` over `message`.
    ///
    /// ## Errors
    ///
    /// - [`Error::NonCanonicalScalar`] if `S ≥ ℓ`,
    /// - [`Error::InvalidPoint`] if `R` does not decode,
    /// - [`Error::InvalidSignature`] if the verification equation fails.
    pub fn verify(&self, message: &[u8], signature: &Signature) -> Result<()> {
        verify_checked(&self.0, message, &signature.0)
    }

    /// Returns the X25519 public key of the same point.
    pub fn to_x25519(&self) -> [u8; 32] {
        convert_public(&self.0)
    }
}

impl From<&SecretKey> for PublicKey {
    fn from(secret: &SecretKey) -> Self {
        secret.public_key()
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_slice(bytes)
    }
}

/// An Ed25519 signature `R ‖ S`.
///
/// Only the length is checked on construction; `S` and `R` are checked
/// during verification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Signature([u8; SIGNATURE_LENGTH]);

impl Signature {
    /// Wraps 64 signature bytes `R ‖ S` without checking them.
    pub fn from_bytes(bytes: &[u8; SIGNATURE_LENGTH]) -> Self {
        Self(*bytes)
    }

    /// Wraps a signature given as a slice.
    ///
    /// ## Errors
    ///
    /// [`Error::InvalidLength`] if `bytes` is not 64 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes: &[u8; SIGNATURE_LENGTH] =
            bytes.try_into().map_err(|_| Error::InvalidLength {
                expected: SIGNATURE_LENGTH,
                actual: bytes.len(),
            })?;

        Ok(Self::from_bytes(bytes))
    }

    /// Returns the 64-byte encoding `R ‖ S`.
    #[inline]
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LENGTH] {
        self.0
    }

    /// The compressed nonce commitment `R`.
    pub fn r_bytes(&self) -> [u8; 32] {
        let mut r = [0u8; 32];
        r.copy_from_slice(&self.0[..32]);
        r
    }

    /// The scalar half `S`, little-endian.
    pub fn s_bytes(&self) -> [u8; 32] {
        let mut s = [0u8; 32];
        s.copy_from_slice(&self.0[32..]);
        s
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_slice(bytes)
    }
}
