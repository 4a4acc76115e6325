use zeroize::Zeroize;

use crate::curve::EdwardsPoint;
use crate::error::{Error, Result};
use crate::hash::sha512;
use crate::keys::expanded::ExpandedSecret;
use crate::primitives::Scalar;

/// Length of an Ed25519 secret key (seed), in bytes.
pub const SECRET_KEY_LENGTH: usize = 32;

/// Length of a compressed Ed25519 public key, in bytes.
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// Length of an Ed25519 signature `R ‖ S`, in bytes.
pub const SIGNATURE_LENGTH: usize = 64;

/// Derives the Ed25519 public key of `secret`.
///
/// The secret is hashed with SHA-512, the low half is clamped into the
/// exponent `a`, and the result is the compressed point `a·B`.
pub fn generate(secret: &[u8; SECRET_KEY_LENGTH]) -> [u8; PUBLIC_KEY_LENGTH] {
    ExpandedSecret::from_secret(secret).public_key()
}

/// Signs `message` with `secret`.
///
/// Signing is deterministic: the same secret and message always give the
/// same signature.
pub fn sign(secret: &[u8; SECRET_KEY_LENGTH], message: &[u8]) -> [u8; SIGNATURE_LENGTH] {
    let expanded = ExpandedSecret::from_secret(secret);
    let public = expanded.public_key();

    sign_expanded(&expanded, &public, message)
}

/// Verifies an Ed25519 signature.
///
/// Returns `false` for any malformed input (a signature that is not 64
/// bytes, `S ≥ ℓ`, an undecodable public key or `R`) as well as for
/// signatures that do not satisfy the verification equation.
pub fn verify(public: &[u8; PUBLIC_KEY_LENGTH], message: &[u8], signature: &[u8]) -> bool {
    verify_checked(public, message, signature).is_ok()
}

/// Computes `R ‖ S` for an already expanded secret and its public key.
///
/// ```text
/// r = H(prefix ‖ M) mod ℓ
/// R = r·B
/// k = H(R ‖ A ‖ M) mod ℓ
/// S = k·a + r mod ℓ
/// ```
pub(crate) fn sign_expanded(
    expanded: &ExpandedSecret,
    public: &[u8; PUBLIC_KEY_LENGTH],
    message: &[u8],
) -> [u8; SIGNATURE_LENGTH] {
    let mut a = expanded.scalar();

    let mut nonce_digest = sha512(&[expanded.prefix().as_slice(), message]);
    let mut r = Scalar::from_bytes_mod_order_wide(&nonce_digest);
    nonce_digest.zeroize();

    let r_bytes = EdwardsPoint::mul_base(&r).compress();
    let k = challenge(&r_bytes, public, message);
    let s = Scalar::mul_add(&k, &a, &r);

    a.zeroize();
    r.zeroize();

    let mut signature = [0u8; SIGNATURE_LENGTH];
    signature[..32].copy_from_slice(&r_bytes);
    signature[32..].copy_from_slice(&s.to_bytes());

    signature
}

/// Verifies a signature and reports the first reason it is rejected.
///
/// Accepts iff `[S]B = R + [k]A`. All inputs are public, so `[k]A` uses
/// variable-time multiplication.
pub(crate) fn verify_checked(
    public: &[u8; PUBLIC_KEY_LENGTH],
    message: &[u8],
    signature: &[u8],
) -> Result<()> {
    if signature.len() != SIGNATURE_LENGTH {
        return Err(Error::InvalidLength {
            expected: SIGNATURE_LENGTH,
            actual: signature.len(),
        });
    }

    let mut r_bytes = [0u8; 32];
    let mut s_bytes = [0u8; 32];
    r_bytes.copy_from_slice(&signature[..32]);
    s_bytes.copy_from_slice(&signature[32..]);

    let s = Scalar::from_canonical_bytes(&s_bytes).ok_or(Error::NonCanonicalScalar)?;
    let a = EdwardsPoint::decompress(public).ok_or(Error::InvalidPoint)?;
    let r = EdwardsPoint::decompress(&r_bytes).ok_or(Error::InvalidPoint)?;

    let k = challenge(&r_bytes, public, message);

    if EdwardsPoint::mul_base(&s) == r + a.mul_vartime(&k) {
        Ok(())
    } else {
        Err(Error::InvalidSignature)
    }
}

/// `H(R ‖ A ‖ M) mod ℓ`.
fn challenge(r_bytes: &[u8; 32], public: &[u8; PUBLIC_KEY_LENGTH], message: &[u8]) -> Scalar {
    Scalar::from_bytes_mod_order_wide(&sha512(&[
        r_bytes.as_slice(),
        public.as_slice(),
        message,
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_reports_rejection_reason() {
        let secret = [7u8; 32];
        let public = generate(&secret);
        let signature = sign(&secret, b"message");

        assert_eq!(verify_checked(&public, b"message", &signature), Ok(()));
        assert_eq!(
            verify_checked(&public, b"other", &signature),
            Err(Error::InvalidSignature)
        );
        assert_eq!(
            verify_checked(&public, b"message", &signature[..63]),
            Err(Error::InvalidLength {
                expected: 64,
                actual: 63
            })
        );

        let mut high_s = signature;
        high_s[63] |= 0xf0;
        assert_eq!(
            verify_checked(&public, b"message", &high_s),
            Err(Error::NonCanonicalScalar)
        );

        // y = p is not a canonical encoding.
        let mut bad_public = [0xffu8; 32];
        bad_public[0] = 0xed;
        bad_public[31] = 0x7f;
        assert_eq!(
            verify_checked(&bad_public, b"message", &signature),
            Err(Error::InvalidPoint)
        );
    }

    #[test]
    fn signature_r_is_nonce_commitment() {
        let secret = [42u8; 32];
        let expanded = ExpandedSecret::from_secret(&secret);
        let public = expanded.public_key();

        let signature = sign_expanded(&expanded, &public, b"abc");

        let r = Scalar::from_bytes_mod_order_wide(&sha512(&[
            expanded.prefix().as_slice(),
            b"abc".as_slice(),
        ]));
        assert_eq!(signature[..32], EdwardsPoint::mul_base(&r).compress());
        assert_eq!(signature, sign(&secret, b"abc"));
    }
}
