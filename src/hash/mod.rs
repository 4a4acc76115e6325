//! Hash functions used by the signature scheme.
//!
//! Ed25519 needs exactly one hash: SHA-512, taken from the RustCrypto
//! `sha2` crate.

use sha2::{Digest, Sha512};

/// Computes SHA-512 over the concatenation of `parts`.
///
/// Each part is fed to the same hasher in order, so callers never build
/// the concatenation themselves.
pub(crate) fn sha512(parts: &[&[u8]]) -> [u8; 64] {
    let mut hasher = Sha512::new();
    for part in parts {
        hasher.update(part);
    }

    let mut digest = [0u8; 64];
    digest.copy_from_slice(&hasher.finalize());
    digest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        let expected = "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce\
                        47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e";
        assert_eq!(hex::encode(sha512(&[])), expected);
    }

    #[test]
    fn parts_are_concatenated() {
        assert_eq!(
            sha512(&[&b"ab"[..], &b""[..], &b"c"[..]]),
            sha512(&[&b"abc"[..]])
        );
    }
}
