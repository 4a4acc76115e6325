//! Ed25519 signatures and X25519 key agreement over Curve25519
//!
//! This crate implements the two standard uses of Curve25519 on top of a
//! single field and group implementation:
//!
//! - **Ed25519** digital signatures (RFC 8032, pure variant),
//! - **X25519** Diffie–Hellman key agreement (RFC 7748),
//!
//! together with the conversion that lets one Ed25519 identity key also be
//! used for X25519.
//!
//! The focus is on **clarity, predictability, and auditability**. Every
//! operation is a pure function over fixed-size byte arrays: there is no
//! I/O, no global mutable state, and no randomness. Callers bring their own
//! 32-byte secrets.
//!
//! # Module overview
//!
//! - `primitives`
//!   Field arithmetic modulo `p = 2²⁵⁵ − 19` (five 51-bit limbs) and scalar
//!   arithmetic modulo the group order `ℓ`. Crate-private.
//!
//! - `curve`
//!   The edwards25519 group in extended coordinates: complete addition,
//!   doubling, point compression and decompression, and scalar
//!   multiplication. With the `precomputed-tables` feature (on by
//!   default), multiplication by the base point goes through a table of
//!   4224 precomputed multiples built once on first use. Crate-private.
//!
//! - `hash`
//!   The SHA-512 adapter used by Ed25519. Crate-private.
//!
//! - `keys`
//!   Key material and key agreement:
//!   - the X25519 Montgomery ladder (`keys::x25519`),
//!   - Ed25519 to X25519 key conversion (`keys::convert`).
//!
//! - `signatures`
//!   Ed25519 key generation, signing and verification, both as byte-level
//!   functions and as typed `SecretKey` / `PublicKey` / `Signature`
//!   wrappers.
//!
//! # Quick start
//!
//! ```
//! use curve25519::{convert_public, convert_secret, exchange, generate, sign, verify};
//!
//! let alice = [1u8; 32];
//! let bob = [2u8; 32];
//!
//! let alice_public = generate(&alice);
//! let signature = sign(&alice, b"hello");
//! assert!(verify(&alice_public, b"hello", &signature));
//!
//! let shared_ab = exchange(&convert_secret(&alice), &convert_public(&generate(&bob))).unwrap();
//! let shared_ba = exchange(&convert_secret(&bob), &convert_public(&alice_public)).unwrap();
//! assert_eq!(shared_ab, shared_ba);
//! ```
//!
//! # Errors
//!
//! Byte-level functions keep their simple shapes: `verify` returns `bool`
//! and `exchange` returns [`Result`], failing only for an all-zero shared
//! secret. The typed API reports every rejection through [`Error`]. No
//! operation panics on untrusted input.
//!
//! # Side channels
//!
//! Operations on secrets (the X25519 ladder, fixed-base multiplication,
//! scalar arithmetic) run without secret-dependent branches or memory
//! indices. Verification and point decompression only handle public data
//! and may branch. Secret intermediates are wiped with `zeroize`.
//!
//! This crate is not externally audited.

mod curve;
mod error;
mod hash;
mod primitives;

pub mod keys;
pub mod signatures;

pub use error::{Error, Result};
pub use keys::x25519::{derive, exchange};
pub use keys::{convert_public, convert_secret};
pub use signatures::ed25519::{generate, sign, verify};
