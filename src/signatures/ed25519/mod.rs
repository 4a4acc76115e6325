//! Ed25519 signatures (RFC 8032, pure variant).
//!
//! Two layers are exposed:
//!
//! - `core`  
//!   Byte-level functions `generate`, `sign` and `verify` over fixed-size
//!   arrays. `verify` answers with a plain `bool`.
//!
//! - `keys`  
//!   Typed wrappers [`SecretKey`], [`PublicKey`] and [`Signature`]. Public
//!   keys are validated on construction, secret keys are wiped on drop,
//!   and verification reports *why* a signature was rejected.
//!
//! Both layers share the same arithmetic and produce identical bytes.
//!
//! Verification uses the cofactorless equation `[S]B = R + [k]A` and
//! rejects non-canonical `S`. Non-canonical point encodings (`y ≥ p`) are
//! rejected for both `A` and `R`.

mod core;
mod keys;

pub use self::core::{
    PUBLIC_KEY_LENGTH, SECRET_KEY_LENGTH, SIGNATURE_LENGTH, generate, sign, verify,
};
pub use self::keys::{PublicKey, SecretKey, Signature};
