//! Digital signature schemes.
//!
//! Each submodule corresponds to a specific signature scheme and is
//! responsible for its own key types, signing logic, and verification
//! rules. There is currently one: Ed25519 (RFC 8032), built on the
//! edwards25519 group and SHA-512.

pub mod ed25519;
