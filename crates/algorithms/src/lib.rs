//! Cryptographic primitives for Bitcoin wallet key material
//!
//! This crate provides the arithmetic core of the btcrypt workspace: affine
//! secp256k1 elliptic-curve operations, the two standard Bitcoin hash
//! pipelines, and the Base58 codec. Everything here is a pure, synchronous
//! function over immutable inputs; no I/O, no shared mutable state.
//!
//! # Security Features
//!
//! - Secret scalars are zeroized on drop
//! - Constant-time limb selection in the field arithmetic
//! - Every derived point is re-validated against the curve equation

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Elliptic curve implementations
pub mod ec;
pub use ec::secp256k1::{FieldElement, Point, Scalar};

// Bitcoin hash pipelines
pub mod hash;
pub use hash::{hash160, sha256d};

// Base58 codec
pub mod base58;
