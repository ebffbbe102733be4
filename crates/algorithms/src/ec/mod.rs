//! Elliptic Curve Primitives
//!
//! This module implements the affine group law on the secp256k1 curve, the
//! only curve this workspace supports. Field elements, scalars, and points
//! are self-contained; no external bignum backend is involved.

pub mod secp256k1;

pub use secp256k1::{FieldElement, Point, Scalar};
