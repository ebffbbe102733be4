//! Koblitz secp256k1 Elliptic Curve Primitives
//!
//! This module implements the secp256k1 elliptic curve operations.
//! The curve equation is y² = x³ + 7 over the prime field F_p where:
//! - p = 2^256 - 2^32 - 977
//! - The curve order n = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141
//!
//! The point at infinity is modeled explicitly as the group identity, so
//! scalar multiplication by zero and additions of mirror-image points have
//! well-defined results instead of raising errors.

mod field;
mod point;
mod scalar;

pub use field::FieldElement;
pub use point::Point;
pub use scalar::Scalar;

use crate::error::Result;
use btcrypt_params::secp256k1::{FIELD_ELEMENT_SIZE, G_X, G_Y};

/// Get the standard base point G of the secp256k1 curve
pub fn base_point_g() -> Point {
    Point::from_coordinates(&G_X, &G_Y).expect("Standard base point must be valid")
}

/// Scalar multiplication with the base point: scalar * G
pub fn scalar_mult_base_g(scalar: &Scalar) -> Result<Point> {
    let g = base_point_g();
    g.mul(scalar)
}

/// Check whether affine coordinates satisfy the curve equation
/// y² ≡ x³ + 7 (mod p).
pub fn is_on_curve(x: &[u8; FIELD_ELEMENT_SIZE], y: &[u8; FIELD_ELEMENT_SIZE]) -> bool {
    match (FieldElement::from_bytes(x), FieldElement::from_bytes(y)) {
        (Ok(x_fe), Ok(y_fe)) => Point::is_on_curve(&x_fe, &y_fe),
        _ => false,
    }
}

#[cfg(test)]
mod tests;
