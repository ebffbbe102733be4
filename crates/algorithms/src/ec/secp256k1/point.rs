//! secp256k1 elliptic curve point operations

use crate::ec::secp256k1::{field::FieldElement, scalar::Scalar};
use crate::error::{validate, Error, Result};
use btcrypt_params::secp256k1::{
    B, FIELD_ELEMENT_SIZE, POINT_COMPRESSED_SIZE, POINT_UNCOMPRESSED_SIZE, TAG_COMPRESSED_EVEN,
    TAG_COMPRESSED_ODD, TAG_UNCOMPRESSED,
};
use subtle::Choice;

/// A point on the secp256k1 elliptic curve in affine coordinates.
///
/// The point at infinity (group identity) is represented explicitly, so the
/// group law is total: doubling a point with y = 0, adding mirror-image
/// points, and multiplying by a multiple of the order all land on it.
#[derive(Clone, Debug)]
pub struct Point {
    pub(crate) is_identity: Choice,
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        let self_is_identity: bool = self.is_identity.into();
        let other_is_identity: bool = other.is_identity.into();
        if self_is_identity || other_is_identity {
            return self_is_identity == other_is_identity;
        }
        self.x == other.x && self.y == other.y
    }
}

impl Point {
    /// Create a new point from affine coordinates.
    ///
    /// Returns an error if the coordinates don't satisfy the curve equation.
    pub fn from_coordinates(
        x: &[u8; FIELD_ELEMENT_SIZE],
        y: &[u8; FIELD_ELEMENT_SIZE],
    ) -> Result<Self> {
        let x_fe = FieldElement::from_bytes(x)?;
        let y_fe = FieldElement::from_bytes(y)?;
        if !Self::is_on_curve(&x_fe, &y_fe) {
            return Err(Error::param(
                "secp256k1 point",
                "coordinates do not satisfy the curve equation",
            ));
        }
        Ok(Point {
            is_identity: Choice::from(0),
            x: x_fe,
            y: y_fe,
        })
    }

    /// Create the identity point (point at infinity).
    pub fn identity() -> Self {
        Point {
            is_identity: Choice::from(1),
            x: FieldElement::zero(),
            y: FieldElement::zero(),
        }
    }

    /// Check if this point is the identity element.
    pub fn is_identity(&self) -> bool {
        self.is_identity.into()
    }

    /// Check if this point is valid (on the curve).
    pub fn is_valid(&self) -> bool {
        if self.is_identity() {
            return true;
        }
        Self::is_on_curve(&self.x, &self.y)
    }

    /// Get the x-coordinate of this point as big-endian bytes.
    pub fn x_coordinate_bytes(&self) -> [u8; FIELD_ELEMENT_SIZE] {
        self.x.to_bytes()
    }

    /// Get the y-coordinate of this point as big-endian bytes.
    pub fn y_coordinate_bytes(&self) -> [u8; FIELD_ELEMENT_SIZE] {
        self.y.to_bytes()
    }

    /// Return true if the y-coordinate is odd.
    pub fn y_is_odd(&self) -> bool {
        self.y.is_odd()
    }

    /// Serialize this point in uncompressed format: 0x04 ‖ x ‖ y.
    pub fn serialize_uncompressed(&self) -> [u8; POINT_UNCOMPRESSED_SIZE] {
        let mut out = [0u8; POINT_UNCOMPRESSED_SIZE];
        if self.is_identity() {
            return out;
        }
        out[0] = TAG_UNCOMPRESSED;
        out[1..33].copy_from_slice(&self.x.to_bytes());
        out[33..].copy_from_slice(&self.y.to_bytes());
        out
    }

    /// Deserialize a point from uncompressed format.
    ///
    /// Returns an error if the bytes don't represent a valid point.
    pub fn deserialize_uncompressed(bytes: &[u8]) -> Result<Self> {
        validate::length(
            "secp256k1 uncompressed point",
            bytes.len(),
            POINT_UNCOMPRESSED_SIZE,
        )?;

        if bytes.iter().all(|&b| b == 0) {
            return Ok(Self::identity());
        }

        if bytes[0] != TAG_UNCOMPRESSED {
            return Err(Error::param(
                "secp256k1 point",
                "invalid uncompressed point prefix (expected 0x04)",
            ));
        }

        let mut x_bytes = [0u8; FIELD_ELEMENT_SIZE];
        let mut y_bytes = [0u8; FIELD_ELEMENT_SIZE];
        x_bytes.copy_from_slice(&bytes[1..33]);
        y_bytes.copy_from_slice(&bytes[33..65]);

        Self::from_coordinates(&x_bytes, &y_bytes)
    }

    /// Serialize this point in compressed format: 0x02/0x03 ‖ x by y-parity.
    pub fn serialize_compressed(&self) -> [u8; POINT_COMPRESSED_SIZE] {
        let mut out = [0u8; POINT_COMPRESSED_SIZE];
        if self.is_identity() {
            return out;
        }
        out[0] = if self.y.is_odd() {
            TAG_COMPRESSED_ODD
        } else {
            TAG_COMPRESSED_EVEN
        };
        out[1..].copy_from_slice(&self.x.to_bytes());
        out
    }

    /// Deserialize a point from compressed format.
    ///
    /// Recovers y from the curve equation and the parity tag. Returns an
    /// error if x has no square root on the curve.
    pub fn deserialize_compressed(bytes: &[u8]) -> Result<Self> {
        validate::length(
            "secp256k1 compressed point",
            bytes.len(),
            POINT_COMPRESSED_SIZE,
        )?;
        if bytes.iter().all(|&b| b == 0) {
            return Ok(Self::identity());
        }
        let tag = bytes[0];
        if tag != TAG_COMPRESSED_EVEN && tag != TAG_COMPRESSED_ODD {
            return Err(Error::param(
                "secp256k1 point",
                "invalid compressed point prefix",
            ));
        }
        let mut x_bytes = [0u8; FIELD_ELEMENT_SIZE];
        x_bytes.copy_from_slice(&bytes[1..]);
        let x_fe = FieldElement::from_bytes(&x_bytes)?;
        // y² = x³ + 7
        let rhs = x_fe.square().mul(&x_fe).add(&FieldElement::from_u32(B));
        let y_fe = rhs.sqrt().ok_or_else(|| {
            Error::param("secp256k1 point", "x-coordinate has no point on the curve")
        })?;
        let y_matches_tag = y_fe.is_odd() == (tag == TAG_COMPRESSED_ODD);
        let y_final = if y_matches_tag { y_fe } else { y_fe.negate() };
        Ok(Point {
            is_identity: Choice::from(0),
            x: x_fe,
            y: y_final,
        })
    }

    /// Double a point (add it to itself).
    pub fn double(&self) -> Self {
        // Identity or y = 0 (a two-torsion point) double to the identity
        if self.is_identity() || self.y.is_zero() {
            return Self::identity();
        }

        // λ = (3·x²) / (2·y); the curve's a-coefficient is zero
        let x_sq = self.x.square();
        let three_x_sq = x_sq.add(&x_sq).add(&x_sq);
        let two_y = self.y.double();
        let inv_two_y = two_y.invert().expect("2·y ≠ 0 for non-identity point");
        let lambda = three_x_sq.mul(&inv_two_y);

        // x₃ = λ² − 2·x₁
        let x3 = lambda.square().sub(&self.x.double());

        // y₃ = λ·(x₁ − x₃) − y₁
        let y3 = lambda.mul(&self.x.sub(&x3)).sub(&self.y);

        Point {
            is_identity: Choice::from(0),
            x: x3,
            y: y3,
        }
    }

    /// Add two points using the group law.
    pub fn add(&self, other: &Self) -> Self {
        if self.is_identity() {
            return other.clone();
        }
        if other.is_identity() {
            return self.clone();
        }
        if self.x == other.x {
            if self.y == other.y {
                return self.double();
            }
            // Mirror-image points sum to the identity
            return Self::identity();
        }

        // λ = (y₁ − y₂) / (x₁ − x₂)
        let dx = self.x.sub(&other.x);
        let dy = self.y.sub(&other.y);
        let inv_dx = dx.invert().expect("x₁ ≠ x₂ gives a nonzero denominator");
        let lambda = dy.mul(&inv_dx);

        // x₃ = λ² − x₁ − x₂
        let x3 = lambda.square().sub(&self.x).sub(&other.x);

        // y₃ = λ·(x₁ − x₃) − y₁
        let y3 = lambda.mul(&self.x.sub(&x3)).sub(&self.y);

        Point {
            is_identity: Choice::from(0),
            x: x3,
            y: y3,
        }
    }

    /// Scalar multiplication: compute scalar * self.
    ///
    /// Binary double-and-add over the scalar bits, most significant first,
    /// starting from the identity. The result is re-validated against the
    /// curve equation before being returned.
    pub fn mul(&self, scalar: &Scalar) -> Result<Self> {
        if scalar.is_zero() {
            return Ok(Self::identity());
        }
        let mut result = Self::identity();
        for byte in scalar.as_bytes().iter() {
            for bit_pos in (0..8).rev() {
                result = result.double();
                if (byte >> bit_pos) & 1 == 1 {
                    result = result.add(self);
                }
            }
        }
        if !result.is_valid() {
            return Err(Error::PointNotOnCurve {
                context: "scalar multiplication",
            });
        }
        Ok(result)
    }

    pub(crate) fn is_on_curve(x: &FieldElement, y: &FieldElement) -> bool {
        let y_squared = y.square();
        let x_cubed = x.square().mul(x);
        let rhs = x_cubed.add(&FieldElement::from_u32(B));
        y_squared == rhs
    }
}
