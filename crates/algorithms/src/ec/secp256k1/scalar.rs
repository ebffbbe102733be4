//! secp256k1 scalar values

use crate::error::{Error, Result};
use btcrypt_params::secp256k1::{N, SCALAR_SIZE};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// secp256k1 scalar value in the range [1, n-1], used as a private key
/// in elliptic curve operations. Zeroized on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Scalar([u8; SCALAR_SIZE]);

impl Scalar {
    /// Create a new scalar from big-endian bytes.
    ///
    /// Rejects zero and values not below the group order; out-of-range
    /// input is an error rather than being reduced.
    pub fn new(data: [u8; SCALAR_SIZE]) -> Result<Self> {
        if data.iter().all(|&b| b == 0) {
            return Err(Error::ScalarOutOfRange {
                reason: "scalar is zero",
            });
        }
        if data.as_slice() >= N.as_slice() {
            return Err(Error::ScalarOutOfRange {
                reason: "scalar is not below the group order",
            });
        }
        Ok(Scalar(data))
    }

    /// Parse a scalar from a hexadecimal string.
    ///
    /// Accepts up to 64 hex characters in either case; shorter input is
    /// left-padded with zeros to the full 32-byte width.
    pub fn from_hex(s: &str) -> Result<Self> {
        crate::validate::max_length("secp256k1 scalar hex", s.len(), SCALAR_SIZE * 2)?;
        let padded = format!("{:0>64}", s);
        let mut bytes = [0u8; SCALAR_SIZE];
        hex::decode_to_slice(&padded, &mut bytes)
            .map_err(|_| Error::param("secp256k1 scalar hex", "invalid hexadecimal digit"))?;
        let scalar = Self::new(bytes);
        bytes.zeroize();
        scalar
    }

    /// Serialize this scalar to big-endian bytes.
    pub fn serialize(&self) -> [u8; SCALAR_SIZE] {
        self.0
    }

    /// Borrow the big-endian byte representation.
    pub fn as_bytes(&self) -> &[u8; SCALAR_SIZE] {
        &self.0
    }

    /// Lowercase hexadecimal representation, zero-padded to 64 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Check if this scalar is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }
}

// Never print key material
impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Scalar(<secret>)")
    }
}
