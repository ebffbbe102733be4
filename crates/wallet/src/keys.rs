//! Private and public key types

use crate::address;
use crate::error::{WalletError, WalletResult};
use btcrypt_algorithms::ec::secp256k1::{scalar_mult_base_g, Point, Scalar};
use btcrypt_algorithms::Error as AlgorithmsError;
use btcrypt_params::bitcoin::{
    P2PKH_VERSION_MAINNET, P2PKH_VERSION_TESTNET, P2SH_VERSION_MAINNET, WIF_PREFIX_MAINNET,
    WIF_PREFIX_TESTNET,
};
use btcrypt_params::secp256k1::{POINT_COMPRESSED_SIZE, POINT_UNCOMPRESSED_SIZE, SCALAR_SIZE};
use rand::rngs::OsRng;
use rand::RngCore;
use std::fmt;
use zeroize::Zeroizing;

/// The Bitcoin network a key or address belongs to.
///
/// Selects the version byte prepended to address payloads and the WIF
/// prefix; nothing else about the key material differs between networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    /// The production network
    Mainnet,
    /// The test network
    Testnet,
}

impl Network {
    /// Version byte for P2PKH addresses on this network.
    pub fn p2pkh_version(self) -> u8 {
        match self {
            Network::Mainnet => P2PKH_VERSION_MAINNET,
            Network::Testnet => P2PKH_VERSION_TESTNET,
        }
    }

    /// Version byte for P2SH addresses.
    pub fn p2sh_version(self) -> u8 {
        P2SH_VERSION_MAINNET
    }

    /// WIF prefix byte for private keys on this network.
    pub fn wif_prefix(self) -> u8 {
        match self {
            Network::Mainnet => WIF_PREFIX_MAINNET,
            Network::Testnet => WIF_PREFIX_TESTNET,
        }
    }

    /// Recover the network from a decoded WIF prefix byte.
    pub fn from_wif_prefix(prefix: u8) -> Option<Self> {
        match prefix {
            WIF_PREFIX_MAINNET => Some(Network::Mainnet),
            WIF_PREFIX_TESTNET => Some(Network::Testnet),
            _ => None,
        }
    }
}

/// A secp256k1 private key. Zeroized on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey {
    scalar: Scalar,
}

impl PrivateKey {
    /// Create a private key from 32 big-endian bytes.
    ///
    /// The value must lie in [1, n-1]; out-of-range input is rejected, not
    /// reduced.
    pub fn from_bytes(bytes: &[u8; SCALAR_SIZE]) -> WalletResult<Self> {
        Ok(PrivateKey {
            scalar: Scalar::new(*bytes)?,
        })
    }

    /// Parse a private key from a hexadecimal string of up to 64 digits.
    pub fn from_hex(s: &str) -> WalletResult<Self> {
        Ok(PrivateKey {
            scalar: Scalar::from_hex(s)?,
        })
    }

    /// Generate a fresh private key from the operating system CSPRNG.
    ///
    /// Candidates outside [1, n-1] are discarded and redrawn. A failing
    /// random source is an error, never silently replaced by a weaker one.
    pub fn generate() -> WalletResult<Self> {
        let mut rng = OsRng;
        let mut bytes = Zeroizing::new([0u8; SCALAR_SIZE]);
        loop {
            rng.try_fill_bytes(&mut bytes[..])
                .map_err(|_| WalletError::WeakRandomSource)?;
            match Scalar::new(*bytes) {
                Ok(scalar) => return Ok(PrivateKey { scalar }),
                Err(_) => continue,
            }
        }
    }

    /// The key as 32 big-endian bytes, zeroized when the copy is dropped.
    pub fn to_bytes(&self) -> Zeroizing<[u8; SCALAR_SIZE]> {
        Zeroizing::new(self.scalar.serialize())
    }

    /// Lowercase hexadecimal representation, zero-padded to 64 characters.
    pub fn to_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(self.scalar.to_hex())
    }

    /// Borrow the underlying scalar.
    pub fn scalar(&self) -> &Scalar {
        &self.scalar
    }

    /// Derive the public key for this private key.
    pub fn public_key(&self, compressed: bool) -> WalletResult<PublicKey> {
        PublicKey::from_private(self, compressed)
    }

    /// Export this key in Wallet Import Format.
    pub fn to_wif(&self, network: Network, compressed: bool) -> String {
        address::encode_wif(self.scalar.as_bytes(), network, compressed)
    }

    /// Import a key from Wallet Import Format.
    ///
    /// Returns the key together with the network and compression flag the
    /// WIF string carried.
    pub fn from_wif(wif: &str) -> WalletResult<(Self, Network, bool)> {
        let (bytes, network, compressed) = address::decode_wif(wif)?;
        Ok((Self::from_bytes(&bytes)?, network, compressed))
    }
}

// Never print key material
impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(<secret>)")
    }
}

/// A secp256k1 public key: a curve point plus its preferred encoding.
#[derive(Clone, Debug, PartialEq)]
pub struct PublicKey {
    point: Point,
    compressed: bool,
}

impl PublicKey {
    /// Derive the public key point k·G for a private key.
    pub fn from_private(key: &PrivateKey, compressed: bool) -> WalletResult<Self> {
        let point = scalar_mult_base_g(key.scalar())?;
        Ok(PublicKey { point, compressed })
    }

    /// Parse a serialized public key, either 33-byte compressed or 65-byte
    /// uncompressed.
    pub fn from_bytes(bytes: &[u8]) -> WalletResult<Self> {
        match bytes.len() {
            POINT_COMPRESSED_SIZE => Ok(PublicKey {
                point: Point::deserialize_compressed(bytes)?,
                compressed: true,
            }),
            POINT_UNCOMPRESSED_SIZE => Ok(PublicKey {
                point: Point::deserialize_uncompressed(bytes)?,
                compressed: false,
            }),
            actual => Err(AlgorithmsError::Length {
                context: "serialized public key",
                expected: POINT_COMPRESSED_SIZE,
                actual,
            }
            .into()),
        }
    }

    /// Serialize this key: 0x04 ‖ x ‖ y uncompressed, or 0x02/0x03 ‖ x by
    /// y-parity when compressed.
    pub fn serialize(&self) -> Vec<u8> {
        if self.compressed {
            self.point.serialize_compressed().to_vec()
        } else {
            self.point.serialize_uncompressed().to_vec()
        }
    }

    /// The x-coordinate as 32 big-endian bytes.
    pub fn x_bytes(&self) -> [u8; 32] {
        self.point.x_coordinate_bytes()
    }

    /// The y-coordinate as 32 big-endian bytes.
    pub fn y_bytes(&self) -> [u8; 32] {
        self.point.y_coordinate_bytes()
    }

    /// Whether this key serializes in compressed form.
    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    /// Borrow the underlying curve point.
    pub fn point(&self) -> &Point {
        &self.point
    }
}
