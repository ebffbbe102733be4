//! Base58Check addresses and WIF private-key encoding

use crate::error::{WalletError, WalletResult};
use crate::keys::{Network, PublicKey};
use btcrypt_algorithms::{base58, hash160, sha256d};
use btcrypt_params::bitcoin::{
    ADDRESS_DECODED_SIZE, CHECKSUM_SIZE, HASH160_SIZE, P2SH_KEYHASH_PREFIX, WIF_COMPRESSION_FLAG,
    WIF_DECODED_SIZE, WIF_DECODED_SIZE_COMPRESSED,
};
use btcrypt_params::secp256k1::SCALAR_SIZE;
use std::fmt;
use std::str::FromStr;
use zeroize::{Zeroize, Zeroizing};

/// A validated Base58Check address string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Address(String);

impl Address {
    /// Borrow the address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the address, returning the string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Address {
    type Err = WalletError;

    fn from_str(s: &str) -> WalletResult<Self> {
        if is_valid(s) {
            Ok(Address(s.to_string()))
        } else {
            Err(WalletError::ChecksumMismatch)
        }
    }
}

/// Append a 4-byte double-SHA256 checksum and Base58-encode.
fn base58check(payload: &[u8]) -> String {
    let checksum = sha256d(payload);
    let mut full = Vec::with_capacity(payload.len() + CHECKSUM_SIZE);
    full.extend_from_slice(payload);
    full.extend_from_slice(&checksum[..CHECKSUM_SIZE]);
    base58::encode(&full)
}

/// Build a P2PKH address: version ‖ HASH160(pubkey) ‖ checksum.
///
/// The freshly built address is validated before being returned; a failure
/// signals an internal fault, not bad input.
pub fn p2pkh(public_key: &PublicKey, network: Network) -> WalletResult<Address> {
    p2pkh_from_hash160(&hash160(&public_key.serialize()), network)
}

/// Build a P2PKH address directly from a 20-byte public-key hash.
pub fn p2pkh_from_hash160(hash: &[u8; HASH160_SIZE], network: Network) -> WalletResult<Address> {
    let mut payload = Vec::with_capacity(1 + HASH160_SIZE);
    payload.push(network.p2pkh_version());
    payload.extend_from_slice(hash);
    let encoded = base58check(&payload);
    if !is_valid(&encoded) {
        return Err(WalletError::AddressGeneration);
    }
    Ok(Address(encoded))
}

/// Build a P2SH keyhash address.
///
/// The redeem script is a zero byte and a 20-byte push of the public key
/// hash; the address is the Base58Check of 0x05 ‖ HASH160(script).
pub fn p2sh(public_key: &PublicKey, network: Network) -> WalletResult<Address> {
    let mut script = Vec::with_capacity(P2SH_KEYHASH_PREFIX.len() + HASH160_SIZE);
    script.extend_from_slice(&P2SH_KEYHASH_PREFIX);
    script.extend_from_slice(&hash160(&public_key.serialize()));

    let mut payload = Vec::with_capacity(1 + HASH160_SIZE);
    payload.push(network.p2sh_version());
    payload.extend_from_slice(&hash160(&script));
    let encoded = base58check(&payload);
    if !is_valid(&encoded) {
        return Err(WalletError::AddressGeneration);
    }
    Ok(Address(encoded))
}

/// Validate a Base58Check address: decode, require exactly 25 bytes, and
/// compare the checksum over the first 21 bytes with the last 4.
pub fn is_valid(address: &str) -> bool {
    let raw = match base58::decode(address) {
        Ok(raw) => raw,
        Err(_) => return false,
    };
    if raw.len() != ADDRESS_DECODED_SIZE {
        return false;
    }
    let body = ADDRESS_DECODED_SIZE - CHECKSUM_SIZE;
    let checksum = sha256d(&raw[..body]);
    checksum[..CHECKSUM_SIZE] == raw[body..]
}

/// Encode a private key in Wallet Import Format:
/// prefix ‖ key ‖ [0x01 if compressed] ‖ checksum, Base58-encoded.
pub fn encode_wif(key: &[u8; SCALAR_SIZE], network: Network, compressed: bool) -> String {
    let mut payload = Vec::with_capacity(WIF_DECODED_SIZE_COMPRESSED - CHECKSUM_SIZE);
    payload.push(network.wif_prefix());
    payload.extend_from_slice(key);
    if compressed {
        payload.push(WIF_COMPRESSION_FLAG);
    }
    let encoded = base58check(&payload);
    payload.zeroize();
    encoded
}

/// Decode a Wallet Import Format string into its 32 key bytes, network, and
/// compression flag.
///
/// A corrupted checksum fails with [`WalletError::ChecksumMismatch`];
/// structural problems fail with [`WalletError::InvalidWif`].
pub fn decode_wif(wif: &str) -> WalletResult<(Zeroizing<[u8; SCALAR_SIZE]>, Network, bool)> {
    let raw = Zeroizing::new(base58::decode(wif)?);

    let compressed = match raw.len() {
        WIF_DECODED_SIZE => false,
        WIF_DECODED_SIZE_COMPRESSED => true,
        _ => return Err(WalletError::InvalidWif("decoded length must be 37 or 38 bytes")),
    };

    let body = raw.len() - CHECKSUM_SIZE;
    let checksum = sha256d(&raw[..body]);
    if checksum[..CHECKSUM_SIZE] != raw[body..] {
        return Err(WalletError::ChecksumMismatch);
    }

    let network = Network::from_wif_prefix(raw[0])
        .ok_or(WalletError::InvalidWif("unknown network prefix"))?;
    if compressed && raw[1 + SCALAR_SIZE] != WIF_COMPRESSION_FLAG {
        return Err(WalletError::InvalidWif("malformed compression flag"));
    }

    let mut key = Zeroizing::new([0u8; SCALAR_SIZE]);
    key.copy_from_slice(&raw[1..1 + SCALAR_SIZE]);
    Ok((key, network, compressed))
}
