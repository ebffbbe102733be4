//! Hierarchical key derivation
//!
//! A deliberately small BIP32-style scheme: HMAC-SHA512 turns a seed into a
//! master key and a parent key into children, hardened or not. The HMAC
//! output is split directly into private key and chain code; no modular
//! addition of the parent key is performed.

use crate::error::WalletResult;
use crate::keys::PrivateKey;
use btcrypt_params::bip39::{
    CHAIN_CODE_SIZE, EXTENDED_PRIVATE_KEY_SIZE, HARDENED_OFFSET, MASTER_KEY_HMAC_KEY,
};
use byteorder::{BigEndian, ByteOrder};
use hmac::{Hmac, Mac};
use sha2::Sha512;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

type HmacSha512 = Hmac<Sha512>;

/// An extended private key: key material plus the chain code that seeds
/// child derivation. Zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ExtendedKey {
    private_key: [u8; EXTENDED_PRIVATE_KEY_SIZE],
    chain_code: [u8; CHAIN_CODE_SIZE],
}

impl ExtendedKey {
    /// Derive the master key from a seed: HMAC-SHA512 keyed with
    /// "Bitcoin seed", left half private key, right half chain code.
    pub fn master_from_seed(seed: &[u8]) -> Self {
        let mut mac = HmacSha512::new_from_slice(MASTER_KEY_HMAC_KEY)
            .expect("HMAC-SHA512 accepts keys of any length");
        mac.update(seed);
        Self::split(&mac.finalize().into_bytes())
    }

    /// Derive a child key at the given index.
    ///
    /// Hardened derivation mixes in the parent private key under an index
    /// offset by 2³¹; normal derivation mixes in the serialized parent
    /// public key instead, so a leaked child plus chain code cannot walk
    /// back to the parent on the hardened path.
    pub fn derive_child(&self, index: u32, hardened: bool) -> WalletResult<Self> {
        let index = if hardened {
            index | HARDENED_OFFSET
        } else {
            index
        };
        let mut index_bytes = [0u8; 4];
        BigEndian::write_u32(&mut index_bytes, index);

        let mut mac = HmacSha512::new_from_slice(&self.chain_code)
            .expect("HMAC-SHA512 accepts keys of any length");
        if hardened {
            mac.update(&[0x00]);
            mac.update(&self.private_key);
        } else {
            let public = self.private_key()?.public_key(false)?;
            mac.update(&public.serialize());
        }
        mac.update(&index_bytes);
        Ok(Self::split(&mac.finalize().into_bytes()))
    }

    /// The private-key half as a range-checked wallet key.
    pub fn private_key(&self) -> WalletResult<PrivateKey> {
        PrivateKey::from_bytes(&self.private_key)
    }

    /// The raw private-key half.
    pub fn private_key_bytes(&self) -> &[u8; EXTENDED_PRIVATE_KEY_SIZE] {
        &self.private_key
    }

    /// The chain-code half.
    pub fn chain_code(&self) -> &[u8; CHAIN_CODE_SIZE] {
        &self.chain_code
    }

    fn split(bytes: &[u8]) -> Self {
        let mut private_key = [0u8; EXTENDED_PRIVATE_KEY_SIZE];
        let mut chain_code = [0u8; CHAIN_CODE_SIZE];
        private_key.copy_from_slice(&bytes[..EXTENDED_PRIVATE_KEY_SIZE]);
        chain_code.copy_from_slice(&bytes[EXTENDED_PRIVATE_KEY_SIZE..]);
        ExtendedKey {
            private_key,
            chain_code,
        }
    }
}

// Never print key material
impl fmt::Debug for ExtendedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ExtendedKey(<secret>)")
    }
}
