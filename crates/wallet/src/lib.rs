//! Bitcoin wallet key material
//!
//! This crate composes the primitives from `btcrypt-algorithms` into the
//! artifacts a wallet actually handles: private/public key pairs, P2PKH and
//! P2SH addresses, WIF-encoded private keys, BIP39-style mnemonics, and
//! BIP32-style extended keys.
//!
//! Every operation is a pure function over its inputs; the only ambient
//! dependency is the operating system CSPRNG used by key and entropy
//! generation, and a failure there is a hard error.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod address;
pub mod error;
pub mod hd;
pub mod keys;
pub mod mnemonic;

pub use error::{WalletError, WalletResult};
pub use hd::ExtendedKey;
pub use keys::{Network, PrivateKey, PublicKey};
pub use mnemonic::{Mnemonic, WordList};
