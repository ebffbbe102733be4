//! # btcrypt
//!
//! A modular pure-Rust library for Bitcoin wallet cryptography.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! btcrypt = "0.1"
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several
//! sub-crates:
//!
//! - [`btcrypt-params`]: curve, network, and BIP39 constants
//! - [`btcrypt-algorithms`]: secp256k1 arithmetic, Bitcoin hashes, Base58
//! - [`btcrypt-wallet`]: keys, addresses, WIF, mnemonics, HD derivation

#![forbid(unsafe_code)]

// Core re-exports
pub use btcrypt_algorithms as algorithms;
pub use btcrypt_params as params;
pub use btcrypt_wallet as wallet;

/// Common imports for btcrypt users
pub mod prelude {
    // Key material and derivation
    pub use crate::wallet::{
        ExtendedKey, Mnemonic, Network, PrivateKey, PublicKey, WordList,
    };

    // Address construction and validation
    pub use crate::wallet::address::{p2pkh, p2sh, Address};

    // Mnemonic pipeline
    pub use crate::wallet::mnemonic::{
        entropy_to_mnemonic, generate_entropy, mnemonic_to_entropy, mnemonic_to_seed,
    };

    // Error types
    pub use crate::algorithms::error::Error as AlgorithmsError;
    pub use crate::wallet::{WalletError, WalletResult};

    // Low-level curve access
    pub use crate::algorithms::ec::secp256k1::{base_point_g, FieldElement, Point, Scalar};
}
