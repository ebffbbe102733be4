//! Constants for the btcrypt library
//!
//! This crate holds nothing but data: the secp256k1 curve parameters, the
//! Bitcoin network version bytes, and the BIP39/BIP32 derivation constants.
//! Keeping them in one dependency-free crate lets every other crate in the
//! workspace agree on a single source of truth.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod bip39;
pub mod bitcoin;
pub mod secp256k1;
