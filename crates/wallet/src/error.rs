//! Wallet-layer error handling

use thiserror::Error;

/// Result type for wallet operations
pub type WalletResult<T> = std::result::Result<T, WalletError>;

/// The error type for wallet operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WalletError {
    /// A primitive operation below the wallet layer failed
    #[error("Cryptography error: {0}")]
    Algorithms(#[from] btcrypt_algorithms::Error),

    /// A Base58Check checksum did not match its payload
    #[error("Checksum mismatch")]
    ChecksumMismatch,

    /// A WIF string decoded to an impossible structure
    #[error("Invalid WIF key: {0}")]
    InvalidWif(&'static str),

    /// A word list did not contain exactly 2048 distinct words
    #[error("Word list must contain exactly 2048 distinct words, got {0}")]
    InvalidWordList(usize),

    /// A mnemonic word is not present in the word list
    #[error("Word '{0}' not found in the word list")]
    UnknownWord(String),

    /// A mnemonic phrase has an impossible word count
    #[error("Invalid mnemonic length: {0} words")]
    InvalidWordCount(usize),

    /// A requested entropy size is not one of the permitted values
    #[error("Entropy size must be 128, 160, 192, 224 or 256 bits, got {0}")]
    InvalidEntropySize(usize),

    /// The system random source failed; never downgraded to a fallback
    #[error("The system random source failed or reported weak entropy")]
    WeakRandomSource,

    /// A freshly generated address failed its own validation
    #[error("Generated address failed validation")]
    AddressGeneration,
}
