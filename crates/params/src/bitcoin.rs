//! Bitcoin address and WIF constants
//!
//! Version bytes and layout sizes for Base58Check-encoded artifacts. An
//! address decodes to exactly 25 bytes (version, HASH160, checksum); a WIF
//! key decodes to 37 or 38 bytes depending on the compression flag.

/// P2PKH address version byte on the main network
pub const P2PKH_VERSION_MAINNET: u8 = 0x00;

/// P2PKH address version byte on the test network
pub const P2PKH_VERSION_TESTNET: u8 = 0x6F;

/// P2SH address version byte on the main network
pub const P2SH_VERSION_MAINNET: u8 = 0x05;

/// WIF private-key prefix on the main network
pub const WIF_PREFIX_MAINNET: u8 = 0x80;

/// WIF private-key prefix on the test network
pub const WIF_PREFIX_TESTNET: u8 = 0xEF;

/// Trailing WIF byte marking a compressed public key
pub const WIF_COMPRESSION_FLAG: u8 = 0x01;

/// Decoded length of a Base58Check address in bytes
pub const ADDRESS_DECODED_SIZE: usize = 25;

/// Decoded length of an uncompressed-key WIF string in bytes
pub const WIF_DECODED_SIZE: usize = 37;

/// Decoded length of a compressed-key WIF string in bytes
pub const WIF_DECODED_SIZE_COMPRESSED: usize = 38;

/// Length of a Base58Check checksum in bytes
pub const CHECKSUM_SIZE: usize = 4;

/// Length of a HASH160 digest in bytes
pub const HASH160_SIZE: usize = 20;

/// Script prefix hashed into a P2SH keyhash address: OP_0 plus a 20-byte push
pub const P2SH_KEYHASH_PREFIX: [u8; 2] = [0x00, 0x14];
