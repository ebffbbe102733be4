//! BIP39 mnemonic and BIP32-style derivation constants

/// Required number of entries in a mnemonic word list
pub const WORDLIST_SIZE: usize = 2048;

/// Number of entropy-plus-checksum bits encoded by one word
pub const BITS_PER_WORD: usize = 11;

/// Permitted entropy sizes in bits
pub const VALID_ENTROPY_BITS: [usize; 5] = [128, 160, 192, 224, 256];

/// PBKDF2-HMAC-SHA512 iteration count for seed derivation
pub const PBKDF2_ROUNDS: u32 = 2048;

/// Derived seed length in bytes
pub const SEED_SIZE: usize = 64;

/// Salt prefix for seed derivation; the passphrase is appended to it
pub const SALT_PREFIX: &str = "mnemonic";

/// HMAC-SHA512 key for master-key derivation from a seed
pub const MASTER_KEY_HMAC_KEY: &[u8] = b"Bitcoin seed";

/// Offset marking a hardened child index
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

/// Private-key half of an extended key in bytes
pub const EXTENDED_PRIVATE_KEY_SIZE: usize = 32;

/// Chain-code half of an extended key in bytes
pub const CHAIN_CODE_SIZE: usize = 32;
