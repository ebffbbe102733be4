//! BIP39-style mnemonic encoding and seed derivation
//!
//! Entropy → checksummed word sequence → PBKDF2 seed. The word list is an
//! explicit capability passed to every operation rather than process-global
//! state, so callers can mix languages freely.

use crate::error::{WalletError, WalletResult};
use btcrypt_params::bip39::{
    BITS_PER_WORD, PBKDF2_ROUNDS, SALT_PREFIX, SEED_SIZE, VALID_ENTROPY_BITS, WORDLIST_SIZE,
};
use hmac::Hmac;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256, Sha512};
use std::collections::HashSet;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// An ordered list of exactly 2048 distinct words.
///
/// Word index i encodes the 11-bit value i. The embedded English list comes
/// from the `bip39` crate; any other list can be supplied through
/// [`WordList::from_words`].
#[derive(Clone, Debug)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Build a word list from arbitrary words.
    ///
    /// Fails unless exactly 2048 distinct words are supplied.
    pub fn from_words<I, S>(words: I) -> WalletResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.len() != WORDLIST_SIZE {
            return Err(WalletError::InvalidWordList(words.len()));
        }
        let distinct: HashSet<&str> = words.iter().map(|w| w.as_str()).collect();
        if distinct.len() != WORDLIST_SIZE {
            return Err(WalletError::InvalidWordList(distinct.len()));
        }
        Ok(WordList { words })
    }

    /// The standard English word list.
    pub fn english() -> Self {
        Self::from_words(bip39::Language::English.word_list().iter().copied())
            .expect("the embedded English word list is valid")
    }

    /// The standard Portuguese word list.
    #[cfg(feature = "portuguese")]
    pub fn portuguese() -> Self {
        Self::from_words(bip39::Language::Portuguese.word_list().iter().copied())
            .expect("the embedded Portuguese word list is valid")
    }

    /// The word at an 11-bit index.
    pub fn word(&self, index: u16) -> &str {
        &self.words[index as usize]
    }

    /// The index of a word, if present.
    pub fn index_of(&self, word: &str) -> Option<u16> {
        self.words.iter().position(|w| w == word).map(|i| i as u16)
    }
}

/// A checksummed mnemonic word sequence. Zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Mnemonic {
    words: Vec<String>,
}

impl Mnemonic {
    /// The words in order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words in the sequence.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// The space-joined phrase.
    pub fn phrase(&self) -> Zeroizing<String> {
        Zeroizing::new(self.words.join(" "))
    }

    /// Derive the 64-byte seed for this mnemonic and passphrase.
    pub fn to_seed(&self, passphrase: &str) -> Zeroizing<[u8; SEED_SIZE]> {
        mnemonic_to_seed(&self.phrase(), passphrase)
    }
}

// Never print the phrase
impl fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mnemonic")
            .field("word_count", &self.words.len())
            .finish_non_exhaustive()
    }
}

/// Generate cryptographically secure entropy of the given bit size.
///
/// `bits` must be one of 128, 160, 192, 224 or 256. A failing system
/// random source is a hard error, never a fallback.
pub fn generate_entropy(bits: usize) -> WalletResult<Zeroizing<Vec<u8>>> {
    if !VALID_ENTROPY_BITS.contains(&bits) {
        return Err(WalletError::InvalidEntropySize(bits));
    }
    let mut entropy = Zeroizing::new(vec![0u8; bits / 8]);
    OsRng
        .try_fill_bytes(entropy.as_mut_slice())
        .map_err(|_| WalletError::WeakRandomSource)?;
    Ok(entropy)
}

/// Encode entropy as a checksummed mnemonic.
///
/// The checksum is the high-order `len·8/32` bits of SHA-256(entropy);
/// entropy and checksum bits concatenate and split into 11-bit word
/// indices.
pub fn entropy_to_mnemonic(entropy: &[u8], word_list: &WordList) -> WalletResult<Mnemonic> {
    let bits = entropy.len() * 8;
    if !VALID_ENTROPY_BITS.contains(&bits) {
        return Err(WalletError::InvalidEntropySize(bits));
    }
    let checksum_bits = bits / 32;
    let hash = Sha256::digest(entropy);

    // The checksum is at most 8 bits, so one hash byte always suffices
    let mut data = Zeroizing::new(Vec::with_capacity(entropy.len() + 1));
    data.extend_from_slice(entropy);
    data.push(hash[0]);

    let word_count = (bits + checksum_bits) / BITS_PER_WORD;
    let mut words = Vec::with_capacity(word_count);
    for w in 0..word_count {
        let mut index = 0u16;
        for bit in 0..BITS_PER_WORD {
            let pos = w * BITS_PER_WORD + bit;
            let bit_set = (data[pos / 8] >> (7 - pos % 8)) & 1;
            index = (index << 1) | bit_set as u16;
        }
        words.push(word_list.word(index).to_string());
    }
    Ok(Mnemonic { words })
}

/// Decode a mnemonic phrase back into its entropy, verifying the checksum.
pub fn mnemonic_to_entropy(phrase: &str, word_list: &WordList) -> WalletResult<Zeroizing<Vec<u8>>> {
    let words: Vec<&str> = phrase.split_whitespace().collect();
    if !matches!(words.len(), 12 | 15 | 18 | 21 | 24) {
        return Err(WalletError::InvalidWordCount(words.len()));
    }
    let total_bits = words.len() * BITS_PER_WORD;
    let checksum_bits = total_bits / 33;
    let entropy_bits = total_bits - checksum_bits;

    let mut bits = vec![false; total_bits];
    for (w, word) in words.iter().enumerate() {
        let index = word_list
            .index_of(word)
            .ok_or_else(|| WalletError::UnknownWord(word.to_string()))?;
        for bit in 0..BITS_PER_WORD {
            bits[w * BITS_PER_WORD + bit] = (index >> (BITS_PER_WORD - 1 - bit)) & 1 == 1;
        }
    }

    let mut entropy = Zeroizing::new(vec![0u8; entropy_bits / 8]);
    for (pos, &bit) in bits.iter().take(entropy_bits).enumerate() {
        if bit {
            entropy[pos / 8] |= 1 << (7 - pos % 8);
        }
    }

    let hash = Sha256::digest(entropy.as_slice());
    for (offset, &bit) in bits.iter().skip(entropy_bits).enumerate() {
        let expected = (hash[offset / 8] >> (7 - offset % 8)) & 1 == 1;
        if bit != expected {
            return Err(WalletError::ChecksumMismatch);
        }
    }
    Ok(entropy)
}

/// Derive the 64-byte seed from a mnemonic phrase and passphrase.
///
/// PBKDF2-HMAC-SHA512 over the UTF-8 phrase with salt "mnemonic" ‖
/// passphrase and 2048 rounds.
pub fn mnemonic_to_seed(phrase: &str, passphrase: &str) -> Zeroizing<[u8; SEED_SIZE]> {
    let salt = Zeroizing::new(format!("{}{}", SALT_PREFIX, passphrase));
    let mut seed = Zeroizing::new([0u8; SEED_SIZE]);
    pbkdf2::pbkdf2::<Hmac<Sha512>>(phrase.as_bytes(), salt.as_bytes(), PBKDF2_ROUNDS, &mut seed[..]);
    seed
}

#[cfg(test)]
mod tests {
    use super::*;

    const VECTOR_PHRASE: &str = "abandon abandon abandon abandon abandon abandon abandon \
                                 abandon abandon abandon abandon about";

    #[test]
    fn test_wordlist_rejects_wrong_sizes() {
        let short: Vec<String> = (0..2047).map(|i| format!("word{}", i)).collect();
        assert_eq!(
            WordList::from_words(short).unwrap_err(),
            WalletError::InvalidWordList(2047)
        );

        // Right length, but with a duplicate
        let mut dup: Vec<String> = (0..2047).map(|i| format!("word{}", i)).collect();
        dup.push("word0".to_string());
        assert!(matches!(
            WordList::from_words(dup).unwrap_err(),
            WalletError::InvalidWordList(_)
        ));
    }

    #[test]
    fn test_english_wordlist() {
        let list = WordList::english();
        assert_eq!(list.word(0), "abandon");
        assert_eq!(list.word(3), "about");
        assert_eq!(list.index_of("abandon"), Some(0));
        assert_eq!(list.index_of("zoo"), Some(2047));
        assert_eq!(list.index_of("notaword"), None);
    }

    #[test]
    fn test_entropy_size_validation() {
        assert_eq!(
            generate_entropy(100).unwrap_err(),
            WalletError::InvalidEntropySize(100)
        );
        for bits in [128, 160, 192, 224, 256] {
            let entropy = generate_entropy(bits).unwrap();
            assert_eq!(entropy.len(), bits / 8);
        }
    }

    #[test]
    fn test_zero_entropy_vector() {
        let list = WordList::english();
        let mnemonic = entropy_to_mnemonic(&[0u8; 16], &list).unwrap();
        assert_eq!(mnemonic.phrase().as_str(), VECTOR_PHRASE);
    }

    #[test]
    fn test_mnemonic_word_counts() {
        let list = WordList::english();
        for (bytes, expected_words) in [(16, 12), (20, 15), (24, 18), (28, 21), (32, 24)] {
            let mnemonic = entropy_to_mnemonic(&vec![0xAB; bytes], &list).unwrap();
            assert_eq!(mnemonic.word_count(), expected_words);
        }
        assert!(entropy_to_mnemonic(&[0u8; 17], &list).is_err());
    }

    #[test]
    fn test_mnemonic_entropy_roundtrip() {
        let list = WordList::english();
        for bits in [128, 160, 192, 224, 256] {
            let entropy = generate_entropy(bits).unwrap();
            let mnemonic = entropy_to_mnemonic(&entropy, &list).unwrap();
            let recovered = mnemonic_to_entropy(&mnemonic.phrase(), &list).unwrap();
            assert_eq!(recovered.as_slice(), entropy.as_slice());
        }
    }

    #[test]
    fn test_mnemonic_decode_vector() {
        let list = WordList::english();
        let entropy = mnemonic_to_entropy(VECTOR_PHRASE, &list).unwrap();
        assert_eq!(entropy.as_slice(), &[0u8; 16]);
    }

    #[test]
    fn test_mnemonic_decode_rejects_bad_input() {
        let list = WordList::english();

        // Wrong word count
        assert_eq!(
            mnemonic_to_entropy("abandon abandon", &list).unwrap_err(),
            WalletError::InvalidWordCount(2)
        );

        // Unknown word
        let bad_word = VECTOR_PHRASE.replace("about", "aboat");
        assert!(matches!(
            mnemonic_to_entropy(&bad_word, &list).unwrap_err(),
            WalletError::UnknownWord(_)
        ));

        // Valid words, broken checksum
        let bad_checksum = VECTOR_PHRASE.replace("about", "zoo");
        assert_eq!(
            mnemonic_to_entropy(&bad_checksum, &list).unwrap_err(),
            WalletError::ChecksumMismatch
        );
    }

    #[test]
    fn test_seed_known_vector() {
        let seed = mnemonic_to_seed(VECTOR_PHRASE, "");
        assert_eq!(
            hex::encode(&seed[..]),
            "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc1\
             9a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4"
        );
    }

    #[test]
    fn test_seed_passphrase_changes_output() {
        let plain = mnemonic_to_seed(VECTOR_PHRASE, "");
        let salted = mnemonic_to_seed(VECTOR_PHRASE, "TREZOR");
        assert_ne!(plain[..], salted[..]);
    }
}
