//! Bitcoin hash pipelines
//!
//! The two digest compositions Bitcoin applies to key material: double
//! SHA-256 for checksums and SHA-256 followed by RIPEMD-160 for shortening
//! public keys into 20-byte identifiers. Both operate on raw bytes
//! throughout; intermediate digests are never re-encoded as text.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Bitcoin's standard 256-bit hash: SHA-256 applied twice.
pub fn sha256d(data: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    second.into()
}

/// Bitcoin's standard 160-bit hash: SHA-256 then RIPEMD-160.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    let sha = Sha256::digest(data);
    let ripe = Ripemd160::digest(sha);
    ripe.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256d_known_vector() {
        assert_eq!(
            hex::encode(sha256d(b"hello")),
            "9595c9df90075148eb06860365df33584b75bff782a510c6cd4883a419833d50"
        );
    }

    #[test]
    fn test_hash160_known_vectors() {
        assert_eq!(
            hex::encode(hash160(b"")),
            "b472a266d0bd89c13706a4132ccfb16f7c3b9fcb"
        );

        // HASH160 of the compressed base-point public key
        let pubkey =
            hex::decode("0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798")
                .unwrap();
        assert_eq!(
            hex::encode(hash160(&pubkey)),
            "751e76e8199196d454941c45d1b3a323f1433bd6"
        );
    }

    #[test]
    fn test_sha256d_differs_from_single_sha256() {
        let single: [u8; 32] = Sha256::digest(b"hello").into();
        assert_ne!(sha256d(b"hello"), single);
    }
}
