use sha2::{Digest, Sha256};

use crate::domain::settings::value_objects::StudentSecret;

/// Checks a presented secret against the configured one.
///
/// Both sides are hashed first so the comparison always runs over two
/// 32-byte digests, independent of the presented length.
pub struct SecretVerifier;

impl SecretVerifier {
    pub fn verifies(expected: &StudentSecret, presented: &str) -> bool {
        let expected = Sha256::digest(expected.expose().as_bytes());
        let presented = Sha256::digest(presented.trim().as_bytes());

        expected
            .iter()
            .zip(presented.iter())
            .fold(0u8, |diff, (a, b)| diff | (a ^ b))
            == 0
    }
}
