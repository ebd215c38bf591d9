//! Frame-buffer fingerprints for regression tests.

use sha2::{Digest, Sha256};

pub fn rgba_sha256_hex(rgba: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(rgba);
    let digest = hasher.finalize();
    hex::encode(digest)
}
