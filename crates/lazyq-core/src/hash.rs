//! Stable hashing helpers for comparers.
//!
//! `std`'s `RandomState` reseeds per process; the hash codes produced here are
//! identical across runs, so bucket layouts (and anything keyed on them) are
//! reproducible.

use std::hash::{Hash, Hasher};

/// `Hasher` backed by BLAKE3. `finish` folds the first 8 bytes of the digest.
#[derive(Clone, Default)]
pub struct StableHasher {
    inner: blake3::Hasher,
}

impl StableHasher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Hasher for StableHasher {
    fn write(&mut self, bytes: &[u8]) {
        self.inner.update(bytes);
    }

    fn finish(&self) -> u64 {
        let digest = self.inner.finalize();
        let mut head = [0u8; 8];
        head.copy_from_slice(&digest.as_bytes()[..8]);
        u64::from_le_bytes(head)
    }
}

/// Hash any `Hash` value deterministically.
pub fn stable_hash<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut h = StableHasher::new();
    value.hash(&mut h);
    h.finish()
}
