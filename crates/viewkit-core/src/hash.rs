use std::hash::{Hash, Hasher};

use ahash::AHasher;

/// Identity of a remembered slot.
pub type Key = u64;

/// Hashes a call site into a slot key.
pub fn location_key(file: &str, line: u32, column: u32) -> Key {
    let mut hasher = AHasher::default();
    file.hash(&mut hasher);
    line.hash(&mut hasher);
    column.hash(&mut hasher);
    hasher.finish()
}

/// Derives a child key so the same call site can be reused under distinct parents.
pub fn join_key(parent: Key, child: Key) -> Key {
    hash_one(&(parent, child))
}

/// convenience: hash a single value with the crate's hasher
#[inline]
pub fn hash_one<T: Hash + ?Sized>(v: &T) -> u64 {
    let mut h = AHasher::default();
    v.hash(&mut h);
    h.finish()
}
