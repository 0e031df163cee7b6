//! Deterministic 64-bit hashing shared by names, levels and term nodes.
//!
//! Every term hash starts from the node's [`TermKind`] tag, so an application and a binder
//! whose children happen to hash identically still land on different values. Composite
//! hashes fold their children in order; the combiner is not commutative.
use std::hash::{DefaultHasher, Hash, Hasher};

use crate::term::TermKind;

/// Hash any `Hash` value with the crate's fixed-key hasher.
#[inline]
pub fn hash_of<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Hash of a leaf node: tag followed by the scalar seed.
#[inline]
pub(crate) fn hash_leaf(kind: TermKind, seed: u64) -> u64 {
    let mut hasher = DefaultHasher::new();
    hasher.write_u8(kind as u8);
    hasher.write_u64(seed);
    hasher.finish()
}

/// Hash of a composite node: tag, arity, then every child hash in order.
pub(crate) fn hash_children<I>(kind: TermKind, children: I) -> u64
where
    I: IntoIterator<Item = u64>,
    I::IntoIter: ExactSizeIterator,
{
    let children = children.into_iter();
    let mut hasher = DefaultHasher::new();
    hasher.write_u8(kind as u8);
    hasher.write_usize(children.len());
    for h in children {
        hasher.write_u64(h);
    }
    hasher.finish()
}
