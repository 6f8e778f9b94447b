//! Kind-specific comparison and hashing of collection contents.
//!
//! Hashes are computed with fixed seeds, so equal contents hash equally
//! across collection types and across processes.

use crate::{Collection, HasLength, Iterable};
use ahash::{AHashMap, RandomState};
use std::hash::{BuildHasher, Hash};

const SEEDS: [u64; 4] = [
    0x243f_6a88_85a3_08d3,
    0x1319_8a2e_0370_7344,
    0xa409_3822_299f_31d0,
    0x082e_fa98_ec4e_6c89,
];

fn element_hasher() -> RandomState {
    RandomState::with_seeds(SEEDS[0], SEEDS[1], SEEDS[2], SEEDS[3])
}

pub fn sequence_eq<A, B>(a: &A, b: &B) -> bool
where
    A: Iterable + HasLength + ?Sized,
    B: Iterable<Item = A::Item> + HasLength + ?Sized,
    A::Item: PartialEq,
{
    a.len() == b.len() && a.iter().eq(b.iter())
}

pub fn set_eq<A, B>(a: &A, b: &B) -> bool
where
    A: Collection + ?Sized,
    B: Collection<Item = A::Item> + ?Sized,
{
    a.len() == b.len() && a.iter().all(|value| b.contains(value))
}

/// Compares element multiplicities, ignoring order
pub fn bag_eq<A, B>(a: &A, b: &B) -> bool
where
    A: Iterable + HasLength + ?Sized,
    B: Iterable<Item = A::Item> + HasLength + ?Sized,
    A::Item: Eq + Hash,
{
    if a.len() != b.len() {
        return false;
    }

    let mut counts: AHashMap<&A::Item, isize> = AHashMap::with_capacity(a.len());
    for value in a.iter() {
        *counts.entry(value).or_default() += 1;
    }
    for value in b.iter() {
        match counts.get_mut(value) {
            Some(count) if *count > 0 => *count -= 1,
            _ => return false,
        }
    }

    counts.values().all(|count| *count == 0)
}

/// Compares element multiplicities using only `PartialEq`
pub fn bag_eq_by_scan<A, B>(a: &A, b: &B) -> bool
where
    A: Iterable + HasLength + ?Sized,
    B: Iterable<Item = A::Item> + HasLength + ?Sized,
    A::Item: PartialEq,
{
    if a.len() != b.len() {
        return false;
    }

    let mut unmatched: Vec<&A::Item> = b.iter().collect();
    for value in a.iter() {
        let position = unmatched.iter().position(|candidate| *candidate == value);
        match position {
            Some(index) => {
                unmatched.swap_remove(index);
            }
            None => return false,
        }
    }

    unmatched.is_empty()
}

/// Order-sensitive hash of a sequence of elements
pub fn ordered_hash<'a, T>(values: impl Iterator<Item = &'a T>) -> u64
where
    T: Hash + 'a,
{
    let hasher = element_hasher();
    values.fold(1u64, |acc, value| {
        acc.wrapping_mul(31)
            .wrapping_add(BuildHasher::hash_one(&hasher, value))
    })
}

/// Order-insensitive hash: the wrapping sum of element hashes
pub fn unordered_hash<'a, T>(values: impl Iterator<Item = &'a T>) -> u64
where
    T: Hash + 'a,
{
    let hasher = element_hasher();
    values.fold(0u64, |acc, value| {
        acc.wrapping_add(BuildHasher::hash_one(&hasher, value))
    })
}
