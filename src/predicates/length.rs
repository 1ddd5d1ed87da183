//! Length predicates.
//!
//! This module provides the [`HasLength`] capability and the length rules
//! built on it. One generic rule covers text and any countable collection.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// Maximum accepted length for [`max_length`].
pub const MAX_LENGTH: usize = 32;

/// A value whose length can be counted.
///
/// Text counts Unicode scalar values, so `"日本語"` has length 3.
/// Collections count their elements.
pub trait HasLength {
    /// Returns the length of the value.
    fn length(&self) -> usize;
}

impl HasLength for str {
    fn length(&self) -> usize {
        self.chars().count()
    }
}

impl HasLength for String {
    fn length(&self) -> usize {
        self.as_str().length()
    }
}

impl<T> HasLength for [T] {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> HasLength for [T; N] {
    fn length(&self) -> usize {
        N
    }
}

impl<T> HasLength for Vec<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> HasLength for VecDeque<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> HasLength for HashMap<K, V, S> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, S> HasLength for HashSet<T, S> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V> HasLength for BTreeMap<K, V> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> HasLength for BTreeSet<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T: HasLength + ?Sized> HasLength for &T {
    fn length(&self) -> usize {
        (**self).length()
    }
}

/// Returns `true` if the value is present and longer than [`MAX_LENGTH`].
///
/// The bound is exclusive: 32 passes, 33 fails. Absent values pass; use
/// [`must_be_entered`](super::must_be_entered) to reject them.
///
/// # Example
///
/// ```rust
/// use fieldcheck::predicates::max_length;
///
/// assert!(!max_length(Some("Steven")));
/// assert!(max_length(Some(&"x".repeat(33))));
/// assert!(max_length(Some(&vec![0u8; 40])));
/// assert!(!max_length::<str>(None));
/// ```
pub fn max_length<T: HasLength + ?Sized>(value: Option<&T>) -> bool {
    exceeds_length(value, MAX_LENGTH)
}

/// Returns `true` if the value is present and longer than `max`.
pub fn exceeds_length<T: HasLength + ?Sized>(value: Option<&T>, max: usize) -> bool {
    value.is_some_and(|v| v.length() > max)
}
