//! Per-key payloads: the value sequences stored by the tree maps.

use smallvec::{smallvec, SmallVec};

/// The payload stored for one key: an ordered sequence of values.
///
/// Both tree engines are generic over the payload so that the single-value
/// and the multi-value call sites share one set of tree routines. A payload
/// starts out as a singleton when its key is first inserted; every later
/// value for the same key is folded in with [`accept`].
///
/// [`accept`]: Payload::accept
pub trait Payload<V> {
    /// The payload for a freshly inserted key holding a single value.
    fn singleton(value: V) -> Self;

    /// Folds another value for the same key into the payload.
    fn accept(&mut self, value: V);

    /// The stored values in arrival order.
    fn values(&self) -> &[V];
}

/// Single-value payload: accepting a value replaces the sole element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Latest<V>(pub V);

impl<V> Payload<V> for Latest<V> {
    fn singleton(value: V) -> Self {
        Latest(value)
    }

    fn accept(&mut self, value: V) {
        self.0 = value;
    }

    fn values(&self) -> &[V] {
        std::slice::from_ref(&self.0)
    }
}

/// Multi-value payload: every accepted value is appended in arrival order,
/// duplicates included.
///
/// Occurrence lists are short for most keys, so a handful of values is kept
/// inline before the sequence spills to the heap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Occurrences<V>(SmallVec<[V; 4]>);

impl<V> Occurrences<V> {
    /// The accumulated values as a slice.
    pub fn as_slice(&self) -> &[V] {
        &self.0
    }

    /// Number of accumulated values.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no value has been accumulated.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<V> Payload<V> for Occurrences<V> {
    fn singleton(value: V) -> Self {
        Occurrences(smallvec![value])
    }

    fn accept(&mut self, value: V) {
        self.0.push(value);
    }

    fn values(&self) -> &[V] {
        &self.0
    }
}
