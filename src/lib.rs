//! An ordered word-occurrence dictionary built on an AVL tree.
//!
//! The crate provides two structurally parallel map engines over the same
//! payload model: [`AvlTreeMap`], a self-balancing binary search tree with
//! logarithmic search depth, and [`BstTreeMap`], an unbalanced reference
//! tree whose search depth degenerates to the key count under sorted
//! insertion. The reference engine exists only as a baseline to measure
//! the balanced engine against.
//!
//! [`OccurrenceIndex`] composes the AVL engine with the multi-value
//! payload to map each word of a text to the line numbers it occurs on:
//!
//! ```
//! use lextree::OccurrenceIndex;
//!
//! let mut index = OccurrenceIndex::new();
//! index.record("lorem", 0);
//! index.record("ipsum", 0);
//! index.record("lorem", 2);
//! assert_eq!(index.lines_of("lorem"), Some(&[0, 2][..]));
//! ```
//!
//! The `consistency_check` feature exposes the internal structure
//! checkers, which assert key ordering, the balance condition and cached
//! heights after the fact.

pub mod bst;
pub mod index;
pub mod map;
pub mod payload;

pub use bst::BstTreeMap;
pub use index::OccurrenceIndex;
pub use map::AvlTreeMap;
pub use payload::{Latest, Occurrences, Payload};

#[cfg(test)]
mod proptests;
