#![doc = crate::doc_macro::svgbob_doc!(
//! # `growvec`
//! A growable contiguous sequence with explicit capacity control.
//!
//! 1. [Summary](#summary)
//! 1. [Examples](#examples)
//! 1. [Growth policy](#growth-policy)
//! 1. [Feature flags](#feature-flags)
//!
//! # Summary
//!
//! `growvec` provides [`GrowVec<T>`], a from-scratch growable array with value
//! semantics, random access, amortized-constant append, and explicit capacity
//! control, intended as a building block for other data structures.
//!
//! The container is deliberately split in two. [`FixedBuf<T>`] owns a
//! fixed-capacity block of initialized slots and knows nothing about growth;
//! [`GrowVec<T>`] owns exactly one such buffer plus the live-element count, and
//! makes every size/capacity decision itself. Growing never mutates storage in
//! place: a larger buffer is built first and swapped in only once all element
//! moves have completed.
//!
//! A `GrowVec` with five live elements in an eight-slot buffer looks like this
//! (`d` marks a default-valued spare slot):
//!
//! ```svgbob
//! "GrowVec"
//! +-----+-------+
//! | buf | len=5 |
//! +-----+-------+
//!    |
//!    |  "FixedBuf, capacity = 8"
//!    |  +---+---+---+---+---+---+---+---+
//!    '->| 1 | 2 | 3 | 4 | 5 | d | d | d |
//!       +---+---+---+---+---+---+---+---+
//!        "live range [0, len)"  "spare tail"
//! ```
//!
//! Every slot in the buffer holds a valid value at all times: live elements in
//! `[0, len)`, defaults or stale leftovers in `[len, capacity)`, never
//! garbage. This is why most mutating operations require `T: Default`.
//!
//! # Examples
//!
//! ```
//! use growvec::prelude::*;
//!
//! let mut v: GrowVec<u32> = growvec![1, 2, 3];
//! v.push(4);
//! let at = v.insert(1, 99);
//! assert_eq!(v[at], 99);
//! v.erase(at);
//! assert!(v.iter().eq([1, 2, 3, 4].iter()));
//!
//! // Explicit capacity control:
//! let mut w: GrowVec<u32> = GrowVec::with_capacity(100);
//! for i in 0..100 {
//!     w.push(i); // never reallocates
//! }
//! assert_eq!(w.capacity(), 100);
//! ```
//!
//! # Growth policy
//!
//! Appending past capacity doubles the capacity (starting from 1) until it
//! covers the requested length, giving the classic 1, 2, 4, 8, ... progression
//! and amortized O(1) append. [`GrowVec::reserve`] instead allocates exactly
//! the requested slot count. Capacity never shrinks; [`GrowVec::clear`] and
//! shrinking [`GrowVec::resize`] only move the length.
//!
//! # Feature flags
//!
//! This crate has no required dependencies. The following feature flags exist:
//!
//! * `doc`. Renders the documentation diagrams as SVG. Adds a dependency on `svgbobdoc`.
//!
)]
#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod buf;
pub mod prelude;
pub mod vec;

mod doc_macro;

pub use buf::FixedBuf;
pub use vec::{GrowVec, Iter, IterMut, OutOfRangeError, Reserve};
