//! Single module with almost all `growvec` exports
//!
//! # Examples
//!
//! Import all into current scope:
//!
//! ```
//! use growvec::prelude::*;
//! ```
//!
//! Import all, named:
//!
//! ```
//! use growvec::prelude as g;
//! ```

pub use crate::buf::FixedBuf;
pub use crate::growvec;
pub use crate::vec::{GrowVec, Iter, IterMut, OutOfRangeError, Reserve};
