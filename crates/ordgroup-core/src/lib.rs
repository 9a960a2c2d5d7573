//! # ordgroup-core
//!
//! Insertion-ordered, duplicate-free collections.
//!
//! A [`Group`] holds opaque values compared by value equality. Members are
//! kept in the order they were first added and never repeat. Iteration is
//! restartable: every call to [`Group::iter`] (or every fresh [`Cursor`])
//! starts again at position 0.
//!
//! ## Quick Start
//!
//! ```rust
//! use ordgroup_core::Group;
//!
//! let mut group = Group::from_items([10, 20, 10]);
//! assert_eq!(group.len(), 2);
//! assert!(group.has(&10));
//!
//! group.delete(&10);
//! assert!(!group.has(&10));
//! assert_eq!(group.iter().copied().collect::<Vec<_>>(), vec![20]);
//! ```
//!
//! ## Modules
//!
//! - [`group`]: linear-scan [`Group`] and the [`GroupStore`] trait
//! - [`indexed`]: [`IndexedGroup`], ordered-index variant with O(log n) membership
//! - [`iter`]: borrowing/owned iterators, the [`Iterable`] capability and [`Cursor`]
//! - [`formats`]: binary (postcard + header) and JSON encodings
//! - [`error`]: error types for strict conversion and decoding

pub mod error;
pub mod formats;
pub mod group;
pub mod indexed;
pub mod iter;

pub use error::{FormatError, GroupError};
pub use group::{Group, GroupStore};
pub use indexed::IndexedGroup;
pub use iter::{Cursor, CursorState, IntoIter, Iter, Iterable};
