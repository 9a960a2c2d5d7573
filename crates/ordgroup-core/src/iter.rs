//! # Iteration
//!
//! Two ways to walk a group:
//!
//! - [`Iter`] / [`IntoIter`]: ordinary Rust iterators. A borrowing [`Iter`]
//!   holds a shared reference, so the group cannot change underneath it.
//! - [`Cursor`]: a detached position that is handed the group on every
//!   step. The group may be mutated between steps; the cursor then follows
//!   the live sequence by index.
//!
//! ## Cursor state machine
//!
//! ```text
//!   Positioned(0) ──next, i < len──► Positioned(i + 1)
//!        │                                  │
//!        └────────next, i >= len──────┬─────┘
//!                                     ▼
//!                                 Exhausted  (terminal)
//! ```
//!
//! ## Mutation during cursor iteration
//!
//! The cursor only remembers an offset. Deleting a member at or before
//! the offset shifts the next member into an already-visited slot, so it
//! is skipped. Deleting and re-adding a visited member moves it to the end,
//! so it is yielded again. Use [`crate::Group::snapshot`] when a stable
//! view is required.

use crate::group::GroupStore;
use std::iter::FusedIterator;

// =============================================================================
// ITERABLE CAPABILITY
// =============================================================================

/// Capability trait for types whose members can be iterated in order.
pub trait Iterable {
    /// Member type.
    type Item;

    /// Iterate from the first member. Every call starts over.
    fn iter(&self) -> Iter<'_, Self::Item>;

    /// Copy the members into a `Vec`, in iteration order.
    fn to_vec(&self) -> Vec<Self::Item>
    where
        Self::Item: Clone,
    {
        self.iter().cloned().collect()
    }
}

// =============================================================================
// BORROWING ITERATOR
// =============================================================================

/// Borrowing iterator over a group's members in insertion order.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(members: &'a [T]) -> Self {
        Self {
            inner: members.iter(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

// =============================================================================
// OWNED ITERATOR
// =============================================================================

/// Owning iterator over a group's members in insertion order.
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(members: Vec<T>) -> Self {
        Self {
            inner: members.into_iter(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

// =============================================================================
// CURSOR
// =============================================================================

/// Position of a [`Cursor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorState {
    /// Next call to `next` reads the member at this index.
    Positioned(usize),
    /// Iteration finished. Terminal.
    Exhausted,
}

impl Default for CursorState {
    fn default() -> Self {
        Self::Positioned(0)
    }
}

/// Detached, pull-based cursor over any [`GroupStore`].
///
/// The cursor does not hold a borrow between steps, so the group can be
/// mutated while a cursor is in flight (see the module docs for the
/// resulting skip/repeat behaviour). Once exhausted, it stays exhausted
/// even if the group later grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    state: CursorState,
}

impl Cursor {
    /// Create a cursor positioned at the first member.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: CursorState::Positioned(0),
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> CursorState {
        self.state
    }

    /// Check if the cursor has signalled completion.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.state == CursorState::Exhausted
    }

    /// Emit the member at the current position and advance.
    ///
    /// Returns `None` and moves to [`CursorState::Exhausted`] once the
    /// position reaches the group's current length.
    pub fn next<'g, G>(&mut self, group: &'g G) -> Option<&'g G::Item>
    where
        G: GroupStore + ?Sized,
    {
        let CursorState::Positioned(index) = self.state else {
            return None;
        };

        if let Some(member) = group.get(index) {
            self.state = CursorState::Positioned(index.saturating_add(1));
            Some(member)
        } else {
            self.state = CursorState::Exhausted;
            None
        }
    }

    /// Return to position 0.
    pub fn reset(&mut self) {
        self.state = CursorState::Positioned(0);
    }
}

// =============================================================================
// TESTS
// =============================================================================
