//! # Indexed Group
//!
//! A [`Group`](crate::Group) variant with an ordered side index.
//!
//! Members are stored twice: once in a `Vec` for insertion-order iteration
//! and once in a `BTreeSet` for O(log n) membership. `BTreeSet` keeps the
//! structure deterministic; no hashing is involved.

use crate::error::GroupError;
use crate::group::{Group, GroupStore};
use crate::iter::{Cursor, IntoIter, Iter, Iterable};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;

/// Insertion-ordered group with an ordered membership index.
///
/// Invariant: `index` holds exactly the values in `members`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedGroup<T: Ord + Clone> {
    /// Members in first-insertion order.
    members: Vec<T>,
    /// Membership index.
    index: BTreeSet<T>,
}

impl<T: Ord + Clone> Default for IndexedGroup<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Clone> IndexedGroup<T> {
    /// Create a new empty group.
    #[must_use]
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
            index: BTreeSet::new(),
        }
    }

    /// Build a group by adding each item in order, dropping later duplicates.
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut group = Self::new();
        group.extend(items);
        group
    }

    /// Append `value` unless it is already a member.
    pub fn add(&mut self, value: T) -> bool {
        if self.index.contains(&value) {
            return false;
        }
        self.index.insert(value.clone());
        self.members.push(value);
        true
    }

    /// Remove `value` if it is a member.
    pub fn delete(&mut self, value: &T) -> bool {
        if !self.index.remove(value) {
            return false;
        }
        if let Some(position) = self.members.iter().position(|member| member == value) {
            self.members.remove(position);
        }
        true
    }

    /// Check membership in O(log n).
    #[must_use]
    pub fn has(&self, value: &T) -> bool {
        self.index.contains(value)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.members.get(index)
    }

    /// View the members in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.members
    }

    /// Iterate in insertion order. Restartable.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.members)
    }

    /// Iterate in value order, using the index.
    pub fn iter_sorted(&self) -> impl Iterator<Item = &T> {
        self.index.iter()
    }

    /// Start a detached cursor at position 0.
    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        Cursor::new()
    }

    pub fn clear(&mut self) {
        self.members.clear();
        self.index.clear();
    }

    /// Owned iterator over a copy of the current members.
    #[must_use]
    pub fn snapshot(&self) -> IntoIter<T> {
        IntoIter::new(self.members.clone())
    }

    /// Consume the group and return its members in insertion order.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.members
    }
}

// =============================================================================
// TRAIT IMPLEMENTATIONS
// =============================================================================

impl<T: Ord + Clone> Iterable for IndexedGroup<T> {
    type Item = T;

    fn iter(&self) -> Iter<'_, T> {
        IndexedGroup::iter(self)
    }
}

impl<T: Ord + Clone> GroupStore for IndexedGroup<T> {
    fn add(&mut self, value: T) -> bool {
        IndexedGroup::add(self, value)
    }

    fn delete(&mut self, value: &T) -> bool {
        IndexedGroup::delete(self, value)
    }

    fn has(&self, value: &T) -> bool {
        IndexedGroup::has(self, value)
    }

    fn len(&self) -> usize {
        IndexedGroup::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        IndexedGroup::get(self, index)
    }
}

impl<T: Ord + Clone> Extend<T> for IndexedGroup<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T: Ord + Clone> FromIterator<T> for IndexedGroup<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}

impl<T: Ord + Clone, const N: usize> From<[T; N]> for IndexedGroup<T> {
    fn from(items: [T; N]) -> Self {
        Self::from_items(items)
    }
}

impl<T: Ord + Clone> From<Group<T>> for IndexedGroup<T> {
    fn from(group: Group<T>) -> Self {
        let members = group.into_vec();
        let index = members.iter().cloned().collect();
        Self { members, index }
    }
}

impl<T: Ord + Clone> From<IndexedGroup<T>> for Group<T> {
    fn from(group: IndexedGroup<T>) -> Self {
        Group::from_unique(group.members)
    }
}

/// Strict conversion: a repeated value is an error instead of being dropped.
impl<T: Ord + Clone> TryFrom<Vec<T>> for IndexedGroup<T> {
    type Error = GroupError;

    fn try_from(items: Vec<T>) -> Result<Self, Self::Error> {
        let mut group = Self::new();
        for (index, item) in items.into_iter().enumerate() {
            if !group.add(item) {
                return Err(GroupError::DuplicateMember { index });
            }
        }
        Ok(group)
    }
}

impl<T: Ord + Clone> IntoIterator for IndexedGroup<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.members)
    }
}

impl<'a, T: Ord + Clone> IntoIterator for &'a IndexedGroup<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// SERIALIZATION SUPPORT
// =============================================================================

impl<T: Ord + Clone + Serialize> Serialize for IndexedGroup<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.members)
    }
}

impl<'de, T> Deserialize<'de> for IndexedGroup<T>
where
    T: Deserialize<'de> + Ord + Clone,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        Self::try_from(items).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// TESTS
// =============================================================================
