//! # Group
//!
//! The insertion-ordered, duplicate-free collection.
//!
//! Members live in a single `Vec` in the order they were first added.
//! Membership is a linear scan under `PartialEq`, so any comparable value
//! can be stored. For O(log n) membership see [`crate::IndexedGroup`].
//!
//! ## Invariant
//!
//! No two members are equal at any time. Every mutating path goes through
//! [`Group::add`] or preserves uniqueness on its own.

use crate::error::GroupError;
use crate::iter::{Cursor, IntoIter, Iter, Iterable};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// =============================================================================
// GROUPSTORE TRAIT
// =============================================================================

/// Core operations shared by every group implementation.
///
/// None of these operations fail. `add` and `delete` report whether the
/// group changed; callers that only need the mutation can ignore it.
pub trait GroupStore: Iterable {
    /// Append `value` unless an equal member is already present.
    fn add(&mut self, value: Self::Item) -> bool;

    /// Remove the member equal to `value`, if any.
    fn delete(&mut self, value: &Self::Item) -> bool;

    /// Check whether some member equals `value`.
    fn has(&self, value: &Self::Item) -> bool;

    /// Get the number of members.
    fn len(&self) -> usize;

    /// Check if the group has no members.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the member at `index` in insertion order.
    fn get(&self, index: usize) -> Option<&Self::Item>;

    /// Start a fresh detached cursor at position 0.
    fn cursor(&self) -> Cursor {
        Cursor::new()
    }
}

// =============================================================================
// GROUP
// =============================================================================

/// Insertion-ordered collection of distinct values.
///
/// Equality between groups is order-sensitive: `[1, 2]` and `[2, 1]` hold
/// the same members but are not equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Group<T> {
    /// Members in first-insertion order.
    members: Vec<T>,
}

impl<T> Default for Group<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Group<T> {
    /// Create a new empty group.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    /// Create an empty group with room for `capacity` members.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            members: Vec::with_capacity(capacity),
        }
    }

    /// Get the number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check if the group is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Remove every member.
    pub fn clear(&mut self) {
        self.members.clear();
    }

    /// View the members as a slice, in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.members
    }

    /// Get the member at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.members.get(index)
    }

    /// Oldest member.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.members.first()
    }

    /// Newest member.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.members.last()
    }

    /// Iterate over the members in insertion order.
    ///
    /// Each call returns an independent iterator starting at the first
    /// member, so iteration is restartable.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.members)
    }

    /// Start a detached cursor.
    ///
    /// Unlike [`Group::iter`], the cursor does not borrow the group between
    /// steps. See [`Cursor`] for the behaviour under mutation.
    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        Cursor::new()
    }

    /// Keep only the members for which `keep` returns true.
    ///
    /// Relative order of the kept members is unchanged.
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.members.retain(keep);
    }

    /// Wrap members already known to be distinct.
    pub(crate) fn from_unique(members: Vec<T>) -> Self {
        Self { members }
    }

    /// Consume the group and return its members in insertion order.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.members
    }

    /// Owned iterator over a copy of the current members.
    ///
    /// Later mutation of the group is not observed.
    #[must_use]
    pub fn snapshot(&self) -> IntoIter<T>
    where
        T: Clone,
    {
        IntoIter::new(self.members.clone())
    }
}

impl<T: PartialEq> Group<T> {
    /// Build a group by adding each item in order.
    ///
    /// Later duplicates are dropped, so members keep their first-occurrence
    /// order.
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let items = items.into_iter();
        let mut group = Self::with_capacity(items.size_hint().0);
        let mut seen = 0usize;
        for item in items {
            seen = seen.saturating_add(1);
            group.add(item);
        }
        tracing::trace!(seen, kept = group.len(), "group built from items");
        group
    }

    /// Append `value` unless an equal member is already present.
    ///
    /// Returns `true` if the value was inserted.
    pub fn add(&mut self, value: T) -> bool {
        if self.has(&value) {
            return false;
        }
        self.members.push(value);
        true
    }

    /// Remove the member equal to `value`.
    ///
    /// Returns `true` if a member was removed. Absent values are a no-op.
    pub fn delete(&mut self, value: &T) -> bool {
        match self.position(value) {
            Some(index) => {
                self.members.remove(index);
                true
            }
            None => false,
        }
    }

    /// Check whether some member equals `value`.
    #[must_use]
    pub fn has(&self, value: &T) -> bool {
        self.members.contains(value)
    }

    /// Insertion index of the member equal to `value`.
    #[must_use]
    pub fn position(&self, value: &T) -> Option<usize> {
        self.members.iter().position(|member| member == value)
    }

    /// Check whether every member of `self` is also in `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.members.iter().all(|member| other.has(member))
    }
}

// =============================================================================
// SET ALGEBRA
// =============================================================================

impl<T: PartialEq + Clone> Group<T> {
    /// Members of `self` followed by members of `other` not already present.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.extend(other.iter().cloned());
        result
    }

    /// Members of `self` that are also in `other`, in `self`'s order.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        Self {
            members: self
                .members
                .iter()
                .filter(|member| other.has(member))
                .cloned()
                .collect(),
        }
    }

    /// Members of `self` that are not in `other`, in `self`'s order.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        Self {
            members: self
                .members
                .iter()
                .filter(|member| !other.has(member))
                .cloned()
                .collect(),
        }
    }
}

// =============================================================================
// TRAIT IMPLEMENTATIONS
// =============================================================================

impl<T> Iterable for Group<T> {
    type Item = T;

    fn iter(&self) -> Iter<'_, T> {
        Group::iter(self)
    }
}

impl<T: PartialEq> GroupStore for Group<T> {
    fn add(&mut self, value: T) -> bool {
        Group::add(self, value)
    }

    fn delete(&mut self, value: &T) -> bool {
        Group::delete(self, value)
    }

    fn has(&self, value: &T) -> bool {
        Group::has(self, value)
    }

    fn len(&self) -> usize {
        Group::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        Group::get(self, index)
    }
}

impl<T: PartialEq> FromIterator<T> for Group<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}

impl<T: PartialEq> Extend<T> for Group<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T: PartialEq, const N: usize> From<[T; N]> for Group<T> {
    fn from(items: [T; N]) -> Self {
        Self::from_items(items)
    }
}

/// Strict conversion: a repeated value is an error instead of being dropped.
impl<T: PartialEq> TryFrom<Vec<T>> for Group<T> {
    type Error = GroupError;

    fn try_from(items: Vec<T>) -> Result<Self, Self::Error> {
        let mut group = Self::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            if !group.add(item) {
                return Err(GroupError::DuplicateMember { index });
            }
        }
        Ok(group)
    }
}

impl<T> IntoIterator for Group<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.members)
    }
}

impl<'a, T> IntoIterator for &'a Group<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// SERIALIZATION SUPPORT
// =============================================================================

impl<T: Serialize> Serialize for Group<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.members)
    }
}

/// Deserialization is strict and rejects repeated members.
impl<'de, T> Deserialize<'de> for Group<T>
where
    T: Deserialize<'de> + PartialEq,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        Self::try_from(items).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_items_keeps_first_occurrence_order() {
        let group = Group::from_items(["b", "a", "b", "c", "a"]);
        assert_eq!(group.as_slice(), &["b", "a", "c"]);
        assert_eq!(group.len(), 3);
    }

    #[test]
    fn from_letters_iterates_in_order() {
        let group = Group::from_items(["a", "b", "c"]);
        let collected: Vec<_> = group.iter().copied().collect();
        assert_eq!(collected, vec!["a", "b", "c"]);
    }

    #[test]
    fn duplicate_add_then_delete() {
        let mut group = Group::from_items([10, 20]);
        assert!(group.has(&10));
        assert!(!group.has(&30));

        assert!(!group.add(10));
        assert!(group.delete(&10));

        assert!(!group.has(&10));
        assert!(group.has(&20));
    }

    #[test]
    fn add_is_idempotent() {
        let mut once = Group::new();
        once.add("x");

        let mut twice = Group::new();
        twice.add("x");
        twice.add("x");

        assert_eq!(once, twice);
    }

    #[test]
    fn delete_absent_is_noop() {
        let mut group = Group::from_items([1, 2, 3]);
        let before = group.clone();

        assert!(!group.delete(&42));
        assert_eq!(group, before);
    }

    #[test]
    fn delete_preserves_order_of_remaining() {
        let mut group = Group::from_items([1, 2, 3, 4]);
        group.delete(&2);
        assert_eq!(group.as_slice(), &[1, 3, 4]);
    }

    #[test]
    fn readding_deleted_value_moves_it_to_end() {
        let mut group = Group::from_items([1, 2, 3]);
        group.delete(&1);
        group.add(1);
        assert_eq!(group.as_slice(), &[2, 3, 1]);
    }

    #[test]
    fn iteration_is_restartable() {
        let group = Group::from_items([5, 6, 7]);
        let first: Vec<_> = group.iter().collect();
        let second: Vec<_> = group.iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_group() {
        let group: Group<u8> = Group::default();
        assert!(group.is_empty());
        assert_eq!(group.iter().next(), None);
        assert_eq!(group.first(), None);
    }

    #[test]
    fn try_from_rejects_duplicates() {
        let result = Group::try_from(vec![1, 2, 1]);
        assert_eq!(result, Err(GroupError::DuplicateMember { index: 2 }));

        let ok = Group::try_from(vec![3, 1, 2]);
        assert_eq!(ok.map(Group::into_vec), Ok(vec![3, 1, 2]));
    }

    #[test]
    fn retain_keeps_order() {
        let mut group = Group::from_items(1..=6);
        group.retain(|n| n % 2 == 0);
        assert_eq!(group.as_slice(), &[2, 4, 6]);
    }

    #[test]
    fn set_algebra() {
        let left = Group::from([1, 2, 3]);
        let right = Group::from([3, 4, 1]);

        assert_eq!(left.union(&right).as_slice(), &[1, 2, 3, 4]);
        assert_eq!(left.intersection(&right).as_slice(), &[1, 3]);
        assert_eq!(left.difference(&right).as_slice(), &[2]);
        assert!(Group::from([3, 1]).is_subset(&left));
        assert!(!right.is_subset(&left));
    }

    #[test]
    fn equality_is_order_sensitive() {
        assert_ne!(Group::from([1, 2]), Group::from([2, 1]));
    }

    #[test]
    fn collect_and_extend_deduplicate() {
        let mut group: Group<_> = vec!["a", "a", "b"].into_iter().collect();
        group.extend(["b", "c"]);
        assert_eq!(group.as_slice(), &["a", "b", "c"]);
    }

    #[test]
    fn owned_into_iter() {
        let group = Group::from([String::from("x"), String::from("y")]);
        let owned: Vec<String> = group.into_iter().collect();
        assert_eq!(owned, vec!["x".to_string(), "y".to_string()]);
    }

    #[test]
    fn snapshot_ignores_later_mutation() {
        let mut group = Group::from([1, 2]);
        let snapshot = group.snapshot();
        group.add(3);
        group.delete(&1);
        assert_eq!(snapshot.collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn generic_over_group_store() {
        fn fill<G: GroupStore<Item = u32>>(store: &mut G) {
            for n in [3, 1, 3, 2] {
                store.add(n);
            }
        }

        let mut group = Group::new();
        fill(&mut group);
        assert_eq!(GroupStore::len(&group), 3);
        assert_eq!(GroupStore::get(&group, 1), Some(&1));
    }

    #[test]
    fn serde_json_roundtrip() {
        let group = Group::from(["x", "y"]);
        let json = serde_json::to_string(&group).unwrap_or_default();
        assert_eq!(json, r#"["x","y"]"#);

        let back: Result<Group<String>, _> = serde_json::from_str(&json);
        assert_eq!(
            back.map(Group::into_vec).ok(),
            Some(vec!["x".to_string(), "y".to_string()])
        );
    }

    #[test]
    fn deserialize_rejects_duplicates() {
        let result: Result<Group<u8>, _> = serde_json::from_str("[1, 2, 2]");
        let err = result.err().map(|e| e.to_string()).unwrap_or_default();
        assert!(err.contains("duplicate member at index 2"));
    }
}
