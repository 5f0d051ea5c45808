//! Selection store for list views.
//!
//! [`Selection`] is the set of adapter positions currently marked selected.
//! Positions enumerate in the order they were added. Read access is public;
//! only the owning [`MultiSelectManager`](crate::manager::MultiSelectManager)
//! mutates a selection.
//!
//! # Example
//!
//! ```ignore
//! let selection = manager.selection();
//! if selection.contains(3) {
//!     println!("{selection}");  // {size=2, items=[3, 8]}
//! }
//! ```

use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use multiselect_core::logging::targets;

/// The set of selected positions.
///
/// Enumeration order (see [`get`](Self::get) and [`iter`](Self::iter)) is the
/// order in which positions were added. Equality and hashing ignore that
/// order and compare content only.
///
/// Indices passed to [`get`](Self::get) are only meaningful while the
/// selection does not change. Take a snapshot with
/// [`MultiSelectManager::selection_into`](crate::manager::MultiSelectManager::selection_into)
/// before iterating if a callback may mutate the selection.
#[derive(Clone, Default)]
pub struct Selection {
    /// Set of selected positions for O(1) lookup.
    lookup: HashSet<usize>,

    /// Selected positions in enumeration order.
    positions: Vec<usize>,
}

impl Selection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns true if `position` is currently selected.
    pub fn contains(&self, position: usize) -> bool {
        self.lookup.contains(&position)
    }

    /// Returns the position stored at enumeration slot `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn get(&self, index: usize) -> usize {
        self.positions[index]
    }

    /// Returns the number of selected positions.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns the selected positions in enumeration order.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Iterates over the selected positions in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.positions.iter().copied()
    }

    // =========================================================================
    // Mutation (manager only)
    // =========================================================================

    /// Selects `position`. Returns true if it was not selected before.
    pub(crate) fn add(&mut self, position: usize) -> bool {
        if self.lookup.insert(position) {
            self.positions.push(position);
            true
        } else {
            false
        }
    }

    /// Deselects `position`. Returns true if it was selected before.
    pub(crate) fn remove(&mut self, position: usize) -> bool {
        if self.lookup.remove(&position) {
            self.positions.retain(|&p| p != position);
            true
        } else {
            false
        }
    }

    /// Toggles `position` and returns its new membership.
    pub(crate) fn flip(&mut self, position: usize) -> bool {
        if self.remove(position) {
            false
        } else {
            self.add(position)
        }
    }

    /// Removes every position.
    pub(crate) fn clear(&mut self) {
        self.lookup.clear();
        self.positions.clear();
    }

    /// Replaces the contents with a copy of `source`, reusing allocations.
    pub(crate) fn copy_from(&mut self, source: &Selection) {
        self.lookup.clone_from(&source.lookup);
        self.positions.clone_from(&source.positions);
    }

    /// Shifts selected positions to account for `count` items inserted at
    /// `start`.
    ///
    /// Every selected position `p >= start` becomes `p + count`. Positions
    /// below `start` are untouched.
    ///
    /// # Panics
    ///
    /// Panics if `count` is zero, or if a shifted position would exceed
    /// `usize::MAX`. The selection is left unchanged in that case.
    pub(crate) fn expand(&mut self, start: usize, count: usize) {
        assert!(count > 0, "expand requires a positive count");
        if let Some(last) = self.positions.iter().copied().filter(|&p| p >= start).max() {
            assert!(
                last.checked_add(count).is_some(),
                "expand would shift position {last} by {count} past usize::MAX"
            );
        }

        for position in &mut self.positions {
            if *position >= start {
                *position += count;
            }
        }
        self.rebuild_lookup();

        tracing::trace!(target: targets::SELECTION, start, count, selection = %self, "expanded");
    }

    /// Shifts selected positions to account for `count` items removed at
    /// `start`.
    ///
    /// Positions below `start` are kept, positions after the removed range
    /// move down by `count`, and positions inside the removed range are
    /// dropped.
    ///
    /// # Panics
    ///
    /// Panics if `count` is zero.
    pub(crate) fn collapse(&mut self, start: usize, count: usize) {
        assert!(count > 0, "collapse requires a positive count");

        // A range running past usize::MAX removes everything from `start`.
        let end = start.saturating_add(count - 1);
        self.positions.retain(|&p| p < start || p > end);
        for position in &mut self.positions {
            if *position > end {
                *position -= count;
            }
        }
        self.rebuild_lookup();

        tracing::trace!(target: targets::SELECTION, start, count, selection = %self, "collapsed");
    }

    fn rebuild_lookup(&mut self) {
        self.lookup.clear();
        self.lookup.extend(self.positions.iter().copied());
    }
}

impl PartialEq for Selection {
    fn eq(&self, other: &Self) -> bool {
        self.lookup == other.lookup
    }
}

impl Eq for Selection {}

impl Hash for Selection {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut sorted = self.positions.clone();
        sorted.sort_unstable();
        sorted.hash(state);
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{size={}, items=[", self.len())?;
        for (i, position) in self.positions.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{position}")?;
        }
        f.write_str("]}")
    }
}

impl fmt::Debug for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Selection").field(&self.positions).finish()
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = usize;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn selection_of(positions: &[usize]) -> Selection {
        let mut selection = Selection::new();
        for &p in positions {
            selection.add(p);
        }
        selection
    }

    fn hash_of(selection: &Selection) -> u64 {
        let mut hasher = DefaultHasher::new();
        selection.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_new_selection_is_empty() {
        let selection = Selection::new();
        assert!(selection.is_empty());
        assert_eq!(selection.len(), 0);
        assert!(!selection.contains(0));
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut selection = Selection::new();
        assert!(selection.add(4));
        assert!(!selection.add(4));
        assert_eq!(selection.len(), 1);
        assert!(selection.contains(4));
    }

    #[test]
    fn test_remove() {
        let mut selection = selection_of(&[1, 2]);
        assert!(selection.remove(1));
        assert!(!selection.remove(1));
        assert!(!selection.remove(9));
        assert_eq!(selection.positions(), &[2]);
    }

    #[test]
    fn test_flip_returns_new_state() {
        let mut selection = Selection::new();
        assert!(selection.flip(7));
        assert!(selection.contains(7));
        assert!(!selection.flip(7));
        assert!(!selection.contains(7));
    }

    #[test]
    fn test_last_operation_wins() {
        let mut selection = Selection::new();
        selection.add(3);
        selection.flip(3);
        selection.add(3);
        selection.remove(5);
        selection.flip(5);
        assert!(selection.contains(3));
        assert!(selection.contains(5));

        selection.remove(3);
        assert!(!selection.contains(3));
    }

    #[test]
    fn test_enumeration_follows_insertion_order() {
        let selection = selection_of(&[9, 2, 5]);
        assert_eq!(selection.get(0), 9);
        assert_eq!(selection.get(1), 2);
        assert_eq!(selection.get(2), 5);
        assert_eq!(selection.iter().collect::<Vec<_>>(), vec![9, 2, 5]);
    }

    #[test]
    #[should_panic]
    fn test_get_out_of_range_panics() {
        let selection = selection_of(&[1]);
        selection.get(1);
    }

    #[test]
    fn test_clear() {
        let mut selection = selection_of(&[1, 2, 3]);
        selection.clear();
        assert!(selection.is_empty());
        assert!(!selection.contains(2));
    }

    #[test]
    fn test_copy_from_is_deep() {
        let mut source = selection_of(&[4, 1]);
        let mut copy = selection_of(&[8]);
        copy.copy_from(&source);
        assert_eq!(copy.positions(), &[4, 1]);
        assert!(!copy.contains(8));

        source.add(6);
        assert!(!copy.contains(6));
    }

    #[test]
    fn test_expand_shifts_positions_at_or_after_start() {
        let mut selection = selection_of(&[2, 5, 7]);
        selection.expand(3, 2);
        assert_eq!(selection, selection_of(&[2, 7, 9]));
        assert!(!selection.contains(5));
    }

    #[test]
    fn test_expand_at_selected_position_moves_it() {
        let mut selection = selection_of(&[3]);
        selection.expand(3, 1);
        assert_eq!(selection.positions(), &[4]);
    }

    #[test]
    fn test_collapse_drops_removed_and_shifts_rest() {
        let mut selection = selection_of(&[2, 5, 7]);
        selection.collapse(4, 2);
        assert_eq!(selection, selection_of(&[2, 5]));
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn test_collapse_keeps_enumeration_order() {
        let mut selection = selection_of(&[9, 0, 2]);
        selection.collapse(1, 3);
        assert_eq!(selection.positions(), &[6, 0]);
    }

    #[test]
    fn test_expand_then_collapse_round_trips() {
        let original = selection_of(&[0, 3, 10, 11]);
        let mut selection = original.clone();
        selection.expand(5, 4);
        selection.collapse(5, 4);
        assert_eq!(selection, original);
        assert_eq!(selection.positions(), original.positions());
    }

    #[test]
    #[should_panic(expected = "positive count")]
    fn test_expand_rejects_zero_count() {
        selection_of(&[1]).expand(0, 0);
    }

    #[test]
    #[should_panic(expected = "positive count")]
    fn test_collapse_rejects_zero_count() {
        selection_of(&[1]).collapse(0, 0);
    }

    #[test]
    #[should_panic(expected = "past usize::MAX")]
    fn test_expand_rejects_overflow() {
        selection_of(&[usize::MAX]).expand(0, 1);
    }

    #[test]
    fn test_expand_overflow_leaves_selection_intact() {
        let mut selection = selection_of(&[3, usize::MAX - 1]);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            selection.expand(0, 2);
        }));

        assert!(result.is_err());
        assert_eq!(selection.positions(), &[3, usize::MAX - 1]);
        assert!(selection.contains(usize::MAX - 1));
    }

    #[test]
    fn test_expand_ignores_large_positions_below_start() {
        let mut selection = selection_of(&[usize::MAX - 1, 2]);
        selection.expand(usize::MAX, 1);
        assert_eq!(selection.positions(), &[usize::MAX - 1, 2]);
    }

    #[test]
    fn test_collapse_range_reaching_past_max() {
        let mut selection = selection_of(&[1, 5, usize::MAX]);
        selection.collapse(4, usize::MAX);
        assert_eq!(selection.positions(), &[1]);
    }

    #[test]
    fn test_equality_ignores_order() {
        let a = selection_of(&[1, 2, 3]);
        let b = selection_of(&[3, 1, 2]);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, selection_of(&[1, 2]));
    }

    #[test]
    fn test_display() {
        assert_eq!(Selection::new().to_string(), "{size=0, items=[]}");
        assert_eq!(
            selection_of(&[2, 5, 7]).to_string(),
            "{size=3, items=[2, 5, 7]}"
        );
    }
}
