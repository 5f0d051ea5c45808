//! List adapter contract and structural change notifications.
//!
//! The adapter owns the list data and renders its items. It is an external
//! collaborator: this module only describes what the selection machinery
//! needs from it.
//!
//! - [`ListChange`] enumerates the structural changes an adapter reports.
//! - [`ListSignals`] carries those changes to subscribers.
//! - [`ListAdapter`] is the trait an adapter implements.

use multiselect_core::Signal;

/// A structural change to the backing list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListChange {
    /// The list changed in a way that is not described in detail.
    ///
    /// Positions can no longer be trusted.
    Reset,
    /// Items changed in place; no position moved.
    RangeChanged {
        /// First changed position.
        start: usize,
        /// Number of changed items.
        count: usize,
    },
    /// Items were inserted.
    RangeInserted {
        /// Position of the first inserted item.
        start: usize,
        /// Number of inserted items.
        count: usize,
    },
    /// Items were removed.
    RangeRemoved {
        /// Position of the first removed item (before removal).
        start: usize,
        /// Number of removed items.
        count: usize,
    },
    /// Items were moved to a new position.
    RangeMoved {
        /// Original position of the first moved item.
        from: usize,
        /// Destination position.
        to: usize,
        /// Number of moved items.
        count: usize,
    },
}

/// Signals emitted by list adapters.
///
/// Subscribers connect to [`list_changed`](Self::list_changed); adapters
/// call the `emit_*` helpers after mutating their data.
#[derive(Debug, Default)]
pub struct ListSignals {
    /// Emitted after the list structure changed.
    pub list_changed: Signal<ListChange>,
}

impl ListSignals {
    /// Creates a new set of list signals.
    pub fn new() -> Self {
        Self::default()
    }

    /// Announces that the whole list changed.
    pub fn emit_reset(&self) {
        self.list_changed.emit(ListChange::Reset);
    }

    /// Announces that `count` items starting at `start` changed in place.
    pub fn emit_range_changed(&self, start: usize, count: usize) {
        self.list_changed
            .emit(ListChange::RangeChanged { start, count });
    }

    /// Announces that `count` items were inserted at `start`.
    pub fn emit_range_inserted(&self, start: usize, count: usize) {
        self.list_changed
            .emit(ListChange::RangeInserted { start, count });
    }

    /// Announces that `count` items were removed at `start`.
    pub fn emit_range_removed(&self, start: usize, count: usize) {
        self.list_changed
            .emit(ListChange::RangeRemoved { start, count });
    }

    /// Announces that `count` items moved from `from` to `to`.
    pub fn emit_range_moved(&self, from: usize, to: usize, count: usize) {
        self.list_changed
            .emit(ListChange::RangeMoved { from, to, count });
    }
}

/// The list adapter a selection manager is attached to.
///
/// Implementations own the item data and the item rendering. They report
/// structural changes through [`signals`](Self::signals) and re-render items
/// on request.
pub trait ListAdapter: Send + Sync {
    /// Signals announcing structural changes.
    fn signals(&self) -> &ListSignals;

    /// Requests that the item at `position` be rendered again.
    ///
    /// Called once per toggled item and once per item deselected by a clear.
    fn notify_item_changed(&self, position: usize);
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn test_list_signals_creation() {
        let signals = ListSignals::new();
        assert_eq!(signals.list_changed.connection_count(), 0);
    }

    #[test]
    fn test_emit_helpers() {
        let signals = ListSignals::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let recv = received.clone();
        signals.list_changed.connect(move |change| {
            recv.lock().push(*change);
        });

        signals.emit_reset();
        signals.emit_range_changed(1, 2);
        signals.emit_range_inserted(3, 4);
        signals.emit_range_removed(5, 6);
        signals.emit_range_moved(7, 8, 9);

        assert_eq!(
            *received.lock(),
            vec![
                ListChange::Reset,
                ListChange::RangeChanged { start: 1, count: 2 },
                ListChange::RangeInserted { start: 3, count: 4 },
                ListChange::RangeRemoved { start: 5, count: 6 },
                ListChange::RangeMoved {
                    from: 7,
                    to: 8,
                    count: 9
                },
            ]
        );
    }
}
