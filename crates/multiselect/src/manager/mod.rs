//! Multi-item selection for list views.
//!
//! [`MultiSelectManager`] turns classified gestures into selection changes,
//! keeps the [`Selection`] consistent while the backing list shifts, and
//! notifies [`SelectionCallback`] observers.
//!
//! # Interaction model
//!
//! - A long-press toggles the pressed item. With an empty selection this is
//!   how selection mode is entered.
//! - While something is selected, a tap toggles the tapped item and a tap
//!   outside every item clears the selection. With nothing selected, taps are
//!   left to the host (normal item activation).
//!
//! Interactive toggles can be vetoed by observers. Programmatic changes
//! ([`set_item_selected`](MultiSelectManager::set_item_selected),
//! [`clear_selection`](MultiSelectManager::clear_selection)) cannot.
//!
//! # List changes
//!
//! | Change            | Effect on the selection          |
//! |-------------------|----------------------------------|
//! | `Reset`           | cleared                          |
//! | `RangeChanged`    | none                             |
//! | `RangeInserted`   | positions at/after the range shift up |
//! | `RangeRemoved`    | removed items drop, later ones shift down |
//! | `RangeMoved`      | rejected with [`SelectionError::UnsupportedMove`] |
//!
//! For signal-driven wiring see [`MultiSelectHandle`].

mod callback;
mod handle;

use std::sync::Arc;

use multiselect_core::logging::targets;
use multiselect_core::{Result, SelectionError};
use parking_lot::RwLock;

use crate::config::MultiSelectConfig;
use crate::gesture::{MotionEvent, PositionResolver};
use crate::model::{ListAdapter, ListChange, Selection};

pub(crate) use callback::CallbackList;
pub use callback::SelectionCallback;
pub use handle::{MultiSelectHandle, SelectionGestureListener};

/// Tracks and mutates the selection of one list view.
pub struct MultiSelectManager {
    /// The live selection.
    selection: Selection,

    /// Scratch copy used while clearing. Only created on the first clear.
    intermediate: Option<Selection>,

    /// Registered observers, in registration order.
    callbacks: CallbackList,

    /// The list this selection belongs to.
    adapter: Arc<dyn ListAdapter>,

    /// Maps gestures to adapter positions.
    resolver: Box<dyn PositionResolver>,

    config: MultiSelectConfig,

    /// Copy of the selection that stays readable while the manager is busy
    /// notifying observers. Kept current before every notification.
    published: Option<Arc<RwLock<Selection>>>,
}

impl MultiSelectManager {
    /// Creates a manager for `adapter` with the default configuration.
    pub fn new(adapter: Arc<dyn ListAdapter>, resolver: Box<dyn PositionResolver>) -> Self {
        Self::with_config(adapter, resolver, MultiSelectConfig::default())
    }

    /// Creates a manager for `adapter` with an explicit configuration.
    pub fn with_config(
        adapter: Arc<dyn ListAdapter>,
        resolver: Box<dyn PositionResolver>,
        config: MultiSelectConfig,
    ) -> Self {
        Self {
            selection: Selection::new(),
            intermediate: None,
            callbacks: CallbackList::default(),
            adapter,
            resolver,
            config,
            published: None,
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &MultiSelectConfig {
        &self.config
    }

    /// Returns the adapter this manager renders through.
    pub fn adapter(&self) -> &Arc<dyn ListAdapter> {
        &self.adapter
    }

    /// Registers an observer.
    ///
    /// The same kind of observer may be registered several times; each
    /// registration is notified separately.
    pub fn add_callback(&mut self, callback: Box<dyn SelectionCallback>) {
        self.callbacks.push(callback);
    }

    /// Returns the number of registered observers.
    pub fn callback_count(&self) -> usize {
        self.callbacks.len()
    }

    // =========================================================================
    // Selection access
    // =========================================================================

    /// Returns a live view of the selection.
    ///
    /// The view reflects later changes. Use [`selection_into`](Self::selection_into)
    /// or [`selection_snapshot`](Self::selection_snapshot) for a copy that
    /// does not.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Copies the current selection into `dest` and returns it.
    pub fn selection_into<'a>(&self, dest: &'a mut Selection) -> &'a mut Selection {
        dest.copy_from(&self.selection);
        dest
    }

    /// Returns a copy of the current selection.
    pub fn selection_snapshot(&self) -> Selection {
        self.selection.clone()
    }

    // =========================================================================
    // Programmatic selection
    // =========================================================================

    /// Selects or deselects the item at `position`.
    ///
    /// Observers are told about the change but cannot veto it. Returns true
    /// if the selection state of the item changed.
    pub fn set_item_selected(&mut self, position: usize, selected: bool) -> bool {
        let changed = if selected {
            self.selection.add(position)
        } else {
            self.selection.remove(position)
        };

        if changed {
            self.publish();
            self.notify_item_state_changed(position, selected);
        }
        changed
    }

    /// Applies [`set_item_selected`](Self::set_item_selected) to every position
    /// in `position..position + length`, in increasing order.
    ///
    /// Returns true if the selection state of any item changed.
    ///
    /// # Panics
    ///
    /// Panics if `position + length` exceeds `usize::MAX`.
    pub fn set_items_selected(&mut self, position: usize, length: usize, selected: bool) -> bool {
        let Some(end) = position.checked_add(length) else {
            panic!("range {position}+{length} runs past usize::MAX");
        };

        let mut changed = false;
        for p in position..end {
            changed |= self.set_item_selected(p, selected);
        }
        changed
    }

    /// Deselects everything.
    ///
    /// Every previously selected position is reported to observers as
    /// deselected, in enumeration order. Does nothing if the selection is
    /// already empty.
    pub fn clear_selection(&mut self) {
        if self.selection.is_empty() {
            return;
        }

        let mut snapshot = self.intermediate.take().unwrap_or_default();
        snapshot.copy_from(&self.selection);
        self.selection.clear();
        self.publish();

        for position in &snapshot {
            self.notify_item_state_changed(position, false);
        }
        self.intermediate = Some(snapshot);
    }

    // =========================================================================
    // List changes
    // =========================================================================

    /// Adjusts the selection to a structural change of the list.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::UnsupportedMove`] for
    /// [`ListChange::RangeMoved`]; the selection is left untouched.
    ///
    /// # Panics
    ///
    /// Panics if an insertion or removal reports a zero count.
    pub fn on_list_changed(&mut self, change: &ListChange) -> Result<()> {
        tracing::debug!(target: targets::MANAGER, ?change, "list changed");

        match *change {
            ListChange::Reset => self.selection.clear(),
            // No change in position.
            ListChange::RangeChanged { .. } => {}
            ListChange::RangeInserted { start, count } => self.selection.expand(start, count),
            ListChange::RangeRemoved { start, count } => self.selection.collapse(start, count),
            ListChange::RangeMoved { from, to, count } => {
                tracing::error!(
                    target: targets::MANAGER,
                    from,
                    to,
                    count,
                    "list reported a move; selection cannot follow moved items"
                );
                return Err(SelectionError::UnsupportedMove { from, to, count });
            }
        }
        self.publish();
        Ok(())
    }

    // =========================================================================
    // Gestures
    // =========================================================================

    /// Handles a single tap. Returns true if the tap was consumed.
    pub fn on_single_tap_up(&mut self, event: &MotionEvent) -> bool {
        tracing::debug!(target: targets::MANAGER, ?event, "handling tap event");
        if self.selection.is_empty() {
            return false;
        }

        let position = self.resolver.find_event_position(event);
        self.on_single_tap_up_at(position)
    }

    /// Handles a single tap that resolved to `position`.
    ///
    /// Returns true if the tap was consumed. Taps are never consumed while
    /// nothing is selected.
    pub fn on_single_tap_up_at(&mut self, position: Option<usize>) -> bool {
        if self.selection.is_empty() {
            return false;
        }

        match position {
            Some(position) => {
                self.toggle_selection(position);
                true
            }
            None if self.config.tap_outside_clears => {
                tracing::debug!(target: targets::MANAGER, "tap outside items; clearing selection");
                self.clear_selection();
                true
            }
            None => false,
        }
    }

    /// Handles a long-press.
    pub fn on_long_press(&mut self, event: &MotionEvent) {
        tracing::debug!(target: targets::MANAGER, ?event, "handling long press event");
        let position = self.resolver.find_event_position(event);
        self.on_long_press_at(position);
    }

    /// Handles a long-press that resolved to `position`.
    pub fn on_long_press_at(&mut self, position: Option<usize>) {
        if !self.config.long_press_selects {
            return;
        }

        match position {
            Some(position) => self.toggle_selection(position),
            None => {
                tracing::debug!(target: targets::MANAGER, "no item under long press; ignoring");
            }
        }
    }

    // =========================================================================
    // Internal Helpers
    // =========================================================================

    /// Toggles `position` unless an observer vetoes the change.
    fn toggle_selection(&mut self, position: usize) {
        let next_state = !self.selection.contains(position);

        if !self.callbacks.notify_before(position, next_state) {
            tracing::info!(
                target: targets::MANAGER,
                position,
                next_state,
                "selection change cancelled by listener"
            );
            return;
        }

        let selected = self.selection.flip(position);
        self.publish();
        self.notify_item_state_changed(position, selected);

        if self.config.log_selection_changes {
            tracing::debug!(target: targets::MANAGER, selection = %self.selection, "selection after toggle");
        }
    }

    /// Mirrors the live selection into `target` from now on.
    pub(crate) fn publish_to(&mut self, target: Arc<RwLock<Selection>>) {
        target.write().copy_from(&self.selection);
        self.published = Some(target);
    }

    fn publish(&self) {
        if let Some(published) = &self.published {
            published.write().copy_from(&self.selection);
        }
    }

    fn notify_item_state_changed(&mut self, position: usize, selected: bool) {
        self.callbacks.notify_changed(position, selected);
        self.adapter.notify_item_changed(position);
    }
}

impl std::fmt::Debug for MultiSelectManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MultiSelectManager")
            .field("selection", &self.selection)
            .field("callbacks", &self.callbacks.len())
            .field("config", &self.config)
            .finish()
    }
}

static_assertions::assert_impl_all!(MultiSelectManager: Send);
