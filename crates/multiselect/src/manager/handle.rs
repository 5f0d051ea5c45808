//! Shared, signal-wired access to a selection manager.
//!
//! A [`MultiSelectManager`] on its own is driven by direct method calls. A
//! [`MultiSelectHandle`] attaches it to the outside world:
//!
//! - it subscribes to the adapter's [`ListSignals`](crate::model::ListSignals)
//!   so structural list changes reach the selection automatically;
//! - it hands out a [`GestureListener`] for the host's gesture classifier.
//!
//! # Reentrancy
//!
//! Observers run while the manager is busy. They may read the selection
//! through [`MultiSelectHandle::selection_snapshot`] and
//! [`MultiSelectHandle::with_selection`], which see the state the observer
//! is being told about. Calling back into the manager for anything else
//! (directly, or by mutating the list) is refused with
//! [`SelectionError::Reentrant`]. A structural list change that arrives while
//! the manager is busy cannot be dropped without corrupting positions, so it
//! panics instead.
//!
//! # Example
//!
//! ```ignore
//! let manager = MultiSelectManager::new(adapter.clone(), Box::new(layout.clone()));
//! let handle = MultiSelectHandle::attach(manager);
//!
//! handle.add_callback(Box::new(ActionModeController::new()))?;
//! let listener = handle.gesture_listener(Some(Box::new(DragScroller::new())));
//! gesture_detector.set_listener(listener);
//! ```

use std::cell::RefCell;
use std::sync::{Arc, Weak};

use multiselect_core::logging::targets;
use multiselect_core::{ConnectionId, Result, SelectionError};
use parking_lot::{ReentrantMutex, RwLock};

use super::{MultiSelectManager, SelectionCallback};
use crate::gesture::{CompositeGestureListener, GestureListener, MotionEvent};
use crate::model::{ListAdapter, ListChange, Selection};

struct HandleInner {
    manager: ReentrantMutex<RefCell<MultiSelectManager>>,
    published: Arc<RwLock<Selection>>,
    adapter: Arc<dyn ListAdapter>,
    connection: ConnectionId,
}

impl HandleInner {
    fn with<R>(&self, f: impl FnOnce(&mut MultiSelectManager) -> R) -> Result<R> {
        let guard = self.manager.lock();
        let mut manager = guard.try_borrow_mut().map_err(|_| {
            tracing::warn!(target: targets::MANAGER, "refusing re-entrant call into selection manager");
            SelectionError::Reentrant
        })?;
        Ok(f(&mut *manager))
    }

    fn apply_list_change(&self, change: &ListChange) {
        if let Err(err) = self.with(|manager| manager.on_list_changed(change)).and_then(|r| r) {
            panic!("selection cannot track list change {change:?}: {err}");
        }
    }
}

impl Drop for HandleInner {
    fn drop(&mut self) {
        self.adapter
            .signals()
            .list_changed
            .disconnect(self.connection);
    }
}

/// Cloneable handle to a [`MultiSelectManager`] that follows its adapter's
/// list changes.
///
/// Dropping the last clone (including clones held by gesture listeners)
/// unsubscribes from the adapter.
#[derive(Clone)]
pub struct MultiSelectHandle {
    inner: Arc<HandleInner>,
}

impl MultiSelectHandle {
    /// Wraps `manager` and subscribes it to its adapter's list changes.
    pub fn attach(mut manager: MultiSelectManager) -> Self {
        let adapter = manager.adapter().clone();
        let published = Arc::new(RwLock::new(Selection::new()));
        manager.publish_to(published.clone());

        let inner = Arc::new_cyclic(|weak: &Weak<HandleInner>| {
            let weak = weak.clone();
            let connection = adapter.signals().list_changed.connect(move |change| {
                if let Some(inner) = weak.upgrade() {
                    inner.apply_list_change(change);
                }
            });

            HandleInner {
                manager: ReentrantMutex::new(RefCell::new(manager)),
                published,
                adapter: adapter.clone(),
                connection,
            }
        });

        Self { inner }
    }

    /// Runs `f` with exclusive access to the manager.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::Reentrant`] when called while the manager is
    /// already running, e.g. from inside a [`SelectionCallback`].
    pub fn with<R>(&self, f: impl FnOnce(&mut MultiSelectManager) -> R) -> Result<R> {
        self.inner.with(f)
    }

    /// Registers an observer. See [`MultiSelectManager::add_callback`].
    pub fn add_callback(&self, callback: Box<dyn SelectionCallback>) -> Result<()> {
        self.with(|manager| manager.add_callback(callback))
    }

    /// Returns a copy of the current selection.
    ///
    /// Safe to call from inside a [`SelectionCallback`].
    pub fn selection_snapshot(&self) -> Selection {
        self.inner.published.read_recursive().clone()
    }

    /// Runs `f` with read access to the current selection.
    ///
    /// Safe to call from inside a [`SelectionCallback`]. `f` must not call
    /// back into this handle.
    pub fn with_selection<R>(&self, f: impl FnOnce(&Selection) -> R) -> R {
        let selection = self.inner.published.read_recursive();
        f(&*selection)
    }

    /// See [`MultiSelectManager::set_item_selected`].
    pub fn set_item_selected(&self, position: usize, selected: bool) -> Result<bool> {
        self.with(|manager| manager.set_item_selected(position, selected))
    }

    /// See [`MultiSelectManager::set_items_selected`].
    pub fn set_items_selected(&self, position: usize, length: usize, selected: bool) -> Result<bool> {
        self.with(|manager| manager.set_items_selected(position, length, selected))
    }

    /// See [`MultiSelectManager::clear_selection`].
    pub fn clear_selection(&self) -> Result<()> {
        self.with(|manager| manager.clear_selection())
    }

    /// Returns a gesture listener that feeds taps and long-presses to the
    /// manager.
    ///
    /// When `delegate` is given, the returned listener composes the
    /// manager's own listener first and `delegate` second, so the delegate
    /// sees every gesture the manager does not consume.
    pub fn gesture_listener(
        &self,
        delegate: Option<Box<dyn GestureListener>>,
    ) -> Box<dyn GestureListener> {
        let own: Box<dyn GestureListener> = Box::new(SelectionGestureListener {
            handle: self.clone(),
        });

        match delegate {
            None => own,
            Some(delegate) => Box::new(CompositeGestureListener::from_listeners(vec![
                own, delegate,
            ])),
        }
    }
}

impl std::fmt::Debug for MultiSelectHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MultiSelectHandle")
            .field("connection", &self.inner.connection)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(MultiSelectHandle: Send, Sync);

/// The manager's own gesture listener. Created by
/// [`MultiSelectHandle::gesture_listener`].
#[derive(Debug, Clone)]
pub struct SelectionGestureListener {
    handle: MultiSelectHandle,
}

impl GestureListener for SelectionGestureListener {
    fn on_single_tap_up(&mut self, event: &MotionEvent) -> bool {
        match self.handle.with(|manager| manager.on_single_tap_up(event)) {
            Ok(consumed) => consumed,
            Err(err) => {
                tracing::warn!(target: targets::GESTURE, ?event, %err, "tap not delivered to selection manager");
                false
            }
        }
    }

    fn on_long_press(&mut self, event: &MotionEvent) {
        if let Err(err) = self.handle.with(|manager| manager.on_long_press(event)) {
            tracing::warn!(target: targets::GESTURE, ?event, %err, "long press not delivered to selection manager");
        }
    }
}
