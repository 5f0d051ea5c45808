//! Multiselect - multi-item selection for list views.
//!
//! The crate tracks which positions of a list are selected, keeps that set
//! consistent while the list grows and shrinks, and turns classified gestures
//! (taps, long-presses) into selection changes that observers can veto.
//!
//! # Example
//!
//! ```ignore
//! use multiselect::prelude::*;
//!
//! let layout = UniformRowLayout::new(48.0, adapter.len());
//! let manager = MultiSelectManager::new(adapter.clone(), Box::new(layout.clone()));
//! let handle = MultiSelectHandle::attach(manager);
//!
//! handle.add_callback(Box::new(ActionBar::default()))?;
//! let listener = handle.gesture_listener(None);
//! ```

pub use multiselect_core::{ConnectionId, Result, SelectionError, Signal, logging};

pub mod config;
pub mod gesture;
pub mod manager;
pub mod model;
pub mod prelude;

pub use config::{ConfigError, MultiSelectConfig};
pub use manager::{MultiSelectHandle, MultiSelectManager, SelectionCallback};
pub use model::{ListAdapter, ListChange, ListSignals, Selection};
