//! Prelude module for Multiselect.
//!
//! ```ignore
//! use multiselect::prelude::*;
//! ```
//!
//! This provides access to:
//! - Selection data (`Selection`)
//! - The list contract (`ListAdapter`, `ListSignals`, `ListChange`)
//! - Selection management (`MultiSelectManager`, `MultiSelectHandle`, `SelectionCallback`)
//! - Gesture plumbing (`GestureListener`, `CompositeGestureListener`, `MotionEvent`)

// ============================================================================
// Core
// ============================================================================

pub use crate::{ConnectionId, Result, SelectionError, Signal};

// ============================================================================
// Model
// ============================================================================

pub use crate::model::{ListAdapter, ListChange, ListSignals, Selection};

// ============================================================================
// Manager
// ============================================================================

pub use crate::config::{ConfigError, MultiSelectConfig};
pub use crate::manager::{MultiSelectHandle, MultiSelectManager, SelectionCallback};

// ============================================================================
// Gestures
// ============================================================================

pub use crate::gesture::{
    CompositeGestureListener, DispatchPolicy, GestureEvent, GestureListener, MotionEvent, Point,
    PositionResolver, RowMetrics, UniformRowLayout,
};
