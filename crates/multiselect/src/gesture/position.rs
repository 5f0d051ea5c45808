//! Mapping gestures to list positions.
//!
//! A [`PositionResolver`] answers "which item is under this event?". `None`
//! means the event did not land on any item (empty space below the last row,
//! padding, ...).
//!
//! Closures implement the trait directly, so a host backed by an arbitrary
//! view can write:
//!
//! ```ignore
//! let resolver = move |event: &MotionEvent| view.index_at(event.position);
//! ```
//!
//! [`UniformRowLayout`] covers the common case of fixed-height rows.

use std::sync::Arc;

use parking_lot::RwLock;

use super::MotionEvent;

/// Resolves a gesture to an adapter position.
pub trait PositionResolver: Send {
    /// Returns the adapter position under `event`, or `None` if no item is
    /// there.
    fn find_event_position(&self, event: &MotionEvent) -> Option<usize>;
}

impl<F> PositionResolver for F
where
    F: Fn(&MotionEvent) -> Option<usize> + Send,
{
    fn find_event_position(&self, event: &MotionEvent) -> Option<usize> {
        self(event)
    }
}

/// Geometry of a vertically scrolling list with fixed-height rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowMetrics {
    /// Height of every row.
    pub row_height: f32,
    /// Number of items in the list.
    pub item_count: usize,
    /// Vertical scroll offset of the content.
    pub scroll_offset: f32,
    /// Visible width of the list.
    pub viewport_width: f32,
    /// Visible height of the list.
    pub viewport_height: f32,
}

impl RowMetrics {
    /// Creates metrics for an unscrolled list with an unbounded viewport.
    pub fn new(row_height: f32, item_count: usize) -> Self {
        Self {
            row_height,
            item_count,
            scroll_offset: 0.0,
            viewport_width: f32::INFINITY,
            viewport_height: f32::INFINITY,
        }
    }

    /// Returns the row under the viewport point `(x, y)`.
    pub fn row_at(&self, x: f32, y: f32) -> Option<usize> {
        if self.row_height <= 0.0 {
            return None;
        }
        if !(0.0..self.viewport_width).contains(&x) || !(0.0..self.viewport_height).contains(&y)
        {
            return None;
        }

        // Convert to content coordinates
        let content_y = y + self.scroll_offset;
        if content_y < 0.0 {
            return None;
        }

        let row = (content_y / self.row_height) as usize;
        (row < self.item_count).then_some(row)
    }
}

/// Position resolver for lists with fixed-height rows.
///
/// Clones share the same metrics, so a host can keep one clone to update
/// the scroll offset or item count while the selection manager owns another.
#[derive(Debug, Clone)]
pub struct UniformRowLayout {
    metrics: Arc<RwLock<RowMetrics>>,
}

impl UniformRowLayout {
    /// Creates a layout with the given row height and item count.
    pub fn new(row_height: f32, item_count: usize) -> Self {
        Self::with_metrics(RowMetrics::new(row_height, item_count))
    }

    /// Creates a layout from explicit metrics.
    pub fn with_metrics(metrics: RowMetrics) -> Self {
        Self {
            metrics: Arc::new(RwLock::new(metrics)),
        }
    }

    /// Returns a copy of the current metrics.
    pub fn metrics(&self) -> RowMetrics {
        *self.metrics.read()
    }

    /// Sets the number of items in the list.
    pub fn set_item_count(&self, item_count: usize) {
        self.metrics.write().item_count = item_count;
    }

    /// Sets the vertical scroll offset.
    pub fn set_scroll_offset(&self, scroll_offset: f32) {
        self.metrics.write().scroll_offset = scroll_offset;
    }

    /// Sets the visible size of the list.
    pub fn set_viewport_size(&self, width: f32, height: f32) {
        let mut metrics = self.metrics.write();
        metrics.viewport_width = width;
        metrics.viewport_height = height;
    }
}

impl PositionResolver for UniformRowLayout {
    fn find_event_position(&self, event: &MotionEvent) -> Option<usize> {
        self.metrics.read().row_at(event.x(), event.y())
    }
}
