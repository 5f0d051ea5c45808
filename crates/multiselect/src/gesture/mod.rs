//! Gesture listeners and their composition.
//!
//! Gesture classification (deciding whether a touch sequence was a tap, a
//! long-press, a fling, ...) happens upstream. This module receives the
//! classified gestures through the [`GestureListener`] trait and lets several
//! listeners share one gesture stream via [`CompositeGestureListener`].
//!
//! # Combination policies
//!
//! Each [`GestureEvent`] kind carries a [`DispatchPolicy`]:
//!
//! - [`DispatchPolicy::FirstHandled`]: listeners are tried in order and the
//!   first one that returns `true` wins; the rest are skipped.
//! - [`DispatchPolicy::NotifyAll`]: every listener is invoked.
//!
//! # Example
//!
//! ```ignore
//! use multiselect::gesture::{CompositeGestureListener, GestureEvent, MotionEvent};
//!
//! let mut listener = CompositeGestureListener::new();
//! listener.push(Box::new(selection_listener));
//! listener.push(Box::new(scroll_listener));
//!
//! let consumed = listener.dispatch(&GestureEvent::SingleTapUp(MotionEvent::new(12.0, 40.0)));
//! ```

pub mod position;

use multiselect_core::logging::targets;

pub use position::{PositionResolver, RowMetrics, UniformRowLayout};

/// A 2D point in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Point {
    /// Creates a new point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A pointer event that produced a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotionEvent {
    /// Where the event happened, in viewport coordinates.
    pub position: Point,
}

impl MotionEvent {
    /// Creates an event at the given viewport coordinates.
    pub const fn new(x: f32, y: f32) -> Self {
        Self {
            position: Point::new(x, y),
        }
    }

    /// Horizontal viewport coordinate.
    pub fn x(&self) -> f32 {
        self.position.x
    }

    /// Vertical viewport coordinate.
    pub fn y(&self) -> f32 {
        self.position.y
    }
}

/// Receives classified gestures.
///
/// Every method has a no-op default so implementors only override the
/// gestures they care about. Methods returning `bool` report whether the
/// gesture was consumed.
pub trait GestureListener: Send {
    /// A pointer went down.
    fn on_down(&mut self, _event: &MotionEvent) -> bool {
        false
    }

    /// A pointer has been down long enough to show press feedback.
    fn on_show_press(&mut self, _event: &MotionEvent) {}

    /// A pointer went up after a single tap.
    fn on_single_tap_up(&mut self, _event: &MotionEvent) -> bool {
        false
    }

    /// A pointer is being dragged.
    fn on_scroll(
        &mut self,
        _start: &MotionEvent,
        _current: &MotionEvent,
        _distance_x: f32,
        _distance_y: f32,
    ) -> bool {
        false
    }

    /// A pointer was held down past the long-press timeout.
    fn on_long_press(&mut self, _event: &MotionEvent) {}

    /// A pointer was released while moving fast.
    fn on_fling(
        &mut self,
        _start: &MotionEvent,
        _end: &MotionEvent,
        _velocity_x: f32,
        _velocity_y: f32,
    ) -> bool {
        false
    }
}

/// How a gesture is fanned out to composed listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchPolicy {
    /// Stop at the first listener that consumes the gesture.
    FirstHandled,
    /// Invoke every listener.
    NotifyAll,
}

/// A classified gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// See [`GestureListener::on_down`].
    Down(MotionEvent),
    /// See [`GestureListener::on_show_press`].
    ShowPress(MotionEvent),
    /// See [`GestureListener::on_single_tap_up`].
    SingleTapUp(MotionEvent),
    /// See [`GestureListener::on_scroll`].
    Scroll {
        /// Event that started the drag.
        start: MotionEvent,
        /// Latest event of the drag.
        current: MotionEvent,
        /// Horizontal distance since the previous scroll event.
        distance_x: f32,
        /// Vertical distance since the previous scroll event.
        distance_y: f32,
    },
    /// See [`GestureListener::on_long_press`].
    LongPress(MotionEvent),
    /// See [`GestureListener::on_fling`].
    Fling {
        /// Event that started the fling.
        start: MotionEvent,
        /// Event that ended the fling.
        end: MotionEvent,
        /// Horizontal velocity in pixels per second.
        velocity_x: f32,
        /// Vertical velocity in pixels per second.
        velocity_y: f32,
    },
}

impl GestureEvent {
    /// Returns the combination policy for this gesture kind.
    ///
    /// Gestures whose callbacks report consumption use
    /// [`DispatchPolicy::FirstHandled`]; the rest notify every listener.
    pub fn policy(&self) -> DispatchPolicy {
        match self {
            Self::ShowPress(_) | Self::LongPress(_) => DispatchPolicy::NotifyAll,
            Self::Down(_) | Self::SingleTapUp(_) | Self::Scroll { .. } | Self::Fling { .. } => {
                DispatchPolicy::FirstHandled
            }
        }
    }

    /// Delivers this gesture to a single listener.
    ///
    /// Returns the listener's answer, or `false` for gestures whose
    /// callbacks do not report consumption.
    pub fn deliver(&self, listener: &mut dyn GestureListener) -> bool {
        match self {
            Self::Down(e) => listener.on_down(e),
            Self::ShowPress(e) => {
                listener.on_show_press(e);
                false
            }
            Self::SingleTapUp(e) => listener.on_single_tap_up(e),
            Self::Scroll {
                start,
                current,
                distance_x,
                distance_y,
            } => listener.on_scroll(start, current, *distance_x, *distance_y),
            Self::LongPress(e) => {
                listener.on_long_press(e);
                false
            }
            Self::Fling {
                start,
                end,
                velocity_x,
                velocity_y,
            } => listener.on_fling(start, end, *velocity_x, *velocity_y),
        }
    }
}

/// Fans gestures out to an ordered list of listeners.
///
/// Listeners are consulted in the order they were pushed.
#[derive(Default)]
pub struct CompositeGestureListener {
    listeners: Vec<Box<dyn GestureListener>>,
}

impl CompositeGestureListener {
    /// Creates an empty composite.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a composite from listeners in priority order.
    pub fn from_listeners(listeners: Vec<Box<dyn GestureListener>>) -> Self {
        Self { listeners }
    }

    /// Appends a listener after the existing ones.
    pub fn push(&mut self, listener: Box<dyn GestureListener>) {
        self.listeners.push(listener);
    }

    /// Returns the number of composed listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Returns true if no listener is composed.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Delivers `event` according to its [`DispatchPolicy`].
    ///
    /// Returns true if a listener consumed the gesture.
    pub fn dispatch(&mut self, event: &GestureEvent) -> bool {
        match event.policy() {
            DispatchPolicy::FirstHandled => {
                let handled = self
                    .listeners
                    .iter_mut()
                    .any(|listener| event.deliver(listener.as_mut()));
                tracing::trace!(target: targets::GESTURE, ?event, handled, "dispatched");
                handled
            }
            DispatchPolicy::NotifyAll => {
                for listener in &mut self.listeners {
                    event.deliver(listener.as_mut());
                }
                tracing::trace!(target: targets::GESTURE, ?event, "broadcast");
                false
            }
        }
    }
}

impl std::fmt::Debug for CompositeGestureListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeGestureListener")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl GestureListener for CompositeGestureListener {
    fn on_down(&mut self, event: &MotionEvent) -> bool {
        self.dispatch(&GestureEvent::Down(*event))
    }

    fn on_show_press(&mut self, event: &MotionEvent) {
        self.dispatch(&GestureEvent::ShowPress(*event));
    }

    fn on_single_tap_up(&mut self, event: &MotionEvent) -> bool {
        self.dispatch(&GestureEvent::SingleTapUp(*event))
    }

    fn on_scroll(
        &mut self,
        start: &MotionEvent,
        current: &MotionEvent,
        distance_x: f32,
        distance_y: f32,
    ) -> bool {
        self.dispatch(&GestureEvent::Scroll {
            start: *start,
            current: *current,
            distance_x,
            distance_y,
        })
    }

    fn on_long_press(&mut self, event: &MotionEvent) {
        self.dispatch(&GestureEvent::LongPress(*event));
    }

    fn on_fling(
        &mut self,
        start: &MotionEvent,
        end: &MotionEvent,
        velocity_x: f32,
        velocity_y: f32,
    ) -> bool {
        self.dispatch(&GestureEvent::Fling {
            start: *start,
            end: *end,
            velocity_x,
            velocity_y,
        })
    }
}
