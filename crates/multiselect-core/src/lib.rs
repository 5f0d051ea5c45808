//! Core systems for multiselect.
//!
//! This crate provides the foundational pieces shared by the selection
//! machinery:
//!
//! - **Signal/Slot System**: Synchronous, type-safe change notification
//! - **Errors**: The [`SelectionError`] taxonomy and [`Result`] alias
//! - **Logging**: `tracing` target names for per-subsystem filtering
//!
//! # Signal/Slot Example
//!
//! ```
//! use multiselect_core::Signal;
//!
//! let value_changed = Signal::<i32>::new();
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! value_changed.emit(42);
//! value_changed.disconnect(conn_id);
//! ```

mod error;
pub mod logging;
pub mod signal;

pub use error::{Result, SelectionError};
pub use signal::{ConnectionId, Signal};
