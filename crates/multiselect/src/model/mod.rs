//! Selection data and the list adapter contract.
//!
//! - [`Selection`]: the set of selected list positions
//! - [`ListAdapter`], [`ListSignals`], [`ListChange`]: how the backing list
//!   reports structural changes and receives re-render requests

mod adapter;
mod selection;

pub use adapter::{ListAdapter, ListChange, ListSignals};
pub use selection::Selection;
