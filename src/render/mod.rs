//! Plain, semantic board rendering.
//!
//! Views are pure projections of a `Board`. Colors, bold text and other
//! decoration belong to the presentation layer and are not applied here.

pub mod view;

pub use view::{BoardView, CellView, ViewMode};
