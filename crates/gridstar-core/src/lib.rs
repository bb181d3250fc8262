//! **gridstar-core**: the grid data model for gridstar.
//!
//! This crate provides geometry primitives, [`Cell`]s with obstacle flags, the
//! [`Grid`] with its one-shot neighbor derivation (including corner-cutting
//! suppression), and text [`Layout`]s for loading and drawing maps.
//!
//! Searching lives in `gridstar-paths`.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod layout;

pub use cell::Cell;
pub use error::{GridError, LayoutError};
pub use geom::{Point, Range};
pub use grid::{Grid, SCAN_ORDER};
pub use layout::Layout;
