//! Excel access layer
//!
//! Wraps calamine so the rest of the crate only ever sees grids of [`Cell`]
//! values, with formula cells already overlaid as their literal expression
//! text.
//!
//! [`Cell`]: crate::types::Cell

mod reader;

pub use reader::{SheetGrid, WorkbookReader};
