//! Layout calculation modules for label sheets
//!
//! This module handles all the geometric calculations for placing labels:
//! - Grid sizing (deriving the missing row or column count)
//! - Index to cell mapping (fill by row or by column)
//! - Element placement (centering each label in its cell)
//! - Overflow detection against the page

mod fit;
mod grid;
mod types;

pub use fit::*;
pub use grid::*;
pub use types::*;
