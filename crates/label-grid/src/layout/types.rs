//! Layout data types for label sheets
//!
//! Coordinates use a top-left origin with y growing downwards, the way a
//! page is laid out on screen and in print previews. All lengths are in the
//! configuration's shared unit.

/// Position within the grid (row, column), both 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPosition {
    /// Row index (1 = top row)
    pub row: usize,
    /// Column index (1 = leftmost column)
    pub col: usize,
}

impl GridPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A rectangular area
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// X position (left edge)
    pub x: f64,
    /// Y position (top edge)
    pub y: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// How the size of an element along one axis is specified
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ElementExtent {
    /// The element has exactly this size
    Size(f64),
    /// The element fills its cell minus this gap
    Gap(f64),
}

/// Margins around the printable area of a page
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageMargins {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl PageMargins {
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

/// Physical page size and margins
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageGeometry {
    pub width: f64,
    pub height: f64,
    pub margins: PageMargins,
}

impl PageGeometry {
    /// The page minus its margins, positioned at the top-left margin corner
    pub fn printable_area(&self) -> Rect {
        Rect::new(
            self.margins.left,
            self.margins.top,
            self.width - self.margins.horizontal(),
            self.height - self.margins.vertical(),
        )
    }
}

/// Where one element lands on the page
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementPlacement {
    /// 1-based element index
    pub index: usize,
    pub position: GridPosition,
    /// Left edge of the element
    pub x: f64,
    /// Top edge of the element
    pub y: f64,
}
