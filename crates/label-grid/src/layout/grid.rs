//! Grid layout calculation
//!
//! This module derives the grid shape from any two of rows, columns and
//! element count, maps 1-based element indices to cells, and positions each
//! element centered within its cell.

use crate::types::*;

use super::{ElementExtent, ElementPlacement, GridPosition, Rect};

// =============================================================================
// Grid Dimensions
// =============================================================================

/// Row and column counts of a grid.
///
/// Counts are whole numbers. A missing count is derived with a ceiling
/// division, which is exact for the integral inputs the configuration allows.
/// Both counts are positive and their product fits in a `usize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDimensions {
    rows: usize,
    columns: usize,
    cells: usize,
    elements: Option<usize>,
}

impl GridDimensions {
    /// Build a grid from at least two of rows, columns and element count.
    ///
    /// When rows is missing it becomes `ceil(elements / columns)`; when
    /// columns is missing it becomes `ceil(elements / rows)`.
    pub fn new(rows: Option<usize>, columns: Option<usize>, elements: Option<usize>) -> Result<Self> {
        let (rows, columns) = match (rows, columns, elements) {
            (Some(rows), Some(columns), _) => (rows, columns),
            (None, Some(columns), Some(elements)) if columns > 0 => {
                (elements.div_ceil(columns), columns)
            }
            (Some(rows), None, Some(elements)) if rows > 0 => (rows, elements.div_ceil(rows)),
            (Some(0), _, _) | (_, Some(0), _) => (0, 0),
            _ => {
                return Err(LabelError::InvalidArguments(
                    "at least 2 of rows, columns or elements are needed to size the grid"
                        .to_string(),
                ));
            }
        };

        if rows == 0 || columns == 0 {
            return Err(LabelError::InvalidArguments(format!(
                "rows and columns must be positive, got {} x {}",
                rows, columns
            )));
        }
        let cells = rows.checked_mul(columns).ok_or_else(|| {
            LabelError::InvalidArguments(format!(
                "{} rows x {} columns is too many cells",
                rows, columns
            ))
        })?;

        log::debug!(
            "Grid sized to {} rows x {} columns for {:?} elements",
            rows,
            columns,
            elements
        );

        Ok(Self {
            rows,
            columns,
            cells,
            elements,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Element count, if one was supplied
    pub fn elements(&self) -> Option<usize> {
        self.elements
    }

    /// Total number of cells (rows x columns)
    pub fn cells(&self) -> usize {
        self.cells
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index == 0 || index > self.cells() {
            return Err(LabelError::IndexOutOfRange {
                index,
                cells: self.cells(),
            });
        }
        Ok(())
    }

    /// Cell for a 1-based index when filling whole columns first
    pub fn position_by_column(&self, index: usize) -> Result<GridPosition> {
        self.check_index(index)?;
        let col = index.div_ceil(self.rows);
        let row = index - (col - 1) * self.rows;
        Ok(GridPosition::new(row, col))
    }

    /// Cell for a 1-based index when filling whole rows first
    pub fn position_by_row(&self, index: usize) -> Result<GridPosition> {
        self.check_index(index)?;
        let row = index.div_ceil(self.columns);
        let col = index - (row - 1) * self.columns;
        Ok(GridPosition::new(row, col))
    }

    pub fn position(&self, index: usize, order: FillOrder) -> Result<GridPosition> {
        match order {
            FillOrder::ByRow => self.position_by_row(index),
            FillOrder::ByColumn => self.position_by_column(index),
        }
    }

    /// 1-based index of a cell under the given fill order
    pub fn index_of(&self, pos: GridPosition, order: FillOrder) -> usize {
        match order {
            FillOrder::ByRow => (pos.row - 1) * self.columns + pos.col,
            FillOrder::ByColumn => (pos.col - 1) * self.rows + pos.row,
        }
    }
}

// =============================================================================
// Grid Geometry
// =============================================================================

/// Physical layout of a grid of equally sized elements over an area
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    dimensions: GridDimensions,
    /// Width of each element
    pub element_width: f64,
    /// Height of each element
    pub element_height: f64,
    /// Area the grid spans; its top-left corner is the grid origin
    pub area: Rect,
}

impl GridLayout {
    /// Lay `dimensions` out over `area`.
    ///
    /// A `Gap` extent sizes the element as the cell size minus the gap.
    pub fn new(
        dimensions: GridDimensions,
        area: Rect,
        element_width: ElementExtent,
        element_height: ElementExtent,
    ) -> Self {
        let column_width = area.width / dimensions.columns as f64;
        let row_height = area.height / dimensions.rows as f64;

        let element_width = match element_width {
            ElementExtent::Size(width) => width,
            ElementExtent::Gap(gap) => column_width - gap,
        };
        let element_height = match element_height {
            ElementExtent::Size(height) => height,
            ElementExtent::Gap(gap) => row_height - gap,
        };

        Self {
            dimensions,
            element_width,
            element_height,
            area,
        }
    }

    pub fn dimensions(&self) -> &GridDimensions {
        &self.dimensions
    }

    pub fn rows(&self) -> usize {
        self.dimensions.rows
    }

    pub fn columns(&self) -> usize {
        self.dimensions.columns
    }

    pub fn cells(&self) -> usize {
        self.dimensions.cells()
    }

    /// Width of a single column
    pub fn column_width(&self) -> f64 {
        self.area.width / self.columns() as f64
    }

    /// Height of a single row
    pub fn row_height(&self) -> f64 {
        self.area.height / self.rows() as f64
    }

    /// Horizontal space left in a column around its element.
    ///
    /// Negative when the element is wider than its column.
    pub fn column_element_offset(&self) -> f64 {
        self.column_width() - self.element_width
    }

    /// Vertical space left in a row around its element.
    ///
    /// Negative when the element is taller than its row.
    pub fn row_element_offset(&self) -> f64 {
        self.row_height() - self.element_height
    }

    /// Distance from a column edge to the element edge
    pub fn column_edge_offset(&self) -> f64 {
        self.column_element_offset() / 2.0
    }

    /// Distance from a row edge to the element edge
    pub fn row_edge_offset(&self) -> f64 {
        self.row_element_offset() / 2.0
    }

    /// Bounds of the cell at `pos`
    pub fn cell_bounds(&self, pos: GridPosition) -> Rect {
        Rect::new(
            self.area.x + self.column_width() * (pos.col - 1) as f64,
            self.area.y + self.row_height() * (pos.row - 1) as f64,
            self.column_width(),
            self.row_height(),
        )
    }

    /// Bounds of the element centered in the cell at `pos`
    pub fn element_bounds(&self, pos: GridPosition) -> Rect {
        let cell = self.cell_bounds(pos);
        Rect::new(
            cell.x + self.column_edge_offset(),
            cell.y + self.row_edge_offset(),
            self.element_width,
            self.element_height,
        )
    }

    /// Top-left corner and cell of the element at a 1-based index
    pub fn element_coordinates(&self, index: usize, order: FillOrder) -> Result<ElementPlacement> {
        let position = self.dimensions.position(index, order)?;
        let bounds = self.element_bounds(position);

        Ok(ElementPlacement {
            index,
            position,
            x: bounds.x,
            y: bounds.y,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
