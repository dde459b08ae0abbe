use crate::sheet::SheetLayout;

/// Summary numbers for a composed sheet
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetStatistics {
    pub labels: usize,
    pub blank_spaces: usize,
    pub cells_per_page: usize,
    pub pages: usize,
    /// Cells left empty after the last label
    pub unused_cells: usize,
}

/// Calculate statistics for a composed sheet
pub fn calculate_statistics(layout: &SheetLayout) -> SheetStatistics {
    let used = layout.slots.len();
    let capacity = layout.pages * layout.cells_per_page;

    SheetStatistics {
        labels: used - layout.blank_spaces,
        blank_spaces: layout.blank_spaces,
        cells_per_page: layout.cells_per_page,
        pages: layout.pages,
        unused_cells: capacity - used,
    }
}
