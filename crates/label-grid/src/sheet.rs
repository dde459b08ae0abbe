use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use crate::config::{PrintConfig, PrintField};
use crate::layout::*;
use crate::types::*;

/// One slot on a label sheet
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LabelSlot {
    /// Rendered label, `None` for a blank placeholder
    pub fragment: Option<String>,
    /// 1-based page number
    pub page: usize,
    /// Placement within the page
    pub placement: ElementPlacement,
}

impl LabelSlot {
    pub fn is_blank(&self) -> bool {
        self.fragment.is_none()
    }

    pub fn position(&self) -> GridPosition {
        self.placement.position
    }
}

/// A fully computed sheet of labels, ready for presentation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SheetLayout {
    /// Blanks first, then labels in input order
    pub slots: Vec<LabelSlot>,
    pub rows: usize,
    pub columns: usize,
    pub cells_per_page: usize,
    pub pages: usize,
    pub blank_spaces: usize,
    pub label_width: f64,
    pub label_height: f64,
    pub page: PageGeometry,
    /// Shared unit of every dimension; empty when none was given
    pub unit: String,
    pub fill_order: FillOrder,
    pub fit: FitReport,
    /// Effective settings, for echoing back into a settings form
    pub settings: BTreeMap<&'static str, Option<RawValue>>,
}

impl SheetLayout {
    pub fn row_range(&self) -> RangeInclusive<usize> {
        1..=self.rows
    }

    pub fn column_range(&self) -> RangeInclusive<usize> {
        1..=self.columns
    }

    /// Slots that carry a label
    pub fn labels(&self) -> impl Iterator<Item = &LabelSlot> {
        self.slots.iter().filter(|slot| !slot.is_blank())
    }

    /// Slots printed on the given 1-based page
    pub fn page_slots(&self, page: usize) -> impl Iterator<Item = &LabelSlot> {
        self.slots.iter().filter(move |slot| slot.page == page)
    }
}

/// Page size and margins from the configuration.
///
/// Page width and height are required; unset margins count as zero.
pub fn page_geometry(config: &PrintConfig) -> Result<PageGeometry> {
    Ok(PageGeometry {
        width: config.required_number(PrintField::PageWidth)?,
        height: config.required_number(PrintField::PageHeight)?,
        margins: PageMargins {
            top: config.number_or_zero(PrintField::PageTopMargin),
            bottom: config.number_or_zero(PrintField::PageBottomMargin),
            left: config.number_or_zero(PrintField::PageLeftMargin),
            right: config.number_or_zero(PrintField::PageRightMargin),
        },
    })
}

/// Lay out `labels` on label sheets, after `blank_spaces` empty slots.
///
/// The configuration must use a single unit. The fit check runs before any
/// slot is produced; its outcome is attached to the layout.
pub fn compose_sheet(
    config: &PrintConfig,
    labels: &[String],
    blank_spaces: usize,
    fill_order: FillOrder,
) -> Result<SheetLayout> {
    let unit = config.shared_unit()?;

    if labels.is_empty() {
        return Err(LabelError::InvalidArguments(
            "No labels selected for printing".to_string(),
        ));
    }

    let page = page_geometry(config)?;
    let printable = page.printable_area();
    if printable.width <= 0.0 || printable.height <= 0.0 {
        return Err(LabelError::InvalidArguments(format!(
            "Margins leave no printable area ({}{} x {}{})",
            printable.width, unit, printable.height, unit
        )));
    }

    let label_width = config.required_number(PrintField::LabelWidth)?;
    let label_height = config.required_number(PrintField::LabelHeight)?;

    let total = blank_spaces.checked_add(labels.len()).ok_or_else(|| {
        LabelError::InvalidArguments(format!("Too many blank spaces: {}", blank_spaces))
    })?;
    let dimensions = GridDimensions::new(
        config.count(PrintField::PageRows)?,
        config.count(PrintField::PageColumns)?,
        Some(total),
    )?;
    let grid = GridLayout::new(
        dimensions,
        printable,
        ElementExtent::Size(label_width),
        ElementExtent::Size(label_height),
    );

    let fit = check_fit(&grid, &page, &unit);

    let cells = grid.cells();
    let fragments = std::iter::repeat_n(None, blank_spaces).chain(labels.iter().cloned().map(Some));
    let slots = fragments
        .enumerate()
        .map(|(i, fragment)| {
            let placement = grid.element_coordinates(i % cells + 1, fill_order)?;
            Ok(LabelSlot {
                fragment,
                page: i / cells + 1,
                placement,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let pages = total.div_ceil(cells);
    log::debug!(
        "Composed {} labels ({} blank) on {} page(s) of {} x {}",
        labels.len(),
        blank_spaces,
        pages,
        grid.columns(),
        grid.rows()
    );

    Ok(SheetLayout {
        slots,
        rows: grid.rows(),
        columns: grid.columns(),
        cells_per_page: cells,
        pages,
        blank_spaces,
        label_width,
        label_height,
        page,
        unit,
        fill_order,
        fit,
        settings: config.effective_values(),
    })
}

/// Like [`compose_sheet`], but a layout that does not fit is an error
pub fn compose_sheet_strict(
    config: &PrintConfig,
    labels: &[String],
    blank_spaces: usize,
    fill_order: FillOrder,
) -> Result<SheetLayout> {
    let layout = compose_sheet(config, labels, blank_spaces, fill_order)?;
    match layout.fit.message() {
        Some(message) => Err(LabelError::Overflow(message)),
        None => Ok(layout),
    }
}
