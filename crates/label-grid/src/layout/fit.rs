//! Page overflow detection
//!
//! Checks whether a grid of elements fits inside the page it was laid out
//! on, and describes each axis that does not.

use std::fmt;

use crate::constants::EXTENT_TOLERANCE;
use crate::types::*;

use super::{GridLayout, PageGeometry};

/// One axis on which the elements do not fit
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Overflow {
    pub axis: Axis,
    /// Extent the elements plus margins need along this axis
    pub required: f64,
    /// Configured page extent along this axis
    pub available: f64,
}

impl Overflow {
    /// How far the required extent exceeds the page
    pub fn excess(&self) -> f64 {
        self.required - self.available
    }
}

/// Result of checking a grid against its page
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitReport {
    pub overflows: Vec<Overflow>,
    /// Unit used when formatting the diagnostic
    pub unit: String,
}

impl FitReport {
    pub fn fits(&self) -> bool {
        self.overflows.is_empty()
    }

    /// User-facing diagnostic, `None` when everything fits
    pub fn message(&self) -> Option<String> {
        if self.fits() {
            None
        } else {
            Some(self.to_string())
        }
    }
}

impl fmt::Display for FitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fits() {
            return f.write_str("Labels fit on the page.");
        }

        f.write_str("Labels don't fit on the page with the current configuration.")?;
        for overflow in &self.overflows {
            let (adjective, dimension) = match overflow.axis {
                Axis::Horizontal => ("wide", "width"),
                Axis::Vertical => ("tall", "height"),
            };
            write!(
                f,
                " Too {} ({}{}) for page {} ({}{}).",
                adjective,
                overflow.required,
                self.unit,
                dimension,
                overflow.available,
                self.unit
            )?;
        }
        Ok(())
    }
}

/// Check `grid` against `page`.
///
/// An axis overflows when the cells multiplied back out exceed the printable
/// extent, or when the element is larger than its cell.
pub fn check_fit(grid: &GridLayout, page: &PageGeometry, unit: &str) -> FitReport {
    let printable = page.printable_area();
    let mut overflows = Vec::new();

    let total_width = (grid.column_element_offset() + grid.element_width) * grid.columns() as f64;
    if total_width > printable.width + EXTENT_TOLERANCE
        || grid.column_element_offset() < -EXTENT_TOLERANCE
    {
        overflows.push(Overflow {
            axis: Axis::Horizontal,
            required: grid.element_width * grid.columns() as f64 + page.margins.horizontal(),
            available: page.width,
        });
    }

    let total_height = (grid.row_element_offset() + grid.element_height) * grid.rows() as f64;
    if total_height > printable.height + EXTENT_TOLERANCE
        || grid.row_element_offset() < -EXTENT_TOLERANCE
    {
        overflows.push(Overflow {
            axis: Axis::Vertical,
            required: grid.element_height * grid.rows() as f64 + page.margins.vertical(),
            available: page.height,
        });
    }

    let report = FitReport {
        overflows,
        unit: unit.to_string(),
    };
    if !report.fits() {
        log::warn!("{}", report);
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{ElementExtent, GridDimensions, PageMargins};

    fn page() -> PageGeometry {
        PageGeometry {
            width: 210.0,
            height: 297.0,
            margins: PageMargins {
                top: 14.0,
                bottom: 14.0,
                left: 6.0,
                right: 6.0,
            },
        }
    }

    fn grid(columns: usize, rows: usize, width: f64, height: f64) -> GridLayout {
        let page = page();
        GridLayout::new(
            GridDimensions::new(Some(rows), Some(columns), None).unwrap(),
            page.printable_area(),
            ElementExtent::Size(width),
            ElementExtent::Size(height),
        )
    }

    #[test]
    fn test_exact_fit() {
        let report = check_fit(&grid(3, 9, 64.0, 29.0), &page(), "mm");
        assert!(report.fits());
        assert_eq!(report.message(), None);
    }

    #[test]
    fn test_too_wide() {
        let report = check_fit(&grid(3, 9, 70.0, 29.0), &page(), "mm");
        assert_eq!(report.overflows.len(), 1);

        let overflow = &report.overflows[0];
        assert_eq!(overflow.axis, Axis::Horizontal);
        assert_eq!(overflow.required, 222.0);
        assert_eq!(overflow.available, 210.0);
        assert_eq!(overflow.excess(), 12.0);

        let message = report.message().unwrap();
        assert!(message.contains("Too wide (222mm) for page width (210mm)."));
    }

    #[test]
    fn test_too_tall_and_wide() {
        let report = check_fit(&grid(3, 9, 70.0, 32.0), &page(), "mm");
        let axes: Vec<_> = report.overflows.iter().map(|o| o.axis).collect();
        assert_eq!(axes, vec![Axis::Horizontal, Axis::Vertical]);
        assert!(report.to_string().contains("Too tall (316mm) for page height (297mm)."));
    }

    #[test]
    fn test_thirds_do_not_trip_tolerance() {
        let page = PageGeometry {
            width: 200.0,
            height: 100.0,
            margins: PageMargins::default(),
        };
        let grid = GridLayout::new(
            GridDimensions::new(Some(1), Some(3), None).unwrap(),
            page.printable_area(),
            ElementExtent::Size(200.0 / 3.0),
            ElementExtent::Size(100.0),
        );
        assert!(check_fit(&grid, &page, "").fits());
    }
}
