mod config;
pub mod constants;
pub mod layout;
mod options;
mod preview;
mod sheet;
mod stats;
mod types;
pub mod units;

pub use config::*;
pub use layout::*;
pub use options::*;
pub use preview::render_html;
pub use sheet::{LabelSlot, SheetLayout, compose_sheet, compose_sheet_strict, page_geometry};
pub use stats::{SheetStatistics, calculate_statistics};
pub use types::*;
pub use units::{NumericValue, parse_numeric, to_float, to_int};
