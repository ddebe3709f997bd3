//! The seam between the extraction core and whatever renders the calendar.
//!
//! A provider hands over a page whose grid and event fragments are fully laid out.
//! Every lookup may come back empty; the core treats that as "not present" and
//! skips or falls back, it never fails on a missing element.

use crate::data::Rect;

/// A rendered, authenticated calendar month page.
pub trait Page {
    /// Raw text of the page-level date indicator, e.g. `2024-05`.
    fn month_indicator(&self) -> Option<String>;

    /// Grid cells in document order.
    fn day_cells(&self) -> Vec<&dyn CellHandle>;

    /// Event fragments in document order.
    fn event_fragments(&self) -> Vec<&dyn FragmentHandle>;
}

pub trait CellHandle {
    /// Text of the nested element showing the day number.
    fn day_text(&self) -> Option<String>;

    /// `None` if the cell is not laid out.
    fn bounding_box(&self) -> Option<Rect>;
}

pub trait FragmentHandle {
    /// Text of the dedicated title element.
    fn title_text(&self) -> Option<String>;

    /// Text of the dedicated time label.
    fn time_text(&self) -> Option<String>;

    /// Full text of the fragment's interactive control. `None` if the fragment
    /// has no control at all.
    fn control_text(&self) -> Option<String>;

    /// `None` if the fragment is not laid out.
    fn bounding_box(&self) -> Option<Rect>;
}
