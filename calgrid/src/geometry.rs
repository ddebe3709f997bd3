use crate::{
    data::{DayCell, Point},
    error::ExtractError,
    page::CellHandle,
};

/// Measured day cells of one month grid, in document order.
#[derive(Debug, Clone)]
pub struct DayIndex {
    cells: Vec<DayCell>,
    placeholder_cells: usize,
    unmeasurable_cells: usize,
}

impl DayIndex {
    /// Measure every grid cell that shows a day number.
    ///
    /// Cells whose day text is not a plain number (adjacent-month filler, blank
    /// padding) and cells that are not laid out are skipped. If nothing is left,
    /// no event could ever be placed, so this is an error rather than an empty index.
    pub fn build<'a>(
        cells: impl IntoIterator<Item = &'a dyn CellHandle>,
    ) -> Result<Self, ExtractError> {
        let mut index = Self {
            cells: vec![],
            placeholder_cells: 0,
            unmeasurable_cells: 0,
        };
        for cell in cells {
            let Some(day) = cell.day_text().as_deref().and_then(parse_day) else {
                index.placeholder_cells += 1;
                continue;
            };
            let Some(rect) = cell.bounding_box() else {
                tracing::debug!("day {day} has no bounding box, skipping");
                index.unmeasurable_cells += 1;
                continue;
            };
            index.cells.push(DayCell { day, rect });
        }

        if index.cells.is_empty() {
            return Err(ExtractError::GeometryUnavailable);
        }
        tracing::debug!("measured {} day cells", index.cells.len());
        Ok(index)
    }

    /// First cell whose rectangle contains `point`.
    pub fn locate(&self, point: Point) -> Option<&DayCell> {
        self.cells.iter().find(|cell| cell.rect.contains(point))
    }

    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    pub fn placeholder_cells(&self) -> usize {
        self.placeholder_cells
    }

    pub fn unmeasurable_cells(&self) -> usize {
        self.unmeasurable_cells
    }
}

/// A day label is a non-empty run of ascii digits, nothing else.
fn parse_day(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
