use crate::{
    data::{AssociatedEvent, EventFragment, MonthContext},
    extract::{Skipped, TextExtractor},
    geometry::DayIndex,
    page::FragmentHandle,
};

/// Result of a successful extraction run.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Deduplicated events, ordered by date then time.
    pub events: Vec<AssociatedEvent>,
    pub report: ExtractionReport,
}

/// Counts of everything that was seen but didn't make it into the output.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct ExtractionReport {
    pub measured_cells: usize,
    pub placeholder_cells: usize,
    pub unmeasurable_cells: usize,
    pub fragments: usize,
    pub empty_titles: usize,
    pub unmeasurable_fragments: usize,
    /// Fragments whose center fell outside every day cell.
    pub unassociated: usize,
    pub duplicates: usize,
}

/// Places event fragments on the day whose cell contains their center.
pub struct Associator<'a> {
    days: &'a DayIndex,
    month: MonthContext,
    events: Vec<AssociatedEvent>,
    report: ExtractionReport,
}

impl<'a> Associator<'a> {
    pub fn new(days: &'a DayIndex, month: MonthContext) -> Self {
        Self {
            days,
            month,
            events: vec![],
            report: ExtractionReport {
                measured_cells: days.cells().len(),
                placeholder_cells: days.placeholder_cells(),
                unmeasurable_cells: days.unmeasurable_cells(),
                ..Default::default()
            },
        }
    }

    /// Run text extraction on a raw fragment, then associate it.
    pub fn push_raw(&mut self, extractor: &TextExtractor, fragment: &dyn FragmentHandle) {
        self.report.fragments += 1;
        match extractor.extract(fragment) {
            Ok(fragment) => self.associate(fragment),
            Err(Skipped::EmptyTitle) => self.report.empty_titles += 1,
            Err(Skipped::Unmeasurable) => {
                tracing::debug!("event fragment has no bounding box, skipping");
                self.report.unmeasurable_fragments += 1;
            }
        }
    }

    /// Associate an already extracted fragment. Fragments outside every cell and
    /// exact duplicates of an earlier event are dropped.
    pub fn push(&mut self, fragment: EventFragment) {
        self.report.fragments += 1;
        self.associate(fragment);
    }

    fn associate(&mut self, fragment: EventFragment) {
        let center = fragment.rect.center();
        let Some(cell) = self.days.locate(center) else {
            tracing::debug!(
                "event `{}` at ({}, {}) is outside every day cell, dropping",
                fragment.title,
                center.x,
                center.y
            );
            self.report.unassociated += 1;
            return;
        };
        let event = AssociatedEvent::new(self.month, cell.day, fragment.time, fragment.title);
        if self.events.contains(&event) {
            self.report.duplicates += 1;
            return;
        }
        self.events.push(event);
    }

    /// Sort and hand over the events. Sorting is stable, so events with the same
    /// date and time keep document order.
    pub fn finish(self) -> Extraction {
        let mut events = self.events;
        events.sort_by(|left, right| left.sort_key().cmp(&right.sort_key()));
        Extraction {
            events,
            report: self.report,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        data::Rect,
        page::CellHandle,
        snapshot::{CellSnapshot, FragmentSnapshot},
    };

    /// Seven 100x100 columns starting at day 1 on the first row.
    fn week_grid() -> DayIndex {
        let cells: Vec<_> = (0..14)
            .map(|i| CellSnapshot {
                day: Some((i + 1).to_string()),
                rect: Some(Rect::new(
                    (i % 7) as f64 * 100.,
                    (i / 7) as f64 * 100.,
                    100.,
                    100.,
                )),
            })
            .collect();
        DayIndex::build(cells.iter().map(|c| c as &dyn CellHandle)).unwrap()
    }

    fn may() -> MonthContext {
        "2024-05".parse().unwrap()
    }

    /// An 80x20 fragment with its top left corner at `(x, y)`.
    fn fragment(time: Option<&str>, title: &str, x: f64, y: f64) -> EventFragment {
        EventFragment {
            title: title.to_owned(),
            time: time.map(str::to_owned),
            rect: Rect::new(x, y, 80., 20.),
        }
    }

    #[test]
    fn center_decides_the_day() {
        let grid = week_grid();
        let mut assoc = Associator::new(&grid, may());
        // starts in day 1 but mostly lies in day 2
        assoc.push(fragment(Some("10:00"), "Meeting", 90., 10.));
        // second row, third column
        assoc.push(fragment(None, "Holiday", 205., 150.));
        let out = assoc.finish();
        assert_eq!(out.events[0].date, "2024-05-02");
        assert_eq!(out.events[1].date, "2024-05-10");
    }

    #[test]
    fn zero_pads_day() {
        let grid = week_grid();
        let mut assoc = Associator::new(&grid, may());
        assoc.push(fragment(None, "Five", 410., 10.));
        assert_eq!(assoc.finish().events[0].date, "2024-05-05");
    }

    #[test]
    fn center_on_shared_edge() {
        let grid = week_grid();
        let mut assoc = Associator::new(&grid, may());
        // center x = 100, the left edge of day 2
        assoc.push(fragment(None, "Edge", 60., 10.));
        // center y = 100, the top edge of day 8
        assoc.push(fragment(None, "Edge", 10., 90.));
        let dates: Vec<_> = assoc.finish().events.into_iter().map(|e| e.date).collect();
        assert_eq!(dates, ["2024-05-02", "2024-05-08"]);
    }

    #[test]
    fn outside_every_cell_is_dropped() {
        let grid = week_grid();
        let mut assoc = Associator::new(&grid, may());
        assoc.push(fragment(None, "Lost", 800., 10.));
        assoc.push(fragment(None, "Above", 10., -50.));
        let out = assoc.finish();
        assert!(out.events.is_empty());
        assert_eq!(out.report.unassociated, 2);
        assert_eq!(out.report.fragments, 2);
    }

    #[test]
    fn identical_events_collapse() {
        let grid = week_grid();
        let mut assoc = Associator::new(&grid, may());
        assoc.push(fragment(Some("10:00"), "Meeting", 10., 10.));
        // overlapping render of the same event
        assoc.push(fragment(Some("10:00"), "Meeting", 12., 40.));
        let out = assoc.finish();
        assert_eq!(out.events.len(), 1);
        assert_eq!(out.report.duplicates, 1);
    }

    #[test]
    fn same_title_different_time_is_kept() {
        let grid = week_grid();
        let mut assoc = Associator::new(&grid, may());
        assoc.push(fragment(Some("10:00"), "Feeding", 10., 10.));
        assoc.push(fragment(Some("14:00"), "Feeding", 10., 40.));
        assoc.push(fragment(None, "Feeding", 10., 70.));
        let out = assoc.finish();
        assert_eq!(out.events.len(), 3);
        assert_eq!(out.report.duplicates, 0);
    }

    #[test]
    fn same_title_different_day_is_kept() {
        let grid = week_grid();
        let mut assoc = Associator::new(&grid, may());
        assoc.push(fragment(Some("10:00"), "Gym", 10., 10.));
        assoc.push(fragment(Some("10:00"), "Gym", 110., 10.));
        assert_eq!(assoc.finish().events.len(), 2);
    }

    #[test]
    fn sorted_by_date_then_time() {
        let grid = week_grid();
        let mut assoc = Associator::new(&grid, may());
        // day 10
        assoc.push(fragment(Some("09:00"), "A", 210., 110.));
        assoc.push(fragment(None, "B", 210., 140.));
        // day 9
        assoc.push(fragment(Some("08:00"), "C", 110., 110.));
        let titles: Vec<_> = assoc.finish().events.into_iter().map(|e| e.title).collect();
        assert_eq!(titles, ["C", "B", "A"]);
    }

    #[test]
    fn equal_keys_keep_document_order() {
        let grid = week_grid();
        let mut assoc = Associator::new(&grid, may());
        assoc.push(fragment(Some("09:00"), "Second", 10., 10.));
        assoc.push(fragment(Some("09:00"), "First", 10., 40.));
        let titles: Vec<_> = assoc.finish().events.into_iter().map(|e| e.title).collect();
        assert_eq!(titles, ["Second", "First"]);
    }

    #[test]
    fn raw_fragments_counted_by_reason() {
        let grid = week_grid();
        let extractor = TextExtractor::default();
        let fragments = [
            FragmentSnapshot {
                time: Some("10:00".into()),
                text: Some("10:00 Meeting".into()),
                rect: Some(Rect::new(10., 10., 80., 20.)),
                ..Default::default()
            },
            FragmentSnapshot {
                text: Some(" ".into()),
                rect: Some(Rect::new(10., 40., 80., 20.)),
                ..Default::default()
            },
            FragmentSnapshot {
                title: Some("Hidden".into()),
                ..Default::default()
            },
        ];
        let mut assoc = Associator::new(&grid, may());
        for fragment in &fragments {
            assoc.push_raw(&extractor, fragment);
        }
        let out = assoc.finish();
        assert_eq!(
            out.events,
            [AssociatedEvent {
                date: "2024-05-01".into(),
                time: Some("10:00".into()),
                title: "Meeting".into(),
            }]
        );
        assert_eq!(out.report.fragments, 3);
        assert_eq!(out.report.empty_titles, 1);
        assert_eq!(out.report.unmeasurable_fragments, 1);
        assert_eq!(out.report.measured_cells, 14);
    }
}
