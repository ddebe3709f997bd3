pub mod associate;
pub mod config;
pub mod data;
pub mod error;
pub mod extract;
pub mod geometry;
pub mod page;
pub mod sink;
pub mod snapshot;

use crate::{
    associate::{Associator, Extraction},
    data::MonthContext,
    error::ExtractError,
    extract::TextExtractor,
    geometry::DayIndex,
    page::Page,
};

/// Extract every event on `page` and place it on its calendar day.
///
/// Every problem with a single cell or fragment is absorbed and counted in the
/// report. The run fails on exactly three conditions: no measurable day cell
/// ([`ExtractError::GeometryUnavailable`], checked first), and, beyond that, a
/// missing ([`ExtractError::MissingMonthContext`]) or malformed
/// ([`ExtractError::MonthContext`]) month indicator, since no date can be built
/// without one. An empty event list is a success.
pub fn extract_events(
    page: &dyn Page,
    extractor: &TextExtractor,
) -> Result<Extraction, ExtractError> {
    let days = DayIndex::build(page.day_cells())?;
    let month: MonthContext = page
        .month_indicator()
        .ok_or(ExtractError::MissingMonthContext)?
        .parse()?;

    let mut associator = Associator::new(&days, month);
    for fragment in page.event_fragments() {
        associator.push_raw(extractor, fragment);
    }
    let extraction = associator.finish();

    let report = &extraction.report;
    if extraction.events.is_empty() && report.fragments > 0 {
        tracing::warn!(
            "found {} day cells and {} event fragments, but no events could be placed",
            report.measured_cells,
            report.fragments
        );
    }
    tracing::info!(
        "{} events extracted for {month} ({} unassociated, {} duplicates, {} without title)",
        extraction.events.len(),
        report.unassociated,
        report.duplicates,
        report.empty_titles
    );
    Ok(extraction)
}
