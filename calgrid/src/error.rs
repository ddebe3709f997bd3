use reqwest::StatusCode;
use thiserror::Error;

use crate::data::MonthContextError;

/// Failures that abort an extraction run.
///
/// Everything else that can go wrong with a single cell or fragment is absorbed
/// and only shows up in the [`ExtractionReport`](crate::associate::ExtractionReport).
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no day geometry found: no calendar cell could be measured")]
    GeometryUnavailable,
    #[error("page has no month indicator")]
    MissingMonthContext,
    #[error("bad month indicator")]
    MonthContext(#[from] MonthContextError),
}

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("couldn't build http client")]
    Client(#[source] reqwest::Error),
    #[error("request to webhook failed")]
    Transport(#[from] reqwest::Error),
    #[error("webhook responded with {status}: {body}")]
    Status { status: StatusCode, body: String },
}
