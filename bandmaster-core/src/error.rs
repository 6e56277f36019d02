//! Core error type.

use thiserror::Error;

/// Errors surfaced by the analysis core.
///
/// The core is deliberately hard to fail: insufficient history produces
/// NaN indicator values, degenerate ratios fall back to documented
/// constants. Only an empty price series or a malformed caller input
/// is an error.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("price series is empty — nothing to analyze")]
    EmptyPriceSeries,

    #[error("price series must be date-ascending with unique dates")]
    UnorderedPriceSeries,

    #[error("invalid position context: {0}")]
    InvalidPositionContext(String),
}
