//! Swing-band signal-scoring and decision core.
//!
//! A deterministic pipeline over daily OHLCV history: technical
//! indicators, band-regime classification, a six-dimension signal check,
//! a decision matrix with position sizing, and a stop ladder. All
//! computation is pure and synchronous; market data arrives through the
//! provider traits in [`data`].
//!
//! The six public operations:
//! - [`frame::compute_indicators`]
//! - [`analysis::classify_band`]
//! - [`analysis::evaluate_signals`]
//! - [`decision::decide`]
//! - [`decision::size_position`]
//! - [`decision::compute_stops`]
//!
//! or run end to end with [`analysis::analyze`].

pub mod analysis;
pub mod config;
pub mod data;
pub mod decision;
pub mod domain;
pub mod error;
pub mod frame;
pub mod indicators;

pub use analysis::{analyze, classify_band, evaluate_signals, Analysis, BandInfo, SignalResult};
pub use config::AnalysisConfig;
pub use decision::{compute_stops, decide, size_position, Decision, PositionAllocation, StopPlan};
pub use domain::{CompanyProfile, FundFlowSnapshot, PositionContext, PriceBar};
pub use error::AnalysisError;
pub use frame::{compute_indicators, IndicatorFrame};
