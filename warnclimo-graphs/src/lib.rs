//! Calendar-date counting and chart rendering for the warnclimo tool
//!
//! The pipeline is linear: [`ingest::load_warnings`] reads and normalizes
//! the warning record, [`aggregator::ClimatologyAggregator`] counts per
//! (product, calendar slot) and derives the combined "all" series, and
//! [`chart::ClimatologyChart`] renders one PNG bar chart per series.

pub mod aggregator;
pub mod calendar;
pub mod chart;
pub mod ingest;

pub use aggregator::{ClimatologyAggregator, ClimatologySeries, COMBINED_SERIES};
pub use calendar::{CalendarSlot, DAYS_IN_MONTH, YEAR_SLOTS};
pub use chart::{ChartStyle, ClimatologyChart};
pub use ingest::{load_warnings, parse_issuance, ISSUANCE_FORMAT};
