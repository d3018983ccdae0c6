//! Per-calendar-date counting and the combined "all" series

use crate::calendar::CalendarSlot;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;
use warnclimo_common::{Result, WarningRecord};

/// Name of the implicit combined series
pub const COMBINED_SERIES: &str = "all";

/// A named series of warning counts over the fixed 366-slot calendar
///
/// The key set is always exactly the 366 fixed slots, ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClimatologySeries {
    pub name: String,
    pub counts: BTreeMap<CalendarSlot, u32>,
}

impl ClimatologySeries {
    /// A series covering every calendar slot with a zero count
    fn zeroed(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            counts: CalendarSlot::year_slots()
                .into_iter()
                .map(|slot| (slot, 0))
                .collect(),
        }
    }

    /// Count at a single slot
    pub fn count(&self, slot: CalendarSlot) -> u32 {
        self.counts.get(&slot).copied().unwrap_or(0)
    }

    /// Total warnings across the whole calendar
    pub fn total(&self) -> u64 {
        self.counts.values().map(|&c| u64::from(c)).sum()
    }
}

/// Aggregates warning records into per-product calendar-date counts
#[derive(Debug, Clone)]
pub struct ClimatologyAggregator {
    products: Vec<String>,
}

impl ClimatologyAggregator {
    pub fn new(products: Vec<String>) -> Self {
        Self { products }
    }

    /// Count warnings per (product, calendar slot) and append the combined
    /// "all" series
    ///
    /// A single pass over the records builds the counts; records whose
    /// product is not configured are ignored, so the "all" series sums only
    /// the configured products. The returned series follow the configured
    /// product order, with "all" last.
    pub fn aggregate(&self, records: &[WarningRecord]) -> Result<Vec<ClimatologySeries>> {
        let mut slot_counts: HashMap<(usize, CalendarSlot), u32> = HashMap::new();

        for record in records {
            let Some(product_index) = self.products.iter().position(|p| p == &record.product)
            else {
                continue;
            };
            let slot = CalendarSlot::from_datetime(&record.issued)?;
            *slot_counts.entry((product_index, slot)).or_insert(0) += 1;
        }

        let mut series: Vec<ClimatologySeries> = self
            .products
            .iter()
            .map(|product| ClimatologySeries::zeroed(product.as_str()))
            .collect();
        for ((product_index, slot), count) in slot_counts {
            series[product_index].counts.insert(slot, count);
        }

        let mut combined = ClimatologySeries::zeroed(COMBINED_SERIES);
        for product_series in &series {
            for (slot, count) in &product_series.counts {
                *combined.counts.entry(*slot).or_insert(0) += count;
            }
        }
        series.push(combined);

        debug!(
            products = self.products.len(),
            records = records.len(),
            "aggregated warning climatology"
        );
        Ok(series)
    }
}
