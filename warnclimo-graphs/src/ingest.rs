//! CSV ingestion and issuance timestamp normalization

use chrono::NaiveDateTime;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;
use warnclimo_common::{ClimoError, Result, WarningRecord};

/// Fixed issuance timestamp format: MM/DD/YY HH:MM
pub const ISSUANCE_FORMAT: &str = "%m/%d/%y %H:%M";

/// Raw CSV row as exported by the NWS warning climatology site
#[derive(Debug, Deserialize)]
struct WarningRow {
    #[serde(rename = "PRODUCT")]
    product: String,
    #[serde(rename = "ISSUANCE")]
    issuance: String,
}

/// Parse an issuance string with the fixed `MM/DD/YY HH:MM` format
pub fn parse_issuance(value: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), ISSUANCE_FORMAT).map_err(|e| {
        ClimoError::timestamp_with_source(
            format!("issuance does not match {ISSUANCE_FORMAT}"),
            value,
            e,
        )
    })
}

/// Load warning records from a CSV file
///
/// The file must carry `PRODUCT` and `ISSUANCE` header columns; additional
/// columns are ignored. A missing file, missing column, or unparseable
/// issuance string halts the run.
pub fn load_warnings<P: AsRef<Path>>(path: P) -> Result<Vec<WarningRecord>> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| ClimoError::ingest_with_source(format!("cannot open {}", path.display()), e))?;

    let headers = reader
        .headers()
        .map_err(|e| ClimoError::ingest_with_source("cannot read CSV header", e))?
        .clone();
    for column in ["PRODUCT", "ISSUANCE"] {
        if !headers.iter().any(|h| h == column) {
            return Err(ClimoError::ingest(format!(
                "missing required column: {column}"
            )));
        }
    }

    let mut records = Vec::new();
    for (index, row) in reader.deserialize::<WarningRow>().enumerate() {
        // Header occupies line 1; data rows start at line 2.
        let line = index + 2;
        let row = row.map_err(|e| ClimoError::ingest_with_source(format!("bad row at line {line}"), e))?;
        let issued = parse_issuance(&row.issuance).map_err(|e| match e {
            ClimoError::Timestamp {
                message,
                value,
                source,
            } => ClimoError::Timestamp {
                message: format!("line {line}: {message}"),
                value,
                source,
            },
            other => other,
        })?;
        records.push(WarningRecord::new(row.product, issued));
    }

    debug!(records = records.len(), path = %path.display(), "loaded warning records");
    Ok(records)
}
