//! Common domain types used across the warnclimo application

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single historical warning: product type code plus issuance time.
///
/// One record per input row; immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningRecord {
    /// Warning product type code (e.g., "SVR", "TOR", "FFW")
    pub product: String,
    /// Issuance time as recorded by the issuing office (no timezone in the input)
    pub issued: NaiveDateTime,
}

impl WarningRecord {
    pub fn new(product: impl Into<String>, issued: NaiveDateTime) -> Self {
        Self {
            product: product.into(),
            issued,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_warning_record_construction() {
        let issued = NaiveDate::from_ymd_opt(2015, 6, 1)
            .unwrap()
            .and_hms_opt(14, 0, 0)
            .unwrap();
        let record = WarningRecord::new("SVR", issued);
        assert_eq!(record.product, "SVR");
        assert_eq!(record.issued, issued);
    }
}
