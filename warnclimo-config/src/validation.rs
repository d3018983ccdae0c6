//! Validation utilities and regex patterns

use regex::Regex;
use std::sync::LazyLock;
use validator::ValidationError;

/// Regex pattern for WFO identifiers (e.g., FWD, OUN, KOUN)
pub static OFFICE_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3,4}$").expect("Invalid office code regex pattern"));

/// Regex pattern for warning product codes (e.g., SVR, TOR, FFW)
pub static PRODUCT_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2,4}$").expect("Invalid product code regex pattern"));

/// Validate a WFO identifier
pub fn validate_office_code(code: &str) -> Result<(), ValidationError> {
    if code.is_empty() {
        return Err(ValidationError::new("empty_office_code"));
    }

    if OFFICE_CODE_REGEX.is_match(code) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_office_code"))
    }
}

/// Validate a period-of-record year label (chart subtitle text, e.g. "1987")
pub fn validate_year_label(year: &str) -> Result<(), ValidationError> {
    if year.len() == 4 && year.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_year_label"))
    }
}

/// Validate the configured list of warning product codes
///
/// "all" is reserved for the implicit combined series and cannot be
/// configured explicitly.
pub fn validate_product_codes(products: &Vec<String>) -> Result<(), ValidationError> {
    if products.is_empty() {
        return Err(ValidationError::new("empty_product_list"));
    }

    for product in products {
        if product == "all" {
            return Err(ValidationError::new("reserved_product_code"));
        }
        if !PRODUCT_CODE_REGEX.is_match(product) {
            return Err(ValidationError::new("invalid_product_code"));
        }
    }

    Ok(())
}
