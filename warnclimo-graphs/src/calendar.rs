//! Fixed 366-slot climatology calendar
//!
//! Calendar slots are (month, day) pairs detached from any specific year.
//! February always has 29 days so every run produces the same 366-slot
//! x-axis, whether or not the period of record contains a leap year.

use chrono::{Datelike, NaiveDateTime};
use std::fmt;
use warnclimo_common::{ClimoError, Result};

/// Fixed days per month; February is hard-coded to 29
pub const DAYS_IN_MONTH: [u8; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Number of slots in the fixed calendar (sum of `DAYS_IN_MONTH`)
pub const YEAR_SLOTS: usize = 366;

/// A calendar date of the year, independent of year
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarSlot {
    month: u8,
    day: u8,
}

impl CalendarSlot {
    /// Create a slot, validating month and day against the fixed table
    pub fn new(month: u8, day: u8) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(ClimoError::calendar(format!("invalid month: {month}")));
        }
        let max_day = DAYS_IN_MONTH[usize::from(month - 1)];
        if day < 1 || day > max_day {
            return Err(ClimoError::calendar(format!(
                "invalid day {day} for month {month} (max {max_day})"
            )));
        }
        Ok(Self { month, day })
    }

    /// Derive the slot from an issuance time, discarding year and time of day
    pub fn from_datetime(issued: &NaiveDateTime) -> Result<Self> {
        Self::new(issued.month() as u8, issued.day() as u8)
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    /// Zero-padded "MM/DD" label used on chart axes
    pub fn label(&self) -> String {
        format!("{:02}/{:02}", self.month, self.day)
    }

    /// All 366 slots in ascending (month, day) order
    pub fn year_slots() -> Vec<CalendarSlot> {
        let mut slots = Vec::with_capacity(YEAR_SLOTS);
        for (month_index, &days) in DAYS_IN_MONTH.iter().enumerate() {
            for day in 1..=days {
                slots.push(Self {
                    month: month_index as u8 + 1,
                    day,
                });
            }
        }
        slots
    }
}

impl fmt::Display for CalendarSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}", self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_days_in_month_table() {
        assert_eq!(DAYS_IN_MONTH.iter().map(|&d| usize::from(d)).sum::<usize>(), YEAR_SLOTS);
        // February is always 29
        assert_eq!(DAYS_IN_MONTH[1], 29);
    }

    #[test]
    fn test_new_valid_slots() {
        assert!(CalendarSlot::new(1, 1).is_ok());
        assert!(CalendarSlot::new(12, 31).is_ok());
        // Synthetic Feb 29 is a valid slot regardless of year
        assert!(CalendarSlot::new(2, 29).is_ok());
    }

    #[test]
    fn test_new_invalid_month() {
        assert!(CalendarSlot::new(0, 1).is_err());
        assert!(CalendarSlot::new(13, 1).is_err());
    }

    #[test]
    fn test_new_invalid_day() {
        assert!(CalendarSlot::new(2, 30).is_err());
        assert!(CalendarSlot::new(4, 31).is_err());
        assert!(CalendarSlot::new(6, 0).is_err());
    }

    #[test]
    fn test_from_datetime_discards_year_and_time() {
        let a = NaiveDate::from_ymd_opt(2015, 6, 1)
            .unwrap()
            .and_hms_opt(14, 0, 0)
            .unwrap();
        let b = NaiveDate::from_ymd_opt(1987, 6, 1)
            .unwrap()
            .and_hms_opt(3, 30, 0)
            .unwrap();
        assert_eq!(
            CalendarSlot::from_datetime(&a).unwrap(),
            CalendarSlot::from_datetime(&b).unwrap()
        );
    }

    #[test]
    fn test_label_zero_padding() {
        assert_eq!(CalendarSlot::new(6, 1).unwrap().label(), "06/01");
        assert_eq!(CalendarSlot::new(11, 25).unwrap().label(), "11/25");
        assert_eq!(CalendarSlot::new(6, 1).unwrap().to_string(), "06/01");
    }

    #[test]
    fn test_year_slots_count_and_order() {
        let slots = CalendarSlot::year_slots();
        assert_eq!(slots.len(), YEAR_SLOTS);

        // Strictly ascending, no duplicates
        for pair in slots.windows(2) {
            assert!(pair[0] < pair[1]);
        }

        assert_eq!(slots.first().unwrap().label(), "01/01");
        assert_eq!(slots.last().unwrap().label(), "12/31");
        // The synthetic Feb 29 slot is present
        assert!(slots.contains(&CalendarSlot::new(2, 29).unwrap()));
    }

    #[test]
    fn test_ordering_by_month_then_day() {
        let jan31 = CalendarSlot::new(1, 31).unwrap();
        let feb01 = CalendarSlot::new(2, 1).unwrap();
        let feb02 = CalendarSlot::new(2, 2).unwrap();
        assert!(jan31 < feb01);
        assert!(feb01 < feb02);
    }
}
