use chrono::{Duration, NaiveDate};

/// Worked time for a single day, as classified by the aggregator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub worked: Duration,
    pub is_complete: bool,
    pub is_invalid_sequence: bool,
}

impl DailyTotal {
    pub fn hours(&self) -> f64 {
        self.worked.num_seconds() as f64 / 3600.0
    }

    /// Hours rounded to one decimal place.
    pub fn hours_rounded(&self) -> f64 {
        round_hours(self.hours())
    }
}

/// Round to one decimal place. A result of `-0.0` is returned as `0.0`.
pub fn round_hours(hours: f64) -> f64 {
    let rounded = (hours * 10.0).round() / 10.0;
    if rounded == 0.0 { 0.0 } else { rounded }
}
