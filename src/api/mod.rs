//! Remote attendance service boundary.

mod client;
pub mod wire;

pub use client::{DEFAULT_API_URL, PeopleHrClient};

use crate::errors::AppResult;
use crate::models::record::TimeSlotRecord;
use crate::models::slot::SlotField;
use chrono::NaiveDate;

/// Operations the CLI needs from the timesheet service.
///
/// Every call is a single blocking request; failures propagate unchanged.
pub trait TimesheetApi {
    /// Day records between `start` and `end`, both inclusive.
    fn fetch_records(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<TimeSlotRecord>>;

    /// Open a new day with `first_in` stored in `TimeIn1`.
    fn create_day_record(&self, date: NaiveDate, first_in: &str) -> AppResult<()>;

    /// Set a single field of an existing day.
    fn update_day_record(&self, date: NaiveDate, field: SlotField, time: &str) -> AppResult<()>;
}
