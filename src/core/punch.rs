//! Check-in / check-out workflow against the remote timesheet.

use crate::api::TimesheetApi;
use crate::core::sequencer::{can_check_in, can_check_out, next_open_slot, to_actions};
use crate::errors::{AppError, AppResult, Rejection};
use crate::models::action::ActionKind;
use crate::models::record::TimeSlotRecord;
use crate::models::slot::SlotField;
use crate::utils::date::format_date;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PunchOutcome {
    pub kind: ActionKind,
    pub slot: SlotField,
    pub time: String,
    /// True when the day record did not exist and was created by this punch.
    pub created_day: bool,
}

/// Decide which field a punch of `kind` writes to, without touching the
/// network. A full sheet is reported before the tail gate.
pub fn plan_punch(record: &TimeSlotRecord, kind: ActionKind) -> Result<SlotField, Rejection> {
    if record.is_full() {
        return Err(Rejection::TimesheetFull);
    }
    let slot = next_open_slot(record).ok_or(Rejection::TimesheetFull)?;
    let actions = to_actions(record);

    match kind {
        ActionKind::In if !can_check_in(&actions) => Err(Rejection::CannotCheckIn),
        ActionKind::Out if !can_check_out(&actions) => Err(Rejection::CannotCheckOut),
        _ => Ok(slot),
    }
}

/// Fetch today's record, validate the punch and write it back.
///
/// `time` must already be a validated `HH:MM` string.
pub fn punch<A: TimesheetApi + ?Sized>(
    api: &A,
    kind: ActionKind,
    today: NaiveDate,
    time: &str,
) -> AppResult<PunchOutcome> {
    let today_str = format_date(today);
    let mut records = api.fetch_records(today, today)?;

    // The query only covers today; prefer an exact date match if the service
    // echoes more than one record.
    let record = if records.is_empty() {
        TimeSlotRecord::empty(today_str.clone())
    } else {
        let pos = records
            .iter()
            .rposition(|r| r.date.trim() == today_str)
            .unwrap_or(0);
        records.swap_remove(pos)
    };

    let slot = plan_punch(&record, kind).map_err(AppError::Rejected)?;
    tracing::info!(date = %today_str, %slot, %kind, time, "punching");

    let created_day = slot.is_first();
    if created_day {
        api.create_day_record(today, time)?;
    } else {
        api.update_day_record(today, slot, time)?;
    }

    Ok(PunchOutcome {
        kind,
        slot,
        time: time.to_string(),
        created_day,
    })
}
