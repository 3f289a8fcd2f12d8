//! Daily hours aggregation over a record's action sequence.

use crate::core::sequencer::to_actions;
use crate::errors::{AppError, AppResult};
use crate::models::action::ActionKind;
use crate::models::daily_total::DailyTotal;
use crate::models::record::TimeSlotRecord;
use crate::utils::date::parse_date;
use crate::utils::time::parse_record_time;
use chrono::{Duration, NaiveTime};

/// Walk the actions of `record`, summing every In→Out interval.
///
/// A repeated kind stops the walk and marks the day as an invalid sequence,
/// keeping whatever was accumulated before the break. Only malformed dates or
/// times are errors.
pub fn compute_daily_total(record: &TimeSlotRecord) -> AppResult<DailyTotal> {
    let date = parse_date(&record.date).ok_or_else(|| AppError::InvalidDate(record.date.clone()))?;

    let mut expected = ActionKind::In;
    let mut total = Duration::zero();
    let mut complete = false;
    let mut open_since: Option<NaiveTime> = None;

    for action in to_actions(record) {
        if action.kind != expected {
            return Ok(DailyTotal {
                date,
                worked: total,
                is_complete: false,
                is_invalid_sequence: true,
            });
        }

        let time = parse_record_time(&action.time).ok_or_else(|| {
            AppError::Parse(format!("bad time '{}' on {}", action.time, record.date))
        })?;

        match expected {
            ActionKind::In => {
                open_since = Some(time);
                complete = false;
            }
            ActionKind::Out => {
                // open_since is always set here: Out is only expected after an In
                if let Some(start) = open_since.take() {
                    let elapsed = time - start;
                    if elapsed < Duration::zero() {
                        tracing::warn!(
                            date = %record.date,
                            time_in = %start,
                            time_out = %time,
                            "check-out precedes check-in; counting a negative interval"
                        );
                    }
                    total += elapsed;
                }
                complete = true;
            }
        }

        expected = expected.opposite();
    }

    Ok(DailyTotal {
        date,
        worked: total,
        is_complete: complete,
        is_invalid_sequence: false,
    })
}
