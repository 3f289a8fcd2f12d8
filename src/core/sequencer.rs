//! Slot sequencer: flattens a day record into ordered actions and decides
//! which punch is currently legal.
//!
//! Legality only looks at the tail of the sequence. Full validation of the
//! alternation is a reporting concern handled by the aggregator.

use crate::models::action::Action;
use crate::models::record::TimeSlotRecord;
use crate::models::slot::SlotField;

/// Populated fields in positional order (in1, out1, in2, out2, ...).
///
/// Ordering follows slot position, not time of day.
pub fn to_actions(record: &TimeSlotRecord) -> Vec<Action> {
    SlotField::all()
        .filter_map(|field| {
            record
                .get(field)
                .map(|time| Action::new(field.kind(), time))
        })
        .collect()
}

/// First empty field in slot order, or `None` once all 30 are filled.
pub fn next_open_slot(record: &TimeSlotRecord) -> Option<SlotField> {
    SlotField::all().find(|field| record.get(*field).is_none())
}

pub fn can_check_in(actions: &[Action]) -> bool {
    actions.last().is_none_or(|last| last.kind.is_out())
}

pub fn can_check_out(actions: &[Action]) -> bool {
    actions.last().is_some_and(|last| last.kind.is_in())
}
