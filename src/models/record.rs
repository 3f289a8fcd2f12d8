use super::action::{Action, ActionKind};
use super::slot::{SLOT_COUNT, SlotField};

/// One in/out pair. Blank strings are stored as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotPair {
    pub time_in: Option<String>,
    pub time_out: Option<String>,
}

impl SlotPair {
    pub fn get(&self, kind: ActionKind) -> Option<&str> {
        match kind {
            ActionKind::In => self.time_in.as_deref(),
            ActionKind::Out => self.time_out.as_deref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.time_in.is_none() && self.time_out.is_none()
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// A day of raw attendance as returned by the remote service.
///
/// `date` is kept as the raw `YYYY-MM-DD` string; it is only parsed when
/// hours are computed, so a malformed date surfaces as a parse error there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlotRecord {
    pub date: String,
    pub slots: [SlotPair; SLOT_COUNT],
}

impl TimeSlotRecord {
    pub fn empty(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            slots: Default::default(),
        }
    }

    /// Build a record by filling fields in slot order from `actions`.
    ///
    /// Each action takes the next field whose side matches its kind, so an
    /// `In, In` list lands in `TimeIn1` and `TimeIn2`. Returns `None` when
    /// the actions do not fit in 15 pairs.
    pub fn from_actions(date: impl Into<String>, actions: &[Action]) -> Option<Self> {
        let mut record = Self::empty(date);
        let mut fields = SlotField::all();

        for action in actions {
            let field = fields.find(|f| f.kind() == action.kind)?;
            record.set(field, Some(action.time.clone()));
        }

        Some(record)
    }

    pub fn get(&self, field: SlotField) -> Option<&str> {
        self.slots[field.index() - 1].get(field.kind())
    }

    pub fn set(&mut self, field: SlotField, value: Option<String>) {
        let value = normalize(value);
        let pair = &mut self.slots[field.index() - 1];
        match field.kind() {
            ActionKind::In => pair.time_in = value,
            ActionKind::Out => pair.time_out = value,
        }
    }

    /// True when every one of the 30 fields is populated.
    pub fn is_full(&self) -> bool {
        self.slots
            .iter()
            .all(|p| p.time_in.is_some() && p.time_out.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(SlotPair::is_empty)
    }
}
