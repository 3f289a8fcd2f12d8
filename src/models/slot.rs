//! Positional addressing of the 30 in/out fields of a day record.

use super::action::ActionKind;
use std::fmt;

/// Number of in/out pairs a day record can hold.
pub const SLOT_COUNT: usize = 15;

/// A single field of a day record: slot `index` (1-based) and its side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotField {
    index: usize,
    kind: ActionKind,
}

impl SlotField {
    /// Returns `None` when `index` is outside `1..=15`.
    pub fn new(index: usize, kind: ActionKind) -> Option<Self> {
        (1..=SLOT_COUNT)
            .contains(&index)
            .then_some(Self { index, kind })
    }

    pub fn first_in() -> Self {
        Self {
            index: 1,
            kind: ActionKind::In,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    /// `TimeIn1` is the field that opens a new day on the remote side.
    pub fn is_first(&self) -> bool {
        self.index == 1 && self.kind.is_in()
    }

    /// Wire name, e.g. `TimeIn3` or `TimeOut15`.
    pub fn field_name(&self) -> String {
        format!("{}{}", self.kind.field_prefix(), self.index)
    }

    /// Parse a wire name back into a field.
    pub fn from_field_name(name: &str) -> Option<Self> {
        let (kind, digits) = if let Some(rest) = name.strip_prefix("TimeOut") {
            (ActionKind::Out, rest)
        } else if let Some(rest) = name.strip_prefix("TimeIn") {
            (ActionKind::In, rest)
        } else {
            return None;
        };
        let index = digits.parse::<usize>().ok()?;
        Self::new(index, kind)
    }

    /// All 30 fields in fixed order: in1, out1, in2, out2, ...
    pub fn all() -> impl Iterator<Item = SlotField> {
        (1..=SLOT_COUNT).flat_map(|index| {
            [ActionKind::In, ActionKind::Out]
                .into_iter()
                .map(move |kind| SlotField { index, kind })
        })
    }
}

impl fmt::Display for SlotField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.field_name())
    }
}
