use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum ActionKind {
    In,
    Out,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::In => "In",
            ActionKind::Out => "Out",
        }
    }

    /// Prefix used by the remote service for slot field names.
    pub fn field_prefix(&self) -> &'static str {
        match self {
            ActionKind::In => "TimeIn",
            ActionKind::Out => "TimeOut",
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            ActionKind::In => ActionKind::Out,
            ActionKind::Out => ActionKind::In,
        }
    }

    pub fn is_in(&self) -> bool {
        matches!(self, ActionKind::In)
    }

    pub fn is_out(&self) -> bool {
        matches!(self, ActionKind::Out)
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One populated slot field, flattened out of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Action {
    pub kind: ActionKind,
    pub time: String,
}

impl Action {
    pub fn new(kind: ActionKind, time: impl Into<String>) -> Self {
        Self {
            kind,
            time: time.into(),
        }
    }
}
