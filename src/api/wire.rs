//! JSON shapes exchanged with the PeopleHR `Timesheet` endpoint.

use crate::errors::{AppError, AppResult};
use crate::models::record::TimeSlotRecord;
use crate::models::slot::SlotField;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const ACTION_GET_DETAIL: &str = "GetTimesheetDetail";
pub const ACTION_CREATE: &str = "CreateNewTimesheet";
pub const ACTION_UPDATE: &str = "UpdateTimesheet";

const DATE_FIELD: &str = "TimesheetDate";

/// Request body. Slot fields are added dynamically through `extra`.
#[derive(Debug, Serialize)]
pub struct TimesheetRequest<'a> {
    #[serde(rename = "APIKey")]
    pub api_key: &'a str,
    #[serde(rename = "EmployeeId")]
    pub employee_id: &'a str,
    #[serde(rename = "Action")]
    pub action: &'a str,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<'a> TimesheetRequest<'a> {
    pub fn new(api_key: &'a str, employee_id: &'a str, action: &'a str) -> Self {
        Self {
            api_key,
            employee_id,
            action,
            extra: Map::new(),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), Value::String(value.into()));
        self
    }
}

/// Response to `GetTimesheetDetail`.
#[derive(Debug, Deserialize)]
pub struct DetailResponse {
    #[serde(rename = "isError", default)]
    pub is_error: bool,
    #[serde(rename = "Message", default)]
    pub message: Option<String>,
    #[serde(rename = "Result", default, deserialize_with = "empty_string_as_empty_list")]
    pub result: Vec<Map<String, Value>>,
}

/// Response to create/update calls.
#[derive(Debug, Deserialize)]
pub struct EditResponse {
    #[serde(rename = "isError", default)]
    pub is_error: bool,
    #[serde(rename = "Status", default)]
    pub status: Option<i64>,
    #[serde(rename = "Message", default)]
    pub message: Option<String>,
}

/// The service sends `"Result": ""` instead of `[]` when a range is empty.
fn empty_string_as_empty_list<'de, D>(deserializer: D) -> Result<Vec<Map<String, Value>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(Vec::new()),
        Value::String(s) if s.trim().is_empty() => Ok(Vec::new()),
        v @ Value::Array(_) => serde_json::from_value(v).map_err(de::Error::custom),
        other => Err(de::Error::custom(format!(
            "expected a list of records, got {other}"
        ))),
    }
}

/// Treat `isError: true` as a failure even when the transport succeeded.
pub fn check_error(is_error: bool, message: Option<&str>) -> AppResult<()> {
    if is_error {
        let msg = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or("request rejected");
        return Err(AppError::Remote(msg.to_string()));
    }
    Ok(())
}

/// Build a record from one entry of `Result`. Null, blank and non-string
/// slot values count as empty.
///
/// A missing or non-string `TimesheetDate` becomes an empty date, so the day
/// is rejected when hours are computed instead of failing the whole fetch.
pub fn record_from_wire(raw: &Map<String, Value>) -> TimeSlotRecord {
    let date = raw.get(DATE_FIELD).and_then(Value::as_str).unwrap_or_default();
    if date.is_empty() {
        tracing::warn!("timesheet record without {DATE_FIELD}");
    }

    let mut record = TimeSlotRecord::empty(date);
    for field in SlotField::all() {
        let value = raw
            .get(&field.field_name())
            .and_then(Value::as_str)
            .map(str::to_string);
        record.set(field, value);
    }
    record
}

impl DetailResponse {
    pub fn into_records(self) -> AppResult<Vec<TimeSlotRecord>> {
        check_error(self.is_error, self.message.as_deref())?;
        Ok(self.result.iter().map(record_from_wire).collect())
    }
}

impl EditResponse {
    pub fn into_result(self) -> AppResult<()> {
        check_error(self.is_error, self.message.as_deref())
    }
}
