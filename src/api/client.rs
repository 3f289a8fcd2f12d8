use super::TimesheetApi;
use super::wire::{
    ACTION_CREATE, ACTION_GET_DETAIL, ACTION_UPDATE, DetailResponse, EditResponse,
    TimesheetRequest,
};
use crate::errors::{AppError, AppResult};
use crate::models::credentials::Credentials;
use crate::models::record::TimeSlotRecord;
use crate::models::slot::SlotField;
use crate::utils::date::format_date;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;

pub const DEFAULT_API_URL: &str = "https://api.peoplehr.net/Timesheet";

/// Blocking JSON client for the PeopleHR timesheet endpoint.
pub struct PeopleHrClient {
    agent: ureq::Agent,
    url: String,
    credentials: Credentials,
}

impl PeopleHrClient {
    pub fn new(url: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            agent: ureq::Agent::new(),
            url: url.into(),
            credentials,
        }
    }

    fn request<'a>(&'a self, action: &'a str) -> TimesheetRequest<'a> {
        TimesheetRequest::new(
            &self.credentials.api_key,
            &self.credentials.employee_id,
            action,
        )
    }

    fn post<T: DeserializeOwned>(&self, body: &TimesheetRequest<'_>) -> AppResult<T> {
        tracing::debug!(url = %self.url, action = body.action, "timesheet request");

        let response = self
            .agent
            .post(&self.url)
            .set("Content-Type", "application/json")
            .send_json(body)?;

        let status = response.status();
        let decoded = response
            .into_json::<T>()
            .map_err(|e| AppError::Http(format!("malformed response (HTTP {status}): {e}")))?;

        tracing::debug!(status, action = body.action, "timesheet response");
        Ok(decoded)
    }
}

impl TimesheetApi for PeopleHrClient {
    fn fetch_records(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<TimeSlotRecord>> {
        let body = self
            .request(ACTION_GET_DETAIL)
            .with("StartDate", format_date(start))
            .with("EndDate", format_date(end));

        self.post::<DetailResponse>(&body)?.into_records()
    }

    fn create_day_record(&self, date: NaiveDate, first_in: &str) -> AppResult<()> {
        let body = self
            .request(ACTION_CREATE)
            .with("TimesheetDate", format_date(date))
            .with(SlotField::first_in().field_name(), first_in);

        self.post::<EditResponse>(&body)?.into_result()
    }

    fn update_day_record(&self, date: NaiveDate, field: SlotField, time: &str) -> AppResult<()> {
        let body = self
            .request(ACTION_UPDATE)
            .with("TimesheetDate", format_date(date))
            .with(field.field_name(), time);

        self.post::<EditResponse>(&body)?.into_result()
    }
}
