pub mod init;
pub mod key;
pub mod list;
pub mod punch;
pub mod report;
pub mod version;

use crate::Context;
use crate::api::PeopleHrClient;
use crate::errors::{AppError, AppResult};
use crate::models::credentials::Credentials;
use crate::store::CredentialStore;
use crate::ui::prompt::ask_password;
use crate::utils::date::parse_date;
use chrono::NaiveDate;

/// Prompt for the password and decrypt the stored credentials.
pub(crate) fn unlock(ctx: &Context) -> AppResult<Credentials> {
    let store = CredentialStore::new(ctx.cfg.credentials_location());
    if !store.exists() {
        return Err(AppError::Credentials(format!(
            "no credentials at {} (run `rtimesheet init` first)",
            store.path().display()
        )));
    }

    let password = ask_password("Please enter the password:")?;
    let credentials = store.load(&password)?;
    tracing::info!(employee = %credentials.employee_id, "credentials loaded");
    Ok(credentials)
}

/// Client bound to the credentials unlocked for this invocation.
pub(crate) fn connect(ctx: &Context) -> AppResult<PeopleHrClient> {
    let credentials = unlock(ctx)?;
    Ok(PeopleHrClient::new(ctx.cfg.api_url.clone(), credentials))
}

pub(crate) fn parse_date_arg(s: &Option<String>) -> AppResult<Option<NaiveDate>> {
    match s {
        Some(raw) => parse_date(raw)
            .map(Some)
            .ok_or_else(|| AppError::InvalidDate(raw.clone())),
        None => Ok(None),
    }
}

pub(crate) fn check_range(start: NaiveDate, end: NaiveDate) -> AppResult<()> {
    if start > end {
        return Err(AppError::InvalidDate(format!(
            "start {start} is after end {end}"
        )));
    }
    Ok(())
}
