use crate::Context;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::credentials::Credentials;
use crate::store::CredentialStore;
use crate::ui::messages::{info, success};
use crate::ui::prompt::{ask_password, ask_string};

/// Handle the `init` command
///
/// This creates:
///  - the encrypted credential file (always overwritten)
///  - the configuration file with defaults (if missing)
///
/// Nothing is written until every prompt has been answered.
pub fn handle(ctx: &Context) -> AppResult<()> {
    let api_key = ask_string("Please enter your API key:")?;
    let employee_id = ask_string("Please enter your employee ID:")?;
    let password =
        ask_password("Please enter a password to encrypt your API key and employee ID:")?;
    if password.is_empty() {
        return Err(AppError::Prompt("password must not be empty".into()));
    }

    let store = CredentialStore::new(ctx.cfg.credentials_location());
    store.save(&Credentials::new(api_key, employee_id), &password)?;

    // read back to prove the password round-trips
    let loaded = store.load(&password)?;

    let config_path = ctx.config_path.clone().unwrap_or_else(Config::config_file);
    if !config_path.exists() {
        let written = ctx.cfg.save(Some(&config_path))?;
        info(format!("Config file : {}", written.display()));
    }

    println!("Your API key is: {}", loaded.masked_api_key());
    println!("Your employee ID is: {}", loaded.employee_id);
    success(format!(
        "Credentials stored in {}",
        store.path().display()
    ));
    Ok(())
}
