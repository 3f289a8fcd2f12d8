use crate::errors::{AppError, AppResult};
use std::io::{self, BufRead, Write};

/// Environment variable that supplies the store passphrase without a prompt.
pub const PASSWORD_ENV: &str = "RTIMESHEET_PASSWORD";

pub fn ask_string(prompt: &str) -> AppResult<String> {
    print!("{prompt} ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let value = line.trim().to_string();

    if value.is_empty() {
        return Err(AppError::Prompt(format!("no value entered for: {prompt}")));
    }
    Ok(value)
}

/// Read a password without echo, unless `RTIMESHEET_PASSWORD` is set.
pub fn ask_password(prompt: &str) -> AppResult<String> {
    if let Ok(pw) = std::env::var(PASSWORD_ENV) {
        return Ok(pw);
    }
    rpassword::prompt_password(format!("{prompt} "))
        .map_err(|e| AppError::Prompt(e.to_string()))
}

pub fn wait_for_enter(prompt: &str) -> AppResult<()> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(())
}
