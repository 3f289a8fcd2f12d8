//! rtimesheet main entrypoint.

use rtimesheet::errors::AppError;
use rtimesheet::run;
use rtimesheet::ui::messages::{error, warning};

fn main() {
    match run() {
        Ok(()) => {}
        Err(AppError::Rejected(reason)) => {
            warning(format!("Sorry, {reason}."));
            std::process::exit(2);
        }
        Err(e) => {
            error(format!("Error: {e}"));
            std::process::exit(1);
        }
    }
}
