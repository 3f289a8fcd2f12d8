use super::connect;
use crate::Context;
use crate::clock::{self, ClockStatus};
use crate::core::punch::punch;
use crate::errors::AppResult;
use crate::models::action::ActionKind;
use crate::ui::messages::{banner, success, warning};
use crate::ui::phrases::{Phrasebook, RandomPhrases};
use crate::ui::prompt::wait_for_enter;
use crate::utils::date;
use crate::utils::time::{format_hhmm, parse_hhmm};
use chrono::Duration;

pub fn handle(kind: ActionKind, time: Option<&str>, ctx: &Context) -> AppResult<()> {
    // An explicit time is validated before any prompt or network call.
    let explicit = time.map(parse_hhmm).transpose()?;

    if ctx.clock_check {
        warn_about_clock(ctx)?;
    }

    let time = explicit.unwrap_or_else(|| format_hhmm(chrono::Local::now().time()));
    let client = connect(ctx)?;
    let outcome = punch(&client, kind, date::today(), &time)?;

    let verb = match kind {
        ActionKind::In => "Checked in",
        ActionKind::Out => "Checked out",
    };
    success(format!("{verb} at {} ({})", outcome.time, outcome.slot));

    let phrase = RandomPhrases::from_clock(ctx.cfg.snark_probability).phrase(kind);
    println!("{phrase}");
    Ok(())
}

fn warn_about_clock(ctx: &Context) -> AppResult<()> {
    let tolerance = Duration::minutes(ctx.cfg.clock_tolerance_minutes);

    match clock::check(&ctx.cfg.ntp_server, tolerance) {
        ClockStatus::InSync(offset) => {
            tracing::debug!(offset_ms = offset.num_milliseconds(), "clock in sync");
            return Ok(());
        }
        ClockStatus::Skewed(offset) => {
            banner("WARNING: System clock is misconfigured");
            println!(
                "Your system clock is {}s away from the expected time.",
                offset.num_seconds()
            );
        }
        ClockStatus::Unknown(err) => {
            warning("Could not get the NTP time difference; the system clock is unchecked.");
            warning(format!("NTP error: {err}"));
        }
    }

    wait_for_enter("Press Enter to continue, or Ctrl-C to exit ")
}
