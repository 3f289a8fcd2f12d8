use super::{check_range, connect, parse_date_arg};
use crate::Context;
use crate::api::TimesheetApi;
use crate::cli::parser::Commands;
use crate::core::sequencer::to_actions;
use crate::errors::AppResult;
use crate::models::record::TimeSlotRecord;
use crate::ui::messages::warning;
use crate::utils::date;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Ls { start, end } = cmd {
        let start = parse_date_arg(start)?.unwrap_or_else(date::today);
        let end = parse_date_arg(end)?.unwrap_or(start);
        check_range(start, end)?;

        let client = connect(ctx)?;
        let records = client.fetch_records(start, end)?;

        if records.iter().all(TimeSlotRecord::is_empty) {
            warning("No check-ins found.");
            return Ok(());
        }

        print!("{}", render_records(&records));
    }
    Ok(())
}

/// Plain listing: the date, then one `- In/Out: time` line per action.
pub fn render_records(records: &[TimeSlotRecord]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&format!("{}\n", record.date));
        for action in to_actions(record) {
            out.push_str(&format!(" - {}:\t{}\n", action.kind, action.time));
        }
    }
    out
}
