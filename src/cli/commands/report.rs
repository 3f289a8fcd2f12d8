use super::{check_range, connect, parse_date_arg};
use crate::Context;
use crate::api::TimesheetApi;
use crate::cli::parser::Commands;
use crate::core::report::{ReportStyle, build_report, render_json, render_text};
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date;
use std::fs;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Report { start, end, output } = cmd {
        let today = date::today();
        let start = parse_date_arg(start)?.unwrap_or_else(|| date::first_of_month(today));
        let end = parse_date_arg(end)?.unwrap_or(today);
        check_range(start, end)?;

        let client = connect(ctx)?;
        let records = client.fetch_records(start, end)?;
        let entries = build_report(start, end, &records);

        match output {
            Some(path) => {
                let json = render_json(start, end, &entries)?;
                if let Some(dir) = path.parent()
                    && !dir.as_os_str().is_empty()
                {
                    fs::create_dir_all(dir)?;
                }
                fs::write(path, json)?;
                success(format!("Report written to {}", path.display()));
            }
            None => {
                let style = if ctx.color {
                    ReportStyle::colored()
                } else {
                    ReportStyle::plain()
                };
                println!();
                print!("{}", render_text(start, end, &entries, &style));
            }
        }
    }
    Ok(())
}
