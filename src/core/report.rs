//! Per-day report over a date range, as colored text or JSON.

use crate::core::aggregator::compute_daily_total;
use crate::errors::AppResult;
use crate::models::daily_total::{DailyTotal, round_hours};
use crate::models::record::TimeSlotRecord;
use crate::utils::date::{days_between, format_date, is_weekend};
use ansi_term::{Colour, Style};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

const RULE: &str = "-----------------------------------------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    NoData,
    InvalidSequence,
    Incomplete,
    Complete,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayEntry {
    pub date: NaiveDate,
    pub total: Option<DailyTotal>,
}

impl DayEntry {
    pub fn status(&self) -> DayStatus {
        match &self.total {
            None => DayStatus::NoData,
            Some(t) if t.is_invalid_sequence => DayStatus::InvalidSequence,
            Some(t) if !t.is_complete => DayStatus::Incomplete,
            Some(_) => DayStatus::Complete,
        }
    }

    /// Hours that count towards the range total.
    fn counted_hours(&self) -> f64 {
        match (self.status(), &self.total) {
            (DayStatus::Complete | DayStatus::Incomplete, Some(t)) => t.hours(),
            _ => 0.0,
        }
    }
}

/// Aggregate `records` and lay them out over every day of `start..=end`.
///
/// Records that cannot be parsed are skipped, leaving their day without
/// data. When several records share a date the last one wins.
pub fn build_report(
    start: NaiveDate,
    end: NaiveDate,
    records: &[TimeSlotRecord],
) -> Vec<DayEntry> {
    let mut per_date: BTreeMap<NaiveDate, DailyTotal> = BTreeMap::new();

    for record in records {
        match compute_daily_total(record) {
            Ok(total) => {
                per_date.insert(total.date, total);
            }
            Err(e) => {
                tracing::warn!(date = %record.date, error = %e, "skipping unparseable record");
            }
        }
    }

    days_between(start, end)
        .into_iter()
        .map(|date| DayEntry {
            date,
            total: per_date.remove(&date),
        })
        .collect()
}

pub fn total_hours(entries: &[DayEntry]) -> f64 {
    entries.iter().map(DayEntry::counted_hours).sum()
}

/// Terminal styling. `plain()` renders without escape codes.
#[derive(Debug, Clone, Copy)]
pub struct ReportStyle {
    pub color: bool,
}

impl ReportStyle {
    pub fn colored() -> Self {
        Self { color: true }
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    fn paint(&self, style: Style, s: &str) -> String {
        if self.color {
            style.paint(s).to_string()
        } else {
            s.to_string()
        }
    }

    fn dim(&self, s: &str) -> String {
        self.paint(Style::new().dimmed(), s)
    }

    fn bold(&self, s: &str) -> String {
        self.paint(Style::new().bold(), s)
    }

    fn colour(&self, c: Colour, s: &str) -> String {
        self.paint(c.normal(), s)
    }
}

pub fn render_text(
    start: NaiveDate,
    end: NaiveDate,
    entries: &[DayEntry],
    style: &ReportStyle,
) -> String {
    let mut out = String::new();

    out.push_str(&style.dim(RULE));
    out.push('\n');
    out.push_str(&style.colour(Colour::Cyan, "# Daily report"));
    out.push('\n');
    out.push_str(&format!(
        "{}{}\n{}{}\n\n",
        style.dim("From : "),
        start.format("%d-%b-%Y"),
        style.dim("To   : "),
        end.format("%d-%b-%Y"),
    ));

    for entry in entries {
        let weekday = entry.date.format("%a").to_string();
        let weekday = if is_weekend(entry.date) {
            style.colour(Colour::Red, &weekday)
        } else {
            weekday
        };

        out.push_str(&format!("{} {}: ", entry.date.format("%d-%b"), weekday));

        match (entry.status(), &entry.total) {
            (DayStatus::InvalidSequence, _) => {
                out.push_str(&style.colour(Colour::Red, "Invalid sequence"));
            }
            (DayStatus::Incomplete, Some(t)) => {
                out.push_str(&style.bold(&format!("{:.1}h", t.hours_rounded())));
                out.push(' ');
                out.push_str(&style.colour(Colour::Yellow, "(incomplete)"));
            }
            (DayStatus::Complete, Some(t)) => {
                out.push_str(&style.bold(&format!("{:.1}h", t.hours_rounded())));
            }
            _ => out.push_str(&style.dim("-")),
        }
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&format!(
        "{}{}\n",
        style.dim("Total: "),
        style.bold(&format!("{:.1}h", round_hours(total_hours(entries))))
    ));
    out.push_str(&style.dim(RULE));
    out.push('\n');

    out
}

#[derive(Debug, Serialize)]
struct JsonReport {
    start: String,
    end: String,
    total_hours: f64,
    days: Vec<JsonDay>,
}

#[derive(Debug, Serialize)]
struct JsonDay {
    date: String,
    hours: Option<f64>,
    is_complete: bool,
    is_invalid_sequence: bool,
    has_data: bool,
}

impl From<&DayEntry> for JsonDay {
    fn from(entry: &DayEntry) -> Self {
        Self {
            date: format_date(entry.date),
            hours: entry.total.as_ref().map(DailyTotal::hours_rounded),
            is_complete: entry.total.as_ref().is_some_and(|t| t.is_complete),
            is_invalid_sequence: entry.total.as_ref().is_some_and(|t| t.is_invalid_sequence),
            has_data: entry.total.is_some(),
        }
    }
}

pub fn render_json(start: NaiveDate, end: NaiveDate, entries: &[DayEntry]) -> AppResult<String> {
    let report = JsonReport {
        start: format_date(start),
        end: format_date(end),
        total_hours: round_hours(total_hours(entries)),
        days: entries.iter().map(JsonDay::from).collect(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
