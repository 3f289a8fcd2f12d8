#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rtimesheet::api::TimesheetApi;
use rtimesheet::errors::{AppError, AppResult};
use rtimesheet::models::action::{Action, ActionKind};
use rtimesheet::models::record::TimeSlotRecord;
use rtimesheet::models::slot::SlotField;
use chrono::NaiveDate;
use std::cell::RefCell;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

pub fn rts() -> Command {
    cargo_bin_cmd!("rtimesheet")
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("test date")
}

pub fn check_in(time: &str) -> Action {
    Action::new(ActionKind::In, time)
}

pub fn check_out(time: &str) -> Action {
    Action::new(ActionKind::Out, time)
}

/// Build a record from `(in, out)` pairs in slot order; `""` leaves a field empty.
pub fn record(date: &str, pairs: &[(&str, &str)]) -> TimeSlotRecord {
    let mut r = TimeSlotRecord::empty(date);
    for (i, (time_in, time_out)) in pairs.iter().enumerate() {
        let index = i + 1;
        r.set(
            SlotField::new(index, ActionKind::In).expect("slot"),
            Some(time_in.to_string()),
        );
        r.set(
            SlotField::new(index, ActionKind::Out).expect("slot"),
            Some(time_out.to_string()),
        );
    }
    r
}

/// Every one of the 15 pairs populated.
pub fn full_record(date: &str) -> TimeSlotRecord {
    let pairs: Vec<(&str, &str)> = (0..15).map(|_| ("08:00:00", "08:30:00")).collect();
    record(date, &pairs)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recorded {
    Create { date: NaiveDate, time: String },
    Update { date: NaiveDate, field: String, time: String },
}

/// In-memory stand-in for the remote service.
#[derive(Default)]
pub struct FakeApi {
    pub records: Vec<TimeSlotRecord>,
    pub fail_fetch: bool,
    pub writes: RefCell<Vec<Recorded>>,
    pub fetches: RefCell<Vec<(NaiveDate, NaiveDate)>>,
}

impl FakeApi {
    pub fn with_records(records: Vec<TimeSlotRecord>) -> Self {
        Self {
            records,
            ..Default::default()
        }
    }
}

impl TimesheetApi for FakeApi {
    fn fetch_records(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<TimeSlotRecord>> {
        self.fetches.borrow_mut().push((start, end));
        if self.fail_fetch {
            return Err(AppError::Http("connection refused".into()));
        }
        Ok(self.records.clone())
    }

    fn create_day_record(&self, date: NaiveDate, first_in: &str) -> AppResult<()> {
        self.writes.borrow_mut().push(Recorded::Create {
            date,
            time: first_in.to_string(),
        });
        Ok(())
    }

    fn update_day_record(&self, date: NaiveDate, field: SlotField, time: &str) -> AppResult<()> {
        self.writes.borrow_mut().push(Recorded::Update {
            date,
            field: field.field_name(),
            time: time.to_string(),
        });
        Ok(())
    }
}

/// Serve one canned HTTP response per entry of `responses`, in order, on a
/// local port. The join handle yields the request bodies that were received.
pub fn serve(responses: Vec<(u16, String)>) -> (String, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test server");
    let addr = listener.local_addr().expect("local addr");

    let handle = thread::spawn(move || {
        let mut bodies = Vec::new();
        for (status, body) in responses {
            let (mut stream, _) = listener.accept().expect("accept");
            bodies.push(read_body(&mut stream));

            let reason = if status == 200 { "OK" } else { "Error" };
            let response = format!(
                "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).expect("write response");
            stream.flush().ok();
        }
        bodies
    });

    (format!("http://{addr}/Timesheet"), handle)
}

fn read_body(stream: &mut std::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        let n = stream.read(&mut chunk).expect("read request");
        if n == 0 {
            return String::new();
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = find(&buf, b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let headers = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let content_length = headers
        .lines()
        .find_map(|l| {
            let (name, value) = l.split_once(':')?;
            name.trim()
                .eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())
                .flatten()
        })
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).expect("read body");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    String::from_utf8_lossy(&buf[header_end..]).to_string()
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

pub fn ok_json(body: &str) -> (u16, String) {
    (200, body.to_string())
}
