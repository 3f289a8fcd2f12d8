//! System clock sanity check against an SNTP server.
//!
//! Punches are stamped with the local clock, so skew beyond the configured
//! tolerance is reported before writing.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Duration, Utc};
use std::net::{SocketAddr, ToSocketAddrs, UdpSocket};

/// Seconds between 1900-01-01 (NTP era 0) and 1970-01-01.
const NTP_UNIX_OFFSET: i64 = 2_208_988_800;
const PACKET_LEN: usize = 48;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClockStatus {
    InSync(Duration),
    Skewed(Duration),
    Unknown(String),
}

/// Client request: LI = 0, VN = 3, Mode = 3 (client).
pub fn request_packet() -> [u8; PACKET_LEN] {
    let mut packet = [0u8; PACKET_LEN];
    packet[0] = 0x1B;
    packet
}

/// Decode the server transmit timestamp of an SNTP reply.
pub fn transmit_time(packet: &[u8]) -> Option<DateTime<Utc>> {
    if packet.len() < PACKET_LEN {
        return None;
    }
    let secs = u32::from_be_bytes(packet[40..44].try_into().ok()?) as i64;
    let frac = u32::from_be_bytes(packet[44..48].try_into().ok()?) as u64;
    if secs == 0 {
        return None;
    }
    let nanos = ((frac * 1_000_000_000) >> 32) as u32;
    DateTime::from_timestamp(secs - NTP_UNIX_OFFSET, nanos)
}

/// Local clock minus server clock, using the midpoint of the round trip.
pub fn offset(sent: DateTime<Utc>, received: DateTime<Utc>, server: DateTime<Utc>) -> Duration {
    let midpoint = sent + (received - sent) / 2;
    midpoint - server
}

pub fn classify(offset: Duration, tolerance: Duration) -> ClockStatus {
    if offset.abs() > tolerance {
        ClockStatus::Skewed(offset)
    } else {
        ClockStatus::InSync(offset)
    }
}

fn query(server: &str, timeout: std::time::Duration) -> AppResult<Duration> {
    let addr: SocketAddr = server
        .to_socket_addrs()?
        .next()
        .ok_or_else(|| AppError::Config(format!("cannot resolve NTP server {server}")))?;

    let bind = if addr.is_ipv4() { "0.0.0.0:0" } else { "[::]:0" };
    let socket = UdpSocket::bind(bind)?;
    socket.set_read_timeout(Some(timeout))?;

    let sent = Utc::now();
    socket.send_to(&request_packet(), addr)?;

    let mut buf = [0u8; PACKET_LEN];
    let (len, _) = socket.recv_from(&mut buf)?;
    let received = Utc::now();

    let server_time = transmit_time(&buf[..len])
        .ok_or_else(|| AppError::Parse("invalid NTP reply".into()))?;

    tracing::debug!(%server_time, "NTP time");
    Ok(offset(sent, received, server_time))
}

pub fn check(server: &str, tolerance: Duration) -> ClockStatus {
    match query(server, std::time::Duration::from_secs(3)) {
        Ok(off) => classify(off, tolerance),
        Err(e) => ClockStatus::Unknown(e.to_string()),
    }
}
