use crate::error::CliError;
use anyhow::Result;
use chrono::{DateTime, Local, Utc};
use nameplate_core::PersonId;
use std::str::FromStr;

pub fn now_utc() -> i64 {
    Utc::now().timestamp()
}

pub fn format_timestamp_datetime(ts: i64) -> String {
    match DateTime::<Utc>::from_timestamp(ts, 0) {
        Some(dt) => dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
        None => ts.to_string(),
    }
}

pub fn parse_person_id(raw: &str) -> Result<PersonId> {
    PersonId::from_str(raw).map_err(|_| CliError::InvalidPersonId(raw.to_string()).into())
}
