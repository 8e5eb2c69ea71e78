//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every client (the CLI today, anything else tomorrow).
//!
//! The API facade:
//! - **Dispatches** to the matching command function
//! - **Normalizes inputs**: ids, dates and numbers arrive as strings from the
//!   outside world and are parsed here, failing with `MalformedInput`
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It never prints, formats, or decides exit codes.
//!
//! `ShipApi<S: DataStore>` is generic over the storage backend:
//! `ShipApi<FileStore>` in production, `ShipApi<InMemoryStore>` in tests.

use crate::commands;
use crate::error::{Result, ShipError};
use crate::model::ShipInput;
use crate::query::{PageRequest, ShipFilter, ShipOrder, DEFAULT_PAGE_SIZE};
use crate::store::DataStore;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use std::path::PathBuf;
use std::str::FromStr;

pub struct ShipApi<S: DataStore> {
    store: S,
    config_dir: PathBuf,
    default_page_size: usize,
}

impl<S: DataStore> ShipApi<S> {
    pub fn new(store: S, config_dir: PathBuf) -> Self {
        Self {
            store,
            config_dir,
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Page size used when a list request does not name one.
    pub fn with_default_page_size(mut self, size: usize) -> Self {
        self.default_page_size = size;
        self
    }

    pub fn create_ship(&mut self, input: ShipInput) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, input)
    }

    pub fn get_ship(&self, id: &str) -> Result<commands::CmdResult> {
        let id = parse_id(id)?;
        commands::get::run(&self.store, id)
    }

    pub fn update_ship(&mut self, id: &str, patch: ShipInput) -> Result<commands::CmdResult> {
        let id = parse_id(id)?;
        commands::update::run(&mut self.store, id, patch)
    }

    pub fn delete_ship(&mut self, id: &str) -> Result<commands::CmdResult> {
        let id = parse_id(id)?;
        commands::delete::run(&mut self.store, id)
    }

    pub fn list_ships(
        &self,
        filter: &ShipFilter,
        order: Option<ShipOrder>,
        page: PageRequest,
    ) -> Result<commands::CmdResult> {
        let page = page.with_default_size(self.default_page_size);
        commands::list::run(&self.store, filter, order, page)
    }

    pub fn count_ships(&self, filter: &ShipFilter) -> Result<commands::CmdResult> {
        commands::count::run(&self.store, filter)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }
}

/// Parses a ship id. Ids are positive integers.
pub fn parse_id(raw: &str) -> Result<u64> {
    match raw.trim().parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ShipError::MalformedInput(format!("Invalid ship id: {}", raw))),
    }
}

/// Parses a production date: `YYYY-MM-DD`, or a bare year meaning January 1st.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    raw.parse::<i32>()
        .ok()
        .filter(|_| raw.len() == 4)
        .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1))
        .ok_or_else(|| ShipError::MalformedInput(format!("Invalid date: {}", raw)))
}

/// Parses a filter bound: anything [`parse_date`] accepts (taken at midnight
/// UTC), otherwise milliseconds since the epoch. A four-digit value is always a
/// year, so `1000` is the year 1000 while `10000` is ten seconds into 1970.
pub fn parse_instant(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(date) = parse_date(raw) {
        return Ok(Utc.from_utc_datetime(&date.and_time(chrono::NaiveTime::MIN)));
    }
    raw.trim()
        .parse::<i64>()
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .ok_or_else(|| ShipError::MalformedInput(format!("Invalid date or timestamp: {}", raw)))
}

/// Parses any `FromStr` number, reporting the parameter name on failure.
pub fn parse_number<T: FromStr>(name: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| ShipError::MalformedInput(format!("Invalid {}: {}", name, raw)))
}

/// Parses a finite float. `NaN` and infinities would make range checks vacuous.
pub fn parse_float(name: &str, raw: &str) -> Result<f64> {
    let value: f64 = parse_number(name, raw)?;
    if !value.is_finite() {
        return Err(ShipError::MalformedInput(format!("Invalid {}: {}", name, raw)));
    }
    Ok(value)
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
