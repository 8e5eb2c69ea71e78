//! Field validation rules.
//!
//! Each rule takes a single, possibly absent, field value and answers whether it
//! is acceptable. [`check_new`] and [`check_patch`] combine the rules for the
//! create and update paths and report the first failing field.

use crate::error::{Result, ShipError};
use crate::model::ShipInput;
use chrono::{Datelike, NaiveDate};

pub const MAX_STRING_LEN: usize = 50;
/// Production years are bounded exclusively on both ends.
pub const MIN_PROD_YEAR: i32 = 2800;
pub const MAX_PROD_YEAR: i32 = 3019;
pub const MIN_SPEED: f64 = 0.01;
pub const MAX_SPEED: f64 = 0.99;
pub const MIN_CREW_SIZE: i32 = 1;
pub const MAX_CREW_SIZE: i32 = 9999;

pub fn is_string_valid(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty() && v.chars().count() <= MAX_STRING_LEN)
}

pub fn is_prod_date_valid(value: Option<NaiveDate>) -> bool {
    value.is_some_and(|d| d.year() > MIN_PROD_YEAR && d.year() < MAX_PROD_YEAR)
}

pub fn is_speed_valid(value: Option<f64>) -> bool {
    value.is_some_and(|s| (MIN_SPEED..=MAX_SPEED).contains(&s))
}

pub fn is_crew_size_valid(value: Option<i32>) -> bool {
    value.is_some_and(|c| (MIN_CREW_SIZE..=MAX_CREW_SIZE).contains(&c))
}

/// Validates a create request. Every validated field must be present and pass.
pub fn check_new(input: &ShipInput) -> Result<()> {
    if !is_string_valid(input.name.as_deref()) {
        return Err(string_error("name"));
    }
    if !is_string_valid(input.planet.as_deref()) {
        return Err(string_error("planet"));
    }
    if input.ship_type.is_none() {
        return Err(ShipError::validation("shipType", "is required"));
    }
    if !is_prod_date_valid(input.prod_date) {
        return Err(prod_date_error());
    }
    if !is_speed_valid(input.speed) {
        return Err(speed_error());
    }
    if !is_crew_size_valid(input.crew_size) {
        return Err(crew_size_error());
    }
    Ok(())
}

/// Validates a partial update. Only present fields are checked.
pub fn check_patch(input: &ShipInput) -> Result<()> {
    if input.name.is_some() && !is_string_valid(input.name.as_deref()) {
        return Err(string_error("name"));
    }
    if input.planet.is_some() && !is_string_valid(input.planet.as_deref()) {
        return Err(string_error("planet"));
    }
    if input.prod_date.is_some() && !is_prod_date_valid(input.prod_date) {
        return Err(prod_date_error());
    }
    if input.speed.is_some() && !is_speed_valid(input.speed) {
        return Err(speed_error());
    }
    if input.crew_size.is_some() && !is_crew_size_valid(input.crew_size) {
        return Err(crew_size_error());
    }
    Ok(())
}

fn string_error(field: &'static str) -> ShipError {
    ShipError::validation(
        field,
        format!("must be 1 to {} characters", MAX_STRING_LEN),
    )
}

fn prod_date_error() -> ShipError {
    ShipError::validation(
        "prodDate",
        format!(
            "year must be after {} and before {}",
            MIN_PROD_YEAR, MAX_PROD_YEAR
        ),
    )
}

fn speed_error() -> ShipError {
    ShipError::validation(
        "speed",
        format!("must be between {} and {}", MIN_SPEED, MAX_SPEED),
    )
}

fn crew_size_error() -> ShipError {
    ShipError::validation(
        "crewSize",
        format!("must be between {} and {}", MIN_CREW_SIZE, MAX_CREW_SIZE),
    )
}
