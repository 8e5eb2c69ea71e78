//! Ship rating.
//!
//! `rating = round2(80 * speed * k / (3019 - year + 1))` where `k` halves the
//! score for used ships. The reference year is fixed, not the current year.

use crate::model::Ship;

const REFERENCE_YEAR: i32 = 3019;
const SPEED_FACTOR: f64 = 80.0;
const USED_FACTOR: f64 = 0.5;

pub fn calculate_rating(speed: f64, is_used: bool, prod_year: i32) -> f64 {
    let k = if is_used { USED_FACTOR } else { 1.0 };
    let age = f64::from(REFERENCE_YEAR - prod_year + 1);
    round2(SPEED_FACTOR * speed * k / age)
}

/// Recomputes `ship.rating` from its current speed, usage and production year.
pub fn refresh(ship: &mut Ship) {
    ship.rating = calculate_rating(ship.speed, ship.is_used, ship.prod_year());
}

/// Rounds half-up to two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}
