//! Ship filtering.
//!
//! A [`ShipFilter`] is a set of optional criteria. A ship matches when it
//! satisfies every criterion that is present; absent criteria match anything.

use crate::model::{Ship, ShipType};
use chrono::{DateTime, Datelike, Utc};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShipFilter {
    /// Case-sensitive substring of the name.
    pub name: Option<String>,
    /// Case-sensitive substring of the planet.
    pub planet: Option<String>,
    pub ship_type: Option<ShipType>,
    /// Production year must be at or after this instant's year.
    pub after: Option<DateTime<Utc>>,
    /// Production year must be at or before this instant's year.
    pub before: Option<DateTime<Utc>>,
    pub is_used: Option<bool>,
    pub min_speed: Option<f64>,
    pub max_speed: Option<f64>,
    pub min_crew_size: Option<i32>,
    pub max_crew_size: Option<i32>,
    pub min_rating: Option<f64>,
    pub max_rating: Option<f64>,
}

impl ShipFilter {
    pub fn is_empty(&self) -> bool {
        self == &ShipFilter::default()
    }

    pub fn matches(&self, ship: &Ship) -> bool {
        if let Some(name) = &self.name {
            if !ship.name.contains(name.as_str()) {
                return false;
            }
        }
        if let Some(planet) = &self.planet {
            if !ship.planet.contains(planet.as_str()) {
                return false;
            }
        }
        if self.ship_type.is_some_and(|t| t != ship.ship_type) {
            return false;
        }

        // Date bounds compare calendar years only.
        let year = ship.prod_year();
        if self.after.is_some_and(|after| year < after.year()) {
            return false;
        }
        if self.before.is_some_and(|before| year > before.year()) {
            return false;
        }

        if self.is_used.is_some_and(|used| used != ship.is_used) {
            return false;
        }

        within(ship.speed, self.min_speed, self.max_speed)
            && within(ship.crew_size, self.min_crew_size, self.max_crew_size)
            && within(ship.rating, self.min_rating, self.max_rating)
    }

    /// Keeps the matching ships, preserving their order.
    pub fn apply(&self, ships: Vec<Ship>) -> Vec<Ship> {
        if self.is_empty() {
            return ships;
        }
        ships.into_iter().filter(|s| self.matches(s)).collect()
    }
}

fn within<T: PartialOrd>(value: T, min: Option<T>, max: Option<T>) -> bool {
    if let Some(min) = min {
        if value < min {
            return false;
        }
    }
    if let Some(max) = max {
        if value > max {
            return false;
        }
    }
    true
}
