use crate::error::{Result, ShipError};
use crate::model::Ship;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Sort keys for listing. Ordering is always ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipOrder {
    Id,
    Speed,
    Date,
    Rating,
}

impl ShipOrder {
    pub const ALL: [ShipOrder; 4] = [
        ShipOrder::Id,
        ShipOrder::Speed,
        ShipOrder::Date,
        ShipOrder::Rating,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShipOrder::Id => "ID",
            ShipOrder::Speed => "SPEED",
            ShipOrder::Date => "DATE",
            ShipOrder::Rating => "RATING",
        }
    }

    pub fn compare(&self, a: &Ship, b: &Ship) -> Ordering {
        match self {
            ShipOrder::Id => a.id.cmp(&b.id),
            ShipOrder::Speed => a.speed.total_cmp(&b.speed),
            ShipOrder::Date => a.prod_date.cmp(&b.prod_date),
            ShipOrder::Rating => a.rating.total_cmp(&b.rating),
        }
    }
}

impl fmt::Display for ShipOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShipOrder {
    type Err = ShipError;

    fn from_str(s: &str) -> Result<Self> {
        ShipOrder::ALL
            .into_iter()
            .find(|o| o.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ShipError::MalformedInput(format!("Unknown sort order: {}", s)))
    }
}

/// Sorts ships by `order`, keeping the relative order of equal keys.
/// Without an order the input sequence is returned untouched.
pub fn sort_ships(mut ships: Vec<Ship>, order: Option<ShipOrder>) -> Vec<Ship> {
    if let Some(order) = order {
        ships.sort_by(|a, b| order.compare(a, b));
    }
    ships
}
