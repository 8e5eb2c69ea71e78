use crate::error::{Result, ShipError};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipType {
    Transport,
    Military,
    Merchant,
}

impl ShipType {
    pub const ALL: [ShipType; 3] = [ShipType::Transport, ShipType::Military, ShipType::Merchant];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShipType::Transport => "TRANSPORT",
            ShipType::Military => "MILITARY",
            ShipType::Merchant => "MERCHANT",
        }
    }
}

impl fmt::Display for ShipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShipType {
    type Err = ShipError;

    fn from_str(s: &str) -> Result<Self> {
        ShipType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ShipError::MalformedInput(format!("Unknown ship type: {}", s)))
    }
}

/// A stored ship.
///
/// `id` is zero until the store assigns one on first save; stored ships
/// always carry a positive id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ship {
    pub id: u64,
    pub name: String,
    pub planet: String,
    pub ship_type: ShipType,
    pub prod_date: NaiveDate,
    pub is_used: bool,
    pub speed: f64,
    pub crew_size: i32,
    pub rating: f64,
}

impl Ship {
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }

    pub fn prod_year(&self) -> i32 {
        self.prod_date.year()
    }
}

/// Client-supplied ship fields.
///
/// Used as the body of both create (where the required fields must be
/// present) and partial update (where only present fields are applied).
/// There is no rating field: rating is always derived.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShipInput {
    pub name: Option<String>,
    pub planet: Option<String>,
    pub ship_type: Option<ShipType>,
    pub prod_date: Option<NaiveDate>,
    pub is_used: Option<bool>,
    pub speed: Option<f64>,
    pub crew_size: Option<i32>,
}

impl ShipInput {
    /// Whether any field the rating depends on is present.
    pub fn touches_rating(&self) -> bool {
        self.prod_date.is_some() || self.is_used.is_some() || self.speed.is_some()
    }
}
