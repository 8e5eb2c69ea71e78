use super::{DataStore, ShipTable};
use crate::error::{Result, ShipError};
use crate::model::Ship;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    table: ShipTable,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail, for testing error propagation.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    pub fn len(&self) -> usize {
        self.table.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.ships.is_empty()
    }

    fn check_writable(&self) -> Result<()> {
        if self.simulate_write_error {
            return Err(ShipError::Store("Simulated write error".to_string()));
        }
        Ok(())
    }
}

impl DataStore for InMemoryStore {
    fn find_all(&self) -> Result<Vec<Ship>> {
        Ok(self.table.ships.clone())
    }

    fn find_by_id(&self, id: u64) -> Result<Option<Ship>> {
        Ok(self.table.get(id).cloned())
    }

    fn save(&mut self, ship: Ship) -> Result<Ship> {
        self.check_writable()?;
        self.table.upsert(ship)
    }

    fn delete(&mut self, ship: &Ship) -> Result<()> {
        self.check_writable()?;
        if !self.table.remove(ship.id) {
            return Err(ShipError::NotFound(ship.id));
        }
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::ShipType;
    use crate::rating;
    use chrono::NaiveDate;

    /// A valid, unsaved ship with a consistent rating.
    pub fn ship(name: &str, year: i32, speed: f64) -> Ship {
        let mut ship = Ship {
            id: 0,
            name: name.to_string(),
            planet: "Earth".to_string(),
            ship_type: ShipType::Transport,
            prod_date: NaiveDate::from_ymd_opt(year, 1, 1).unwrap(),
            is_used: false,
            speed,
            crew_size: 10,
            rating: 0.0,
        };
        rating::refresh(&mut ship);
        ship
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Adds `count` ships named "Ship 1".."Ship N", ids 1..=N.
        pub fn with_ships(mut self, count: usize) -> Self {
            for i in 0..count {
                let year = 2900 + (i % 100) as i32;
                let speed = 0.1 + 0.01 * (i % 50) as f64;
                self.store
                    .save(ship(&format!("Ship {}", i + 1), year, speed))
                    .unwrap();
            }
            self
        }

        pub fn with_ship(mut self, ship: Ship) -> Self {
            self.store.save(ship).unwrap();
            self
        }
    }
}
