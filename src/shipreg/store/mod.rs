//! # Storage Layer
//!
//! The [`DataStore`] trait is everything the command layer needs from
//! persistence: a snapshot of all ships, lookup by id, save, and delete.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a single JSON document on disk
//!   ```text
//!   <data dir>/
//!   ├── ships.json     # { "next_id": 4, "ships": [ ... ] }
//!   └── config.json    # ShipregConfig
//!   ```
//! - [`memory::InMemoryStore`]: no persistence, used by tests.
//!
//! Both return ships in ascending id order from [`DataStore::find_all`], so an
//! unsorted listing is deterministic.
//!
//! Stores own id assignment: saving a ship whose id is still zero inserts it
//! under the next free id. Ids are never reused.

use crate::error::{Result, ShipError};
use crate::model::Ship;
use serde::{Deserialize, Serialize};

pub mod fs;
pub mod memory;

/// Abstract interface for ship storage.
pub trait DataStore {
    /// Snapshot of every stored ship, in ascending id order.
    fn find_all(&self) -> Result<Vec<Ship>>;

    fn find_by_id(&self, id: u64) -> Result<Option<Ship>>;

    /// Insert (when `ship.id` is zero) or overwrite by id. Returns the stored ship.
    fn save(&mut self, ship: Ship) -> Result<Ship>;

    /// Remove a ship. Fails with `NotFound` if it is not stored.
    fn delete(&mut self, ship: &Ship) -> Result<()>;
}

/// Serialized form shared by the stores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipTable {
    pub next_id: u64,
    pub ships: Vec<Ship>,
}

impl Default for ShipTable {
    fn default() -> Self {
        Self {
            next_id: 1,
            ships: Vec::new(),
        }
    }
}

impl ShipTable {
    pub fn get(&self, id: u64) -> Option<&Ship> {
        self.ships.iter().find(|s| s.id == id)
    }

    /// Fails when the id space is exhausted, which only a hand-edited file can cause.
    pub fn upsert(&mut self, mut ship: Ship) -> Result<Ship> {
        if !ship.is_persisted() {
            ship.id = self.next_id;
        }
        self.next_id = self.next_id.max(id_after(ship.id)?);

        match self.ships.binary_search_by_key(&ship.id, |s| s.id) {
            Ok(pos) => self.ships[pos] = ship.clone(),
            Err(pos) => self.ships.insert(pos, ship.clone()),
        }
        Ok(ship)
    }

    /// Returns false when no ship had that id.
    pub fn remove(&mut self, id: u64) -> bool {
        match self.ships.binary_search_by_key(&id, |s| s.id) {
            Ok(pos) => {
                self.ships.remove(pos);
                true
            }
            Err(_) => false,
        }
    }
}

/// The id following `id`.
pub(crate) fn id_after(id: u64) -> Result<u64> {
    id.checked_add(1)
        .ok_or_else(|| ShipError::Store(format!("no ids left after {}", id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::ship;

    #[test]
    fn upsert_assigns_sequential_ids() {
        let mut table = ShipTable::default();
        assert_eq!(table.upsert(ship("A", 3000, 0.5)).unwrap().id, 1);
        assert_eq!(table.upsert(ship("B", 3000, 0.5)).unwrap().id, 2);
        assert_eq!(table.next_id, 3);
    }

    #[test]
    fn exhausted_id_space_is_a_store_error() {
        let mut last = ship("Last", 3000, 0.5);
        last.id = u64::MAX;
        let mut table = ShipTable::default();
        assert!(matches!(table.upsert(last), Err(ShipError::Store(_))));
        assert!(table.ships.is_empty());
    }
}
