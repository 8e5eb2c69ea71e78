use crate::error::{Result, ShipError};
use crate::model::Ship;
use crate::store::DataStore;

/// Looks up a ship, turning absence into `NotFound`.
pub fn resolve_ship<S: DataStore>(store: &S, id: u64) -> Result<Ship> {
    store.find_by_id(id)?.ok_or(ShipError::NotFound(id))
}
