use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use tracing::info;

use super::helpers::resolve_ship;

pub fn run<S: DataStore>(store: &mut S, id: u64) -> Result<CmdResult> {
    let ship = resolve_ship(store, id)?;
    store.delete(&ship)?;
    info!(id, "ship deleted");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Ship deleted ({}): {}",
        ship.id, ship.name
    )));
    result.affected_ships.push(ship);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShipError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn removes_the_ship() {
        let mut store = StoreFixture::new().with_ships(2).store;
        let result = run(&mut store, 1).unwrap();

        assert_eq!(result.affected_ships[0].name, "Ship 1");
        assert!(store.find_by_id(1).unwrap().is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut store = StoreFixture::new().with_ships(2).store;
        assert!(matches!(run(&mut store, 5), Err(ShipError::NotFound(5))));
        assert_eq!(store.len(), 2);
    }
}
