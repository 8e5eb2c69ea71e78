use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Ship, ShipInput};
use crate::rating;
use crate::store::DataStore;
use crate::validation;
use tracing::{debug, info};

use super::helpers::resolve_ship;

/// Applies the present fields of `patch` to ship `id`.
///
/// The whole patch is validated before anything is touched, so a rejected
/// patch leaves the stored ship exactly as it was.
pub fn run<S: DataStore>(store: &mut S, id: u64, patch: ShipInput) -> Result<CmdResult> {
    let current = resolve_ship(store, id)?;

    if let Err(e) = validation::check_patch(&patch) {
        debug!(id, error = %e, "rejected ship update");
        return Err(e);
    }

    let recompute = patch.touches_rating();
    let mut ship = merge(current, patch);
    if recompute {
        rating::refresh(&mut ship);
    }

    let saved = store.save(ship)?;
    info!(id = saved.id, rating = saved.rating, "ship updated");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Ship updated ({}): {}",
        saved.id, saved.name
    )));
    result.affected_ships.push(saved);
    Ok(result)
}

fn merge(mut ship: Ship, patch: ShipInput) -> Ship {
    if let Some(name) = patch.name {
        ship.name = name;
    }
    if let Some(planet) = patch.planet {
        ship.planet = planet;
    }
    if let Some(ship_type) = patch.ship_type {
        ship.ship_type = ship_type;
    }
    if let Some(prod_date) = patch.prod_date {
        ship.prod_date = prod_date;
    }
    if let Some(is_used) = patch.is_used {
        ship.is_used = is_used;
    }
    if let Some(speed) = patch.speed {
        ship.speed = speed;
    }
    if let Some(crew_size) = patch.crew_size {
        ship.crew_size = crew_size;
    }
    ship
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShipError;
    use crate::model::ShipType;
    use crate::store::memory::fixtures::{ship, StoreFixture};
    use chrono::NaiveDate;

    fn store_with_orion() -> crate::store::memory::InMemoryStore {
        StoreFixture::new()
            .with_ship(ship("Orion", 3000, 0.5))
            .store
    }

    #[test]
    fn updates_only_supplied_fields() {
        let mut store = store_with_orion();
        let patch = ShipInput {
            name: Some("Orion II".into()),
            ship_type: Some(ShipType::Military),
            ..Default::default()
        };
        run(&mut store, 1, patch).unwrap();

        let stored = store.find_by_id(1).unwrap().unwrap();
        assert_eq!(stored.name, "Orion II");
        assert_eq!(stored.ship_type, ShipType::Military);
        assert_eq!(stored.planet, "Earth");
        assert_eq!(stored.rating, 2.0);
    }

    #[test]
    fn rating_follows_rating_fields() {
        let mut store = store_with_orion();
        run(
            &mut store,
            1,
            ShipInput {
                is_used: Some(true),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(store.find_by_id(1).unwrap().unwrap().rating, 1.0);

        run(
            &mut store,
            1,
            ShipInput {
                prod_date: NaiveDate::from_ymd_opt(3018, 5, 5),
                speed: Some(0.99),
                ..Default::default()
            },
        )
        .unwrap();
        // 80 * 0.99 * 0.5 / 2
        assert_eq!(store.find_by_id(1).unwrap().unwrap().rating, 19.8);
    }

    #[test]
    fn invalid_field_aborts_whole_update() {
        let mut store = store_with_orion();
        let before = store.find_by_id(1).unwrap().unwrap();

        let patch = ShipInput {
            name: Some("Valid name".into()),
            crew_size: Some(10000),
            ..Default::default()
        };
        let err = run(&mut store, 1, patch).unwrap_err();

        assert!(matches!(err, ShipError::Validation { field: "crewSize", .. }));
        assert_eq!(store.find_by_id(1).unwrap().unwrap(), before);
    }

    #[test]
    fn empty_patch_keeps_ship() {
        let mut store = store_with_orion();
        let before = store.find_by_id(1).unwrap().unwrap();
        let result = run(&mut store, 1, ShipInput::default()).unwrap();
        assert_eq!(result.affected_ships[0], before);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut store = store_with_orion();
        assert!(matches!(
            run(&mut store, 9, ShipInput::default()),
            Err(ShipError::NotFound(9))
        ));
    }
}
