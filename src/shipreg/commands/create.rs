use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShipError};
use crate::model::{Ship, ShipInput};
use crate::rating;
use crate::store::DataStore;
use crate::validation;
use tracing::{debug, info};

pub fn run<S: DataStore>(store: &mut S, input: ShipInput) -> Result<CmdResult> {
    if let Err(e) = validation::check_new(&input) {
        debug!(error = %e, "rejected new ship");
        return Err(e);
    }

    let ship = build(input)?;
    let saved = store.save(ship)?;
    info!(id = saved.id, rating = saved.rating, "ship created");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Ship created ({}): {}",
        saved.id, saved.name
    )));
    result.affected_ships.push(saved);
    Ok(result)
}

/// Turns a validated input into an unsaved ship with its rating filled in.
fn build(input: ShipInput) -> Result<Ship> {
    let (
        Some(name),
        Some(planet),
        Some(ship_type),
        Some(prod_date),
        Some(speed),
        Some(crew_size),
    ) = (
        input.name,
        input.planet,
        input.ship_type,
        input.prod_date,
        input.speed,
        input.crew_size,
    ) else {
        return Err(ShipError::validation("ship", "missing required fields"));
    };

    let mut ship = Ship {
        id: 0,
        name,
        planet,
        ship_type,
        prod_date,
        is_used: input.is_used.unwrap_or(false),
        speed,
        crew_size,
        rating: 0.0,
    };
    rating::refresh(&mut ship);
    Ok(ship)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ShipType;
    use crate::store::memory::InMemoryStore;
    use chrono::NaiveDate;

    fn input() -> ShipInput {
        ShipInput {
            name: Some("Test".into()),
            planet: Some("Earth".into()),
            ship_type: Some(ShipType::Transport),
            prod_date: NaiveDate::from_ymd_opt(3000, 1, 1),
            is_used: None,
            speed: Some(0.5),
            crew_size: Some(10),
        }
    }

    #[test]
    fn creates_with_defaults_and_rating() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, input()).unwrap();

        let ship = &result.affected_ships[0];
        assert_eq!(ship.id, 1);
        assert!(!ship.is_used);
        assert_eq!(ship.rating, 2.0);
        assert_eq!(store.find_by_id(1).unwrap().as_ref(), Some(ship));
    }

    #[test]
    fn used_ship_rating_is_halved() {
        let mut store = InMemoryStore::new();
        let result = run(
            &mut store,
            ShipInput {
                is_used: Some(true),
                ..input()
            },
        )
        .unwrap();
        assert_eq!(result.affected_ships[0].rating, 1.0);
    }

    #[test]
    fn invalid_input_is_not_stored() {
        let mut store = InMemoryStore::new();
        let err = run(
            &mut store,
            ShipInput {
                speed: Some(1.0),
                ..input()
            },
        )
        .unwrap_err();

        assert!(matches!(err, ShipError::Validation { field: "speed", .. }));
        assert!(store.is_empty());
    }

    #[test]
    fn store_failure_propagates() {
        let mut store = InMemoryStore::new();
        store.set_simulate_write_error(true);
        assert!(matches!(run(&mut store, input()), Err(ShipError::Store(_))));
    }
}
