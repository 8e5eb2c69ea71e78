use crate::commands::CmdResult;
use crate::error::Result;
use crate::query::ShipFilter;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, filter: &ShipFilter) -> Result<CmdResult> {
    let ships = store.find_all()?;
    let count = ships.iter().filter(|s| filter.matches(s)).count();
    Ok(CmdResult::default().with_count(count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn counts_all_without_criteria() {
        let store = StoreFixture::new().with_ships(10).store;
        let result = run(&store, &ShipFilter::default()).unwrap();
        assert_eq!(result.count, Some(10));
        assert!(result.listed_ships.is_empty());
    }

    #[test]
    fn counts_matches_ignoring_pagination() {
        // Fixture speeds are 0.10, 0.11, ... so four ships are at most 0.13.
        let store = StoreFixture::new().with_ships(10).store;
        let filter = ShipFilter {
            max_speed: Some(0.135),
            ..Default::default()
        };
        assert_eq!(run(&store, &filter).unwrap().count, Some(4));
    }

    #[test]
    fn empty_store_counts_zero() {
        let store = StoreFixture::new().store;
        assert_eq!(run(&store, &ShipFilter::default()).unwrap().count, Some(0));
    }
}
