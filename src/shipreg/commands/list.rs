use crate::commands::CmdResult;
use crate::error::Result;
use crate::query::{self, PageRequest, ShipFilter, ShipOrder};
use crate::store::DataStore;
use tracing::debug;

pub fn run<S: DataStore>(
    store: &S,
    filter: &ShipFilter,
    order: Option<ShipOrder>,
    page: PageRequest,
) -> Result<CmdResult> {
    let ships = store.find_all()?;
    let total = ships.len();
    let listed = query::run(ships, filter, order, page);
    debug!(
        total,
        listed = listed.len(),
        page = page.page_number(),
        size = page.page_size(),
        "listed ships"
    );
    Ok(CmdResult::default().with_listed_ships(listed))
}
