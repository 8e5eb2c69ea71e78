use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::resolve_ship;

pub fn run<S: DataStore>(store: &S, id: u64) -> Result<CmdResult> {
    let ship = resolve_ship(store, id)?;
    Ok(CmdResult::default().with_listed_ships(vec![ship]))
}
