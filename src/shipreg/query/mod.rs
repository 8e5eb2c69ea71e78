//! # Query Engine
//!
//! Listing runs three stages in a fixed order:
//!
//! ```text
//! find_all ──▶ filter ──▶ sort ──▶ page
//! ```
//!
//! Counting stops after the filter. Each stage is a pure function over owned
//! `Vec<Ship>` values, so the stages can be tested without a store.

pub mod filter;
pub mod page;
pub mod sort;

pub use filter::ShipFilter;
pub use page::{PageRequest, DEFAULT_PAGE_SIZE};
pub use sort::ShipOrder;

use crate::model::Ship;

/// Filters, sorts and paginates `ships`.
pub fn run(
    ships: Vec<Ship>,
    filter: &ShipFilter,
    order: Option<ShipOrder>,
    request: PageRequest,
) -> Vec<Ship> {
    let matched = filter.apply(ships);
    let sorted = sort::sort_ships(matched, order);
    page::page(sorted, request)
}
