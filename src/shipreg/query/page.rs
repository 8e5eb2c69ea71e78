use crate::model::Ship;

pub const DEFAULT_PAGE_NUMBER: usize = 0;
pub const DEFAULT_PAGE_SIZE: usize = 3;

/// A zero-based page request. Absent values fall back to the defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub page_number: Option<usize>,
    pub page_size: Option<usize>,
}

impl PageRequest {
    pub fn new(page_number: usize, page_size: usize) -> Self {
        Self {
            page_number: Some(page_number),
            page_size: Some(page_size),
        }
    }

    /// Fills in a missing page size, leaving a supplied one alone.
    pub fn with_default_size(mut self, page_size: usize) -> Self {
        self.page_size = self.page_size.or(Some(page_size));
        self
    }

    pub fn page_number(&self) -> usize {
        self.page_number.unwrap_or(DEFAULT_PAGE_NUMBER)
    }

    pub fn page_size(&self) -> usize {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// Index range of this page within a sequence of `len` items.
    /// Pages past the end clamp to an empty range.
    pub fn bounds(&self, len: usize) -> (usize, usize) {
        let size = self.page_size();
        let start = self.page_number().saturating_mul(size).min(len);
        let end = start.saturating_add(size).min(len);
        (start, end)
    }
}

pub fn page(ships: Vec<Ship>, request: PageRequest) -> Vec<Ship> {
    let (start, end) = request.bounds(ships.len());
    ships.into_iter().skip(start).take(end - start).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ShipType;
    use chrono::NaiveDate;

    fn ships(count: u64) -> Vec<Ship> {
        (1..=count)
            .map(|id| Ship {
                id,
                name: format!("Ship {}", id),
                planet: "Earth".into(),
                ship_type: ShipType::Transport,
                prod_date: NaiveDate::from_ymd_opt(3000, 1, 1).unwrap(),
                is_used: false,
                speed: 0.5,
                crew_size: 10,
                rating: 2.0,
            })
            .collect()
    }

    fn ids(ships: &[Ship]) -> Vec<u64> {
        ships.iter().map(|s| s.id).collect()
    }

    #[test]
    fn defaults_to_first_page_of_three() {
        assert_eq!(ids(&page(ships(10), PageRequest::default())), vec![1, 2, 3]);
    }

    #[test]
    fn second_page_covers_indices_three_to_six() {
        assert_eq!(ids(&page(ships(10), PageRequest::new(1, 3))), vec![4, 5, 6]);
    }

    #[test]
    fn last_page_is_clamped() {
        assert_eq!(ids(&page(ships(10), PageRequest::new(3, 3))), vec![10]);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        assert!(page(ships(10), PageRequest::new(5, 3)).is_empty());
        assert!(page(ships(10), PageRequest::new(usize::MAX, usize::MAX)).is_empty());
    }

    #[test]
    fn zero_size_page_is_empty() {
        assert!(page(ships(4), PageRequest::new(0, 0)).is_empty());
    }

    #[test]
    fn default_size_only_fills_gaps() {
        let request = PageRequest::default().with_default_size(5);
        assert_eq!(request.page_size(), 5);

        let request = PageRequest::new(0, 2).with_default_size(5);
        assert_eq!(request.page_size(), 2);
    }
}
