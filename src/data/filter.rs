use std::collections::BTreeSet;

use super::model::{Listing, ListingDataset};

// ---------------------------------------------------------------------------
// Filter state: what the side panel currently selects
// ---------------------------------------------------------------------------

/// The three sidebar selections.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    /// Inclusive `(low, high)` price bounds.
    pub price_range: (f64, f64),
    /// Selected neighbourhood groups. Empty means nothing passes.
    pub neighbourhood_groups: BTreeSet<String>,
    /// Selected room type. `None` only for an empty dataset.
    pub room_type: Option<String>,
}

/// Initialise a [`FilterState`] from the dataset's domains.
///
/// * price: `default_range` clamped into the observed bounds, or the full bounds
/// * neighbourhood groups: all selected
/// * room type: first in first-appearance order
pub fn init_filter_state(dataset: &ListingDataset, default_range: Option<[f64; 2]>) -> FilterState {
    let (min, max) = dataset.price_bounds.unwrap_or((0.0, 0.0));
    let price_range = match default_range {
        Some([lo, hi]) => (lo.clamp(min, max), hi.clamp(min, max)),
        None => (min, max),
    };

    FilterState {
        price_range,
        neighbourhood_groups: dataset.neighbourhood_groups.iter().cloned().collect(),
        room_type: dataset.room_types.first().cloned(),
    }
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// One row test. A listing is visible when every predicate matches.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    PriceBetween { low: f64, high: f64 },
    NeighbourhoodIn(BTreeSet<String>),
    RoomTypeIs(Option<String>),
}

impl Predicate {
    pub fn matches(&self, listing: &Listing) -> bool {
        match self {
            Predicate::PriceBetween { low, high } => *low <= listing.price && listing.price <= *high,
            Predicate::NeighbourhoodIn(groups) => groups.contains(&listing.neighbourhood_group),
            Predicate::RoomTypeIs(room) => room.as_deref() == Some(listing.room_type.as_str()),
        }
    }
}

impl FilterState {
    /// The conjunction this state stands for, price first.
    pub fn predicates(&self) -> [Predicate; 3] {
        [
            Predicate::PriceBetween {
                low: self.price_range.0,
                high: self.price_range.1,
            },
            Predicate::NeighbourhoodIn(self.neighbourhood_groups.clone()),
            Predicate::RoomTypeIs(self.room_type.clone()),
        ]
    }
}

/// Return indices of listings that pass every predicate, in dataset order.
pub fn filtered_indices(dataset: &ListingDataset, predicates: &[Predicate]) -> Vec<usize> {
    dataset
        .listings
        .iter()
        .enumerate()
        .filter(|(_, listing)| predicates.iter().all(|p| p.matches(listing)))
        .map(|(i, _)| i)
        .collect()
}
