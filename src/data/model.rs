use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Listing – one row of the table
// ---------------------------------------------------------------------------

/// A single rental listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub neighbourhood_group: String,
    pub room_type: String,
    pub price: f64,
    pub number_of_reviews: u32,
    pub minimum_nights: u32,
    pub availability_365: u32,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl Listing {
    /// Both coordinates, if the record has them.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => Some((lat, lon)),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// ListingDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full dataset with pre-computed column domains.
///
/// Category lists keep first-appearance order, which is the order the filter
/// widgets present them in.
#[derive(Debug, Clone)]
pub struct ListingDataset {
    /// All listings (rows). Never mutated after construction.
    pub listings: Vec<Listing>,
    /// Distinct neighbourhood groups in first-appearance order.
    pub neighbourhood_groups: Vec<String>,
    /// Distinct room types in first-appearance order.
    pub room_types: Vec<String>,
    /// Observed `(min, max)` price, `None` when empty.
    pub price_bounds: Option<(f64, f64)>,
    /// Whether at least one listing carries both coordinates.
    pub has_coordinates: bool,
    /// Every finite price is a whole number, so price widgets can step by 1.
    pub whole_prices: bool,
}

impl ListingDataset {
    /// Build column domains from the loaded listings.
    pub fn from_listings(listings: Vec<Listing>) -> Self {
        let mut neighbourhood_groups: Vec<String> = Vec::new();
        let mut room_types: Vec<String> = Vec::new();
        let mut price_bounds: Option<(f64, f64)> = None;
        let mut has_coordinates = false;
        let mut whole_prices = true;

        for listing in &listings {
            if !neighbourhood_groups.contains(&listing.neighbourhood_group) {
                neighbourhood_groups.push(listing.neighbourhood_group.clone());
            }
            if !room_types.contains(&listing.room_type) {
                room_types.push(listing.room_type.clone());
            }
            if listing.price.is_finite() {
                price_bounds = Some(match price_bounds {
                    Some((lo, hi)) => (lo.min(listing.price), hi.max(listing.price)),
                    None => (listing.price, listing.price),
                });
                whole_prices &= listing.price.fract() == 0.0;
            }
            has_coordinates |= listing.coordinates().is_some();
        }

        ListingDataset {
            listings,
            neighbourhood_groups,
            room_types,
            price_bounds,
            has_coordinates,
            whole_prices,
        }
    }

    /// Number of listings.
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

#[cfg(test)]
pub(crate) fn listing(group: &str, room: &str, price: f64, reviews: u32) -> Listing {
    Listing {
        neighbourhood_group: group.to_string(),
        room_type: room.to_string(),
        price,
        number_of_reviews: reviews,
        minimum_nights: 1,
        availability_365: 100,
        latitude: None,
        longitude: None,
    }
}
