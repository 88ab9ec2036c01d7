use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::model::{Listing, ListingDataset};

pub const NEIGHBOURHOOD_GROUPS: [&str; 5] =
    ["Manhattan", "Brooklyn", "Queens", "Bronx", "Staten Island"];
pub const ROOM_TYPES: [&str; 3] = ["Entire home/apt", "Private room", "Shared room"];

// ---------------------------------------------------------------------------
// Synthetic generator settings
// ---------------------------------------------------------------------------

/// Parameters of the deterministic demo dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntheticConfig {
    pub seed: u64,
    pub rows: usize,
    /// Emit latitude/longitude for every row.
    pub coordinates: bool,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            rows: 1000,
            coordinates: true,
        }
    }
}

/// Generate listings from a seeded RNG. The same config always yields the
/// same records.
pub fn generate_listings(config: &SyntheticConfig) -> Vec<Listing> {
    let mut rng = StdRng::seed_from_u64(config.seed);

    (0..config.rows)
        .map(|_| {
            let group = NEIGHBOURHOOD_GROUPS[rng.gen_range(0..NEIGHBOURHOOD_GROUPS.len())];
            let room = ROOM_TYPES[rng.gen_range(0..ROOM_TYPES.len())];
            let price = rng.gen_range(50u32..500) as f64;
            let number_of_reviews = rng.gen_range(0..200);
            let minimum_nights = rng.gen_range(1..30);
            let availability_365 = rng.gen_range(0..365);

            let (latitude, longitude) = if config.coordinates {
                (
                    Some(rng.gen_range(40.50..40.90)),
                    Some(rng.gen_range(-74.25..-73.70)),
                )
            } else {
                (None, None)
            };

            Listing {
                neighbourhood_group: group.to_string(),
                room_type: room.to_string(),
                price,
                number_of_reviews,
                minimum_nights,
                availability_365,
                latitude,
                longitude,
            }
        })
        .collect()
}

/// Convenience wrapper returning a ready dataset.
pub fn generate_dataset(config: &SyntheticConfig) -> ListingDataset {
    ListingDataset::from_listings(generate_listings(config))
}
