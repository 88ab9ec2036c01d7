//! Chart data derived from the filtered view. Drawing lives in `ui::plot`.

use std::collections::BTreeMap;

use crate::config::{CategoryOrder, HistogramConfig};
use crate::data::model::Listing;

// ---------------------------------------------------------------------------
// Price histogram
// ---------------------------------------------------------------------------

/// Equal-width bins over `[low, high]`. The last bin is closed on the right.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub low: f64,
    pub high: f64,
    pub counts: Vec<usize>,
}

impl Histogram {
    pub fn bin_width(&self) -> f64 {
        if self.counts.is_empty() {
            0.0
        } else {
            (self.high - self.low) / self.counts.len() as f64
        }
    }

    /// Centre of bin `i`, used as the bar position.
    pub fn bin_center(&self, i: usize) -> f64 {
        self.low + (i as f64 + 0.5) * self.bin_width()
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Bin `values` as configured. A fixed range ignores values outside it; a
/// data-derived range spans the finite min..max (±0.5 when they coincide,
/// 0..1 when there is nothing to bin).
pub fn histogram(values: &[f64], config: &HistogramConfig) -> Histogram {
    let bins = config.bins.max(1);
    let (low, high) = match config.range {
        Some([lo, hi]) => (lo, hi),
        None => data_range(values),
    };

    let mut counts = vec![0usize; bins];
    let width = (high - low) / bins as f64;
    if width > 0.0 && width.is_finite() {
        for &v in values {
            if !(low..=high).contains(&v) {
                continue;
            }
            let idx = (((v - low) / width) as usize).min(bins - 1);
            counts[idx] += 1;
        }
    }

    Histogram { low, high, counts }
}

fn data_range(values: &[f64]) -> (f64, f64) {
    let finite = values.iter().copied().filter(|v| v.is_finite());
    let (min, max) = finite.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if min > max {
        (0.0, 1.0)
    } else if min == max {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    }
}

// ---------------------------------------------------------------------------
// Neighbourhood counts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Records per neighbourhood group. Groups absent from `listings` are omitted.
///
/// `category_order` is the dataset's first-appearance order, used for
/// [`CategoryOrder::Category`].
pub fn neighbourhood_counts<'a>(
    listings: impl IntoIterator<Item = &'a Listing>,
    order: CategoryOrder,
    category_order: &[String],
) -> Vec<CategoryCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for l in listings {
        *counts.entry(l.neighbourhood_group.as_str()).or_default() += 1;
    }

    let mut rows: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(category, count)| CategoryCount {
            category: category.to_string(),
            count,
        })
        .collect();

    match order {
        // BTreeMap iteration already gives name order; the sort is stable.
        CategoryOrder::Descending => rows.sort_by(|a, b| b.count.cmp(&a.count)),
        CategoryOrder::Category => rows.sort_by_key(|row| {
            category_order
                .iter()
                .position(|c| *c == row.category)
                .unwrap_or(usize::MAX)
        }),
    }
    rows
}

// ---------------------------------------------------------------------------
// Scatter and map points
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub price: f64,
    pub reviews: u32,
    pub neighbourhood_group: String,
}

/// Price vs. review count, dropping rows with `reviews >= max_reviews`.
pub fn scatter_points<'a>(
    listings: impl IntoIterator<Item = &'a Listing>,
    max_reviews: Option<u32>,
) -> Vec<ScatterPoint> {
    listings
        .into_iter()
        .filter(|l| max_reviews.map_or(true, |max| l.number_of_reviews < max))
        .map(|l| ScatterPoint {
            price: l.price,
            reviews: l.number_of_reviews,
            neighbourhood_group: l.neighbourhood_group.clone(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub price: f64,
    pub neighbourhood_group: String,
}

/// Rows with both coordinates; the rest are dropped.
pub fn map_points<'a>(listings: impl IntoIterator<Item = &'a Listing>) -> Vec<MapPoint> {
    listings
        .into_iter()
        .filter_map(|l| {
            let (latitude, longitude) = l.coordinates()?;
            Some(MapPoint {
                latitude,
                longitude,
                price: l.price,
                neighbourhood_group: l.neighbourhood_group.clone(),
            })
        })
        .collect()
}
