//! Scalar metrics and the per-neighbourhood aggregate table.

use std::collections::BTreeMap;

use crate::data::model::Listing;

/// Shown in place of a metric that is undefined for an empty view.
pub const PLACEHOLDER: &str = "N/A";

/// Headline metrics of the filtered view.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    /// `None` when the view is empty.
    pub mean_price: Option<f64>,
    /// `None` when the view is empty.
    pub median_price: Option<f64>,
}

impl Summary {
    pub fn from_listings<'a>(listings: impl IntoIterator<Item = &'a Listing>) -> Self {
        let prices: Vec<f64> = listings.into_iter().map(|l| l.price).collect();
        Self {
            count: prices.len(),
            mean_price: mean(&prices),
            median_price: median(&prices),
        }
    }
}

/// One row of the aggregate table.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupStats {
    pub neighbourhood_group: String,
    pub mean_price: f64,
    pub median_price: f64,
    pub count: usize,
    pub mean_reviews: f64,
}

/// Aggregate per neighbourhood group, sorted by group name, values rounded to
/// two decimals. Only groups present in `listings` get a row.
pub fn group_stats<'a>(listings: impl IntoIterator<Item = &'a Listing>) -> Vec<GroupStats> {
    let mut groups: BTreeMap<&str, (Vec<f64>, Vec<f64>)> = BTreeMap::new();
    for l in listings {
        let (prices, reviews) = groups.entry(l.neighbourhood_group.as_str()).or_default();
        prices.push(l.price);
        reviews.push(l.number_of_reviews as f64);
    }

    groups
        .into_iter()
        .filter_map(|(group, (prices, reviews))| {
            Some(GroupStats {
                neighbourhood_group: group.to_string(),
                mean_price: round2(mean(&prices)?),
                median_price: round2(median(&prices)?),
                count: prices.len(),
                mean_reviews: round2(mean(&reviews)?),
            })
        })
        .collect()
}

/// `$123.45`, or the placeholder for an undefined value.
pub fn format_price(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("${v:.2}"),
        _ => PLACEHOLDER.to_string(),
    }
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len();
    Some(if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    })
}

/// Two decimals, exact halves to the even digit (`100.125` → `100.12`).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
