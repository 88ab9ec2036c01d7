use eframe::egui::{Align, Layout, Ui};
use egui_extras::{Column, TableBuilder};

use listing_dashboard::data::model::Listing;
use listing_dashboard::report::summary::{format_price, GroupStats, Summary};

const ROW_HEIGHT: f32 = 18.0;

// ---------------------------------------------------------------------------
// Headline metrics
// ---------------------------------------------------------------------------

pub fn metrics(ui: &mut Ui, summary: &Summary) {
    ui.columns(3, |cols| {
        metric(&mut cols[0], "Listings", summary.count.to_string());
        metric(&mut cols[1], "Mean price", format_price(summary.mean_price));
        metric(&mut cols[2], "Median price", format_price(summary.median_price));
    });
}

fn metric(ui: &mut Ui, label: &str, value: String) {
    ui.vertical(|ui: &mut Ui| {
        ui.label(label);
        ui.heading(value);
    });
}

// ---------------------------------------------------------------------------
// Filtered data table
// ---------------------------------------------------------------------------

pub fn listings_table(ui: &mut Ui, rows: &[Listing], show_coordinates: bool) {
    if rows.is_empty() {
        ui.label("No listings match the current filters.");
        return;
    }

    let mut headers = vec![
        "neighbourhood_group",
        "room_type",
        "price",
        "number_of_reviews",
        "minimum_nights",
        "availability_365",
    ];
    if show_coordinates {
        headers.extend(["latitude", "longitude"]);
    }

    ui.push_id("listings_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .cell_layout(Layout::left_to_right(Align::Center))
            .columns(Column::auto().at_least(70.0), headers.len())
            .header(ROW_HEIGHT + 2.0, |mut header| {
                for h in &headers {
                    header.col(|ui| {
                        ui.strong(*h);
                    });
                }
            })
            .body(|mut body| {
                for listing in rows {
                    body.row(ROW_HEIGHT, |mut row| {
                        let mut cells = vec![
                            listing.neighbourhood_group.clone(),
                            listing.room_type.clone(),
                            format!("{:.0}", listing.price),
                            listing.number_of_reviews.to_string(),
                            listing.minimum_nights.to_string(),
                            listing.availability_365.to_string(),
                        ];
                        if show_coordinates {
                            cells.push(optional(listing.latitude));
                            cells.push(optional(listing.longitude));
                        }
                        for cell in cells {
                            row.col(|ui| {
                                ui.label(cell);
                            });
                        }
                    });
                }
            });
    });
}

fn optional(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.5}")).unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Per-group aggregate table
// ---------------------------------------------------------------------------

pub fn group_table(ui: &mut Ui, rows: &[GroupStats]) {
    if rows.is_empty() {
        ui.label("No groups to summarise.");
        return;
    }

    const HEADERS: [&str; 5] = [
        "neighbourhood_group",
        "price mean",
        "price median",
        "price count",
        "reviews mean",
    ];

    ui.push_id("group_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .cell_layout(Layout::left_to_right(Align::Center))
            .columns(Column::auto().at_least(90.0), HEADERS.len())
            .header(ROW_HEIGHT + 2.0, |mut header| {
                for h in HEADERS {
                    header.col(|ui| {
                        ui.strong(h);
                    });
                }
            })
            .body(|mut body| {
                for stats in rows {
                    body.row(ROW_HEIGHT, |mut row| {
                        let cells = [
                            stats.neighbourhood_group.clone(),
                            format!("{:.2}", stats.mean_price),
                            format!("{:.2}", stats.median_price),
                            stats.count.to_string(),
                            format!("{:.2}", stats.mean_reviews),
                        ];
                        for cell in cells {
                            row.col(|ui| {
                                ui.label(cell);
                            });
                        }
                    });
                }
            });
    });
}
