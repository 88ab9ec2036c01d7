use std::collections::BTreeMap;

use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoints, Points};

use listing_dashboard::report::charts::{CategoryCount, Histogram, MapPoint, ScatterPoint};

use crate::color::ColorMap;

const PLOT_HEIGHT: f32 = 260.0;

// ---------------------------------------------------------------------------
// Price histogram
// ---------------------------------------------------------------------------

pub fn price_histogram(ui: &mut Ui, hist: &Histogram) {
    let width = hist.bin_width();
    let bars: Vec<Bar> = hist
        .counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let lo = hist.low + i as f64 * width;
            Bar::new(hist.bin_center(i), count as f64)
                .width(width)
                .name(format!("${lo:.0}-${:.0}", lo + width))
        })
        .collect();

    Plot::new("price_histogram")
        .height(PLOT_HEIGHT)
        .x_axis_label("Price")
        .y_axis_label("Listings")
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(bars)
                    .color(Color32::LIGHT_BLUE)
                    .name("Price"),
            );
        });
}

// ---------------------------------------------------------------------------
// Listings per neighbourhood group
// ---------------------------------------------------------------------------

pub fn neighbourhood_bars(ui: &mut Ui, counts: &[CategoryCount], color_map: &ColorMap) {
    Plot::new("neighbourhood_counts")
        .height(PLOT_HEIGHT)
        .legend(Legend::default())
        .y_axis_label("Listings")
        .show_x(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            // One chart per group so the legend names the bars.
            for (i, row) in counts.iter().enumerate() {
                let bar = Bar::new(i as f64, row.count as f64)
                    .width(0.7)
                    .name(&row.category);
                plot_ui.bar_chart(
                    BarChart::new(vec![bar])
                        .color(color_map.color_for(&row.category))
                        .name(&row.category),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Price vs. reviews
// ---------------------------------------------------------------------------

pub fn price_reviews_scatter(
    ui: &mut Ui,
    points: &[ScatterPoint],
    color_map: &ColorMap,
    color_by_group: bool,
) {
    // group name → points, or a single unnamed series
    let mut series: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for p in points {
        let key = if color_by_group {
            p.neighbourhood_group.as_str()
        } else {
            ""
        };
        series
            .entry(key)
            .or_default()
            .push([p.price, p.reviews as f64]);
    }

    let mut plot = Plot::new("price_reviews")
        .height(PLOT_HEIGHT)
        .x_axis_label("Price")
        .y_axis_label("Number of reviews");
    if color_by_group {
        plot = plot.legend(Legend::default());
    }

    plot.show(ui, |plot_ui| {
        for (group, xy) in series {
            let (name, color) = if group.is_empty() {
                ("Listings", Color32::LIGHT_BLUE)
            } else {
                (group, color_map.color_for(group))
            };
            plot_ui.points(
                Points::new(PlotPoints::from(xy))
                    .radius(2.5)
                    .color(color)
                    .name(name),
            );
        }
    });
}

// ---------------------------------------------------------------------------
// Geographic point map
// ---------------------------------------------------------------------------

/// Longitude on x, latitude on y, equal-aspect so distances read naturally.
pub fn listing_map(ui: &mut Ui, points: &[MapPoint], color_map: &ColorMap) {
    let mut series: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for p in points {
        series
            .entry(p.neighbourhood_group.as_str())
            .or_default()
            .push([p.longitude, p.latitude]);
    }

    Plot::new("listing_map")
        .height(PLOT_HEIGHT * 1.5)
        .legend(Legend::default())
        .data_aspect(1.0)
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        .show(ui, |plot_ui| {
            for (group, xy) in series {
                plot_ui.points(
                    Points::new(PlotPoints::from(xy))
                        .radius(2.0)
                        .color(color_map.color_for(group))
                        .name(group),
                );
            }
        });
}
