use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{FromColor, Hsv, Srgb};

/// Hue of the first group; the rest follow at even steps around the wheel.
const START_HUE: f32 = 30.0;

// ---------------------------------------------------------------------------
// Group palette
// ---------------------------------------------------------------------------

/// `n` distinct colours, one hue step of `360 / n` degrees apart.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    let step = 360.0 / n.max(1) as f32;
    (0..n)
        .map(|i| {
            let hsv: Hsv = Hsv::new(START_HUE + i as f32 * step, 0.65, 0.85);
            let rgb: Srgb<u8> = Srgb::<f32>::from_color(hsv).into_format();
            Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: neighbourhood group → Color32
// ---------------------------------------------------------------------------

/// Maps every neighbourhood group of the dataset to a fixed colour, so a group
/// keeps its colour whatever the filters hide.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    /// Build a colour map from the groups in display order.
    pub fn new(groups: &[String]) -> Self {
        let mapping = groups
            .iter()
            .cloned()
            .zip(generate_palette(groups.len()))
            .collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a group.
    pub fn color_for(&self, group: &str) -> Color32 {
        self.mapping
            .get(group)
            .copied()
            .unwrap_or(self.default_color)
    }
}
