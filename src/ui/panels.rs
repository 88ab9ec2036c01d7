use eframe::egui::{self, Color32, RichText, ScrollArea, Slider, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let (min_price, max_price) = state.dataset().price_bounds.unwrap_or((0.0, 0.0));
    let whole_prices = state.dataset().whole_prices;
    let groups = state.dataset().neighbourhood_groups.clone();
    let room_types = state.dataset().room_types.clone();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Price range ----
            ui.strong("Price range");
            let (mut low, mut high) = state.filters.price_range;
            let step = if whole_prices { 1.0 } else { 0.0 };
            let low_changed = ui
                .add(
                    Slider::new(&mut low, min_price..=max_price)
                        .text("min")
                        .prefix("$")
                        .step_by(step),
                )
                .changed();
            let high_changed = ui
                .add(
                    Slider::new(&mut high, min_price..=max_price)
                        .text("max")
                        .prefix("$")
                        .step_by(step),
                )
                .changed();
            if low_changed || high_changed {
                state.filters.price_range = (low, high);
                state.refilter();
            }
            ui.separator();

            // ---- Neighbourhood groups (multi-select) ----
            let header_text = format!(
                "Neighbourhood group  ({}/{})",
                state.filters.neighbourhood_groups.len(),
                groups.len()
            );
            egui::CollapsingHeader::new(RichText::new(header_text).strong())
                .id_salt("neighbourhood_groups")
                .default_open(true)
                .show(ui, |ui: &mut Ui| {
                    ui.horizontal(|ui: &mut Ui| {
                        if ui.small_button("All").clicked() {
                            state.select_all_groups();
                        }
                        if ui.small_button("None").clicked() {
                            state.select_no_groups();
                        }
                    });

                    for group in &groups {
                        let mut checked = state.filters.neighbourhood_groups.contains(group);
                        let text = RichText::new(group).color(state.color_map.color_for(group));
                        if ui.checkbox(&mut checked, text).changed() {
                            state.toggle_group(group);
                        }
                    }
                });
            ui.separator();

            // ---- Room type (single select) ----
            ui.strong("Room type");
            let current = state.filters.room_type.clone().unwrap_or_default();
            egui::ComboBox::from_id_salt("room_type")
                .selected_text(&current)
                .show_ui(ui, |ui: &mut Ui| {
                    for room in &room_types {
                        if ui.selectable_label(current == *room, room).clicked()
                            && current != *room
                        {
                            state.set_room_type(room.clone());
                        }
                    }
                });

            ui.add_space(12.0);
            ui.separator();
            data_info(ui, state);
        });
}

fn data_info(ui: &mut Ui, state: &AppState) {
    let outcome = state.outcome();
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.strong("About the data");
        ui.label(format!("Source: {}", outcome.source));
        ui.label(format!("{} listings", outcome.dataset.len()));
        ui.label("Price, neighbourhood and room type per listing");
        if !outcome.dataset.has_coordinates {
            ui.label("No coordinates in this dataset");
        }
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Export filtered CSV…").clicked() {
                export_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} listings loaded, {} visible",
            state.dataset().len(),
            state.view.visible_indices.len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn export_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export filtered listings")
        .add_filter("CSV", &["csv"])
        .set_file_name("filtered_listings.csv")
        .save_file();

    if let Some(path) = file {
        match state.export_visible(&path) {
            Ok(n) => {
                log::info!("Exported {n} listings to {}", path.display());
                state.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to export: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
