/*
 * UI Module
 *
 * The tuning panel (nannou_egui) and the debug overlay. The panel edits a
 * working copy of the FieldConfig; the app hands it to the engine when it
 * changes and restores the engine's config if the edit is rejected.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::{FieldConfig, ViewSettings};

/// What the panel asked for this frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UiActions {
    pub config_changed: bool,
    pub reseed: bool,
    pub save: bool,
}

// Update the UI and report what the user changed
pub fn update_ui(
    egui: &mut Egui,
    settings: &mut ViewSettings,
    config: &mut FieldConfig,
    debug_info: &DebugInfo,
) -> UiActions {
    let mut actions = UiActions::default();
    let before = config.clone();

    let ctx = egui.begin_frame();

    if !settings.show_controls {
        return actions;
    }

    egui::Window::new("Field Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Particles", |ui| {
                ui.add(egui::Slider::new(&mut config.area_per_particle, FieldConfig::get_area_range()).text("Area per Particle"));
                ui.add(egui::Slider::new(&mut config.drift_speed, FieldConfig::get_drift_range()).text("Drift Speed"));
                ui.add(egui::Slider::new(&mut config.min_radius, FieldConfig::get_radius_range()).text("Min Radius"));
                ui.add(egui::Slider::new(&mut config.max_radius, FieldConfig::get_radius_range()).text("Max Radius"));

                if ui.button("Reseed").clicked() {
                    actions.reseed = true;
                }
            });

            ui.collapsing("Pointer", |ui| {
                ui.add(egui::Slider::new(&mut config.influence_radius, FieldConfig::get_influence_range()).text("Influence Radius"));
                ui.add(egui::Slider::new(&mut config.repulsion_strength, FieldConfig::get_strength_range()).text("Repulsion Strength"));
            });

            ui.collapsing("Links", |ui| {
                ui.add(egui::Slider::new(&mut config.link_divisor, FieldConfig::get_divisor_range()).text("Threshold Divisor"));
                ui.add(egui::Slider::new(&mut config.link_fade, FieldConfig::get_fade_range()).text("Fade Distance²"));
                ui.add(egui::Slider::new(&mut config.link_alpha, 0.0..=1.0).text("Max Opacity"));
                ui.add(egui::Slider::new(&mut config.canvas_opacity, 0.0..=1.0).text("Layer Opacity"));
            });

            ui.separator();
            ui.label(format!("FPS: {:.1}", debug_info.fps));
            ui.label(format!("Particles: {}", debug_info.particles));
            ui.label(format!("Links: {}", debug_info.links));

            ui.checkbox(&mut settings.show_debug, "Show Debug Info");
            ui.checkbox(&mut settings.paused, "Pause Drift");

            if ui.button("Save Config").clicked() {
                actions.save = true;
            }
        });

    actions.config_changed = *config != before;
    actions
}

// Draw debug information in the top-left corner
pub fn draw_debug_info(draw: &nannou::Draw, debug_info: &DebugInfo, window_rect: nannou::geom::Rect) {
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 200.0;
    let lines = debug_info.lines();
    let panel_height = line_height * lines.len() as f32 + margin;
    let panel_x = window_rect.left() + panel_width / 2.0;
    let panel_y = window_rect.top() - panel_height / 2.0;

    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.left() + margin;
    let text_y = window_rect.top() - margin;

    for (i, text) in lines.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        // Text is centred on its position, so shift it right by roughly half its width
        draw.text(text)
            .x_y(text_x + 70.0, y)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
