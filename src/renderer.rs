/*
 * Renderer Module
 *
 * Replays the display list recorded by the last field frame onto nannou's
 * Draw. Every shape is faded by the layer opacity so the field reads as a
 * dim backdrop, then the debug overlay and egui panel go on top.
 */

use log::warn;
use nannou::prelude::*;

use crate::app::Model;
use crate::surface::DrawCommand;
use crate::ui;
use crate::viewport::client_to_window;

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let config = model.field.config();

    let [r, g, b] = config.background;
    draw.background().color(rgb(r, g, b));

    let extents = model.display.extents();
    let opacity = config.canvas_opacity;

    for command in model.display.commands() {
        match *command {
            DrawCommand::Disc { center, radius, color } => {
                let c = color.rgb();
                draw.ellipse()
                    .xy(client_to_window(center, extents))
                    .radius(radius)
                    .color(rgba(
                        c.red as f32 / 255.0,
                        c.green as f32 / 255.0,
                        c.blue as f32 / 255.0,
                        opacity,
                    ));
            }
            DrawCommand::Line { from, to, weight, alpha } => {
                draw.line()
                    .start(client_to_window(from, extents))
                    .end(client_to_window(to, extents))
                    .weight(weight)
                    .color(rgba(1.0, 1.0, 1.0, alpha * opacity));
            }
        }
    }

    if model.settings.show_debug {
        ui::draw_debug_info(&draw, &model.debug_info, app.window_rect());
    }

    if let Err(e) = draw.to_frame(app, &frame) {
        warn!("failed to render field: {:?}", e);
    }

    if let Err(e) = model.egui.draw_to_frame(&frame) {
        warn!("failed to render controls: {:?}", e);
    }
}
