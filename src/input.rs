/*
 * Input Module
 *
 * Routes window events to the field. Resize and pointer-move only reach the
 * engine while it has a listener registered for them on the WindowHost;
 * after the field stops, events are dropped here.
 *
 * Keys:
 * - H: toggle the tuning panel
 * - D: toggle the debug overlay
 * - Space: pause drift (drawing continues)
 */

use log::debug;
use nannou::prelude::*;

use crate::app::Model;
use crate::host::Signal;
use crate::surface::SurfaceExtents;
use crate::viewport;

// Window resized event handler
pub fn resized(_app: &App, model: &mut Model, size: Vec2) {
    let extents = SurfaceExtents::from_points(size.x, size.y);
    model.host.attach(extents);

    if model.host.is_listening(Signal::Resize) {
        debug!("viewport resized to {}x{}", extents.width, extents.height);
        model.field.handle_resize(&mut model.host, extents);
    }
}

// Mouse moved event handler
pub fn mouse_moved(_app: &App, model: &mut Model, pos: Point2) {
    if !model.host.is_listening(Signal::PointerMove) {
        return;
    }

    let extents = model.field.extents();
    let client = viewport::window_to_client(pos, extents);
    model.field.handle_pointer_move(client);
}

// Key pressed event handler
pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    // Typing into an egui widget should not toggle anything
    if model.egui.ctx().wants_keyboard_input() {
        return;
    }

    match key {
        Key::H => model.settings.show_controls = !model.settings.show_controls,
        Key::D => model.settings.show_debug = !model.settings.show_debug,
        Key::Space => model.settings.paused = !model.settings.paused,
        _ => {}
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
