/*
 * Application Module
 *
 * Hosts the particle field in a nannou window. The window plays the part of
 * the page: it attaches a drawing surface, forwards resize and pointer
 * events, and fires one field frame per nannou update through the
 * FramePacer. The field records into a DisplayList that `view` replays.
 */

use log::{info, warn};
use nannou::prelude::*;
use nannou_egui::Egui;
use std::path::PathBuf;

use crate::debug::DebugInfo;
use crate::field::ParticleField;
use crate::host::{FramePacer, WindowHost};
use crate::input::{key_pressed, mouse_moved, raw_window_event, resized};
use crate::params::{FieldConfig, ViewSettings};
use crate::renderer::view;
use crate::surface::{DisplayList, SurfaceExtents};
use crate::ui;
use crate::DEFAULT_WINDOW_SIZE;

// Main model for the application
pub struct Model {
    pub field: ParticleField,
    pub host: WindowHost,
    pub pacer: FramePacer,
    pub display: DisplayList,
    pub config: FieldConfig,
    pub config_path: Option<PathBuf>,
    pub settings: ViewSettings,
    pub egui: Egui,
    pub debug_info: DebugInfo,
}

// Read the optional config file named by the first argument
fn load_config(path: Option<&PathBuf>) -> FieldConfig {
    match path {
        Some(path) => match FieldConfig::load(path) {
            Ok(config) => {
                info!("loaded field config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("could not load {}: {}; using defaults", path.display(), e);
                FieldConfig::default()
            }
        },
        None => FieldConfig::default(),
    }
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = load_config(config_path.as_ref());

    let (width, height) = DEFAULT_WINDOW_SIZE;
    let window_id = app
        .new_window()
        .title("Neural Field")
        .size(width, height)
        .view(view)
        .resized(resized)
        .mouse_moved(mouse_moved)
        .key_pressed(key_pressed)
        .raw_event(raw_window_event)
        .build()
        .expect("failed to build window");

    let window = app.window(window_id).expect("window closed during setup");
    let egui = Egui::from_window(&window);

    // The window is the drawing surface; attach it before mounting the field
    let (points_w, points_h) = window.inner_size_points();
    let mut host = WindowHost::new();
    host.attach(SurfaceExtents::from_points(points_w, points_h));

    let mut pacer = FramePacer::new();
    let mut field = match ParticleField::new(config.clone(), None) {
        Ok(field) => field,
        Err(e) => {
            warn!("{}; falling back to the default field config", e);
            ParticleField::new(FieldConfig::default(), None).expect("default config is valid")
        }
    };
    field.start(&mut host, &mut pacer);

    Model {
        config: field.config().clone(),
        field,
        host,
        pacer,
        display: DisplayList::new(),
        config_path,
        settings: ViewSettings::default(),
        egui,
        debug_info: DebugInfo::default(),
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    let actions = ui::update_ui(&mut model.egui, &mut model.settings, &mut model.config, &model.debug_info);

    if actions.config_changed && model.field.reconfigure(model.config.clone()).is_err() {
        // Keep the panel in step with what the field actually runs
        model.config = model.field.config().clone();
    }
    if actions.reseed {
        model.field.reseed();
    }
    if actions.save {
        save_config(model);
    }
    model.field.set_paused(model.settings.paused);

    if let Some(id) = model.pacer.take_due() {
        if let Some(stats) = model.field.frame(id, &mut model.display, &mut model.pacer) {
            model.debug_info.record_frame(stats, model.field.extents());
        }
    }
}

fn save_config(model: &Model) {
    let path = model
        .config_path
        .clone()
        .unwrap_or_else(|| PathBuf::from("neural-field.json"));
    match model.field.config().save(&path) {
        Ok(()) => info!("saved field config to {}", path.display()),
        Err(e) => warn!("could not save {}: {}", path.display(), e),
    }
}

// Tear the field down when the app exits
pub fn exit(_app: &App, mut model: Model) {
    model.field.stop(&mut model.host, &mut model.pacer);
    model.host.detach();
}
