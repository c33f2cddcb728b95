/*
 * Neural Field - Module Definitions
 *
 * The simulation core (particle, pointer, connections, surface, host, field)
 * has no window of its own and can be driven headlessly. The nannou
 * application (app, input, renderer, ui) hosts it in a window.
 */

// Re-export key components for easier access
pub use error::{Error, Result};
pub use field::{FrameStats, LifecycleState, ParticleField};
pub use host::{FrameId, FramePacer, FrameScheduler, Host, ListenerId, Signal, WindowHost};
pub use params::{FieldConfig, ViewSettings};
pub use particle::{ColorTag, Particle};
pub use pointer::PointerState;
pub use surface::{DisplayList, DrawCommand, DrawSurface, SurfaceExtents};

// Simulation core
pub mod connections;
pub mod error;
pub mod field;
pub mod host;
pub mod params;
pub mod particle;
pub mod pointer;
pub mod surface;

// Window host
pub mod app;
pub mod debug;
pub mod input;
pub mod renderer;
pub mod ui;
pub mod viewport;

// Constants
pub const DEFAULT_WINDOW_SIZE: (u32, u32) = (1280, 800);
