/*
 * Debug Information Module
 *
 * Frame metrics shown in the debug overlay and the tuning panel.
 */

use std::time::Duration;

use crate::field::FrameStats;
use crate::surface::SurfaceExtents;

pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub particles: usize,
    pub links: usize,
    pub frames: u64,
    pub surface: SurfaceExtents,
}

impl Default for DebugInfo {
    fn default() -> Self {
        Self {
            fps: 0.0,
            frame_time: Duration::ZERO,
            particles: 0,
            links: 0,
            frames: 0,
            surface: SurfaceExtents::default(),
        }
    }
}

impl DebugInfo {
    pub fn record_frame(&mut self, stats: FrameStats, surface: SurfaceExtents) {
        self.particles = stats.particles;
        self.links = stats.links;
        self.surface = surface;
        self.frames += 1;
    }

    pub fn lines(&self) -> [String; 5] {
        [
            format!("FPS: {:.1}", self.fps),
            format!("Frame time: {:.2} ms", self.frame_time.as_secs_f64() * 1000.0),
            format!("Particles: {}", self.particles),
            format!("Links: {}", self.links),
            format!("Surface: {}x{}", self.surface.width, self.surface.height),
        ]
    }
}
