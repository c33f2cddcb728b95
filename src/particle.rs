/*
 * Particle Module
 *
 * A particle is a plain record; the behaviour lives in free functions so the
 * physics can be exercised without any renderer:
 * - `spawn` seeds one particle uniformly inside the surface
 * - `advance` runs one tick: Euler step, edge bounce, pointer repulsion
 * - `draw` paints the particle as a filled disc
 */

use nannou::prelude::*;
use rand::Rng;

use crate::params::FieldConfig;
use crate::pointer::PointerState;
use crate::surface::{DrawSurface, SurfaceExtents};

/// The two-colour palette particles are drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTag {
    NeonGreen,
    NeonBlue,
}

impl ColorTag {
    pub fn rgb(self) -> Rgb<u8> {
        match self {
            ColorTag::NeonGreen => rgb(0x39, 0xff, 0x14),
            ColorTag::NeonBlue => rgb(0x00, 0xf3, 0xff),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub color: ColorTag,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, radius: f32, color: ColorTag) -> Self {
        Self {
            position,
            velocity,
            radius,
            color,
        }
    }
}

/// Create one particle at a uniformly random spot inside `extents`.
///
/// Callers must not spawn into a zero-sized surface; `SurfaceExtents::particle_count`
/// is zero for those, so `spawn_all` never does.
pub fn spawn<R: Rng>(rng: &mut R, extents: SurfaceExtents, config: &FieldConfig) -> Particle {
    let x = rng.gen_range(0.0..extents.width as f32);
    let y = rng.gen_range(0.0..extents.height as f32);

    let drift = config.drift_speed;
    let vx = rng.gen_range(-drift..=drift);
    let vy = rng.gen_range(-drift..=drift);

    let radius = rng.gen_range(config.min_radius..=config.max_radius);
    let color = if rng.gen_bool(0.5) {
        ColorTag::NeonGreen
    } else {
        ColorTag::NeonBlue
    };

    Particle::new(vec2(x, y), vec2(vx, vy), radius, color)
}

/// A fresh particle set sized for `extents`.
pub fn spawn_all<R: Rng>(rng: &mut R, extents: SurfaceExtents, config: &FieldConfig) -> Vec<Particle> {
    let count = extents.particle_count(config.area_per_particle);
    (0..count).map(|_| spawn(rng, extents, config)).collect()
}

/// Advance a particle by one frame.
///
/// The edge test flips the velocity sign without pulling the position back
/// inside, so a particle can sit just outside the surface for a frame.
/// Repulsion moves the position directly and leaves the velocity alone.
pub fn advance(particle: &mut Particle, extents: SurfaceExtents, pointer: &PointerState, strength: f32) {
    particle.position += particle.velocity;

    let width = extents.width as f32;
    let height = extents.height as f32;

    if particle.position.x < 0.0 || particle.position.x > width {
        particle.velocity.x = -particle.velocity.x;
    }
    if particle.position.y < 0.0 || particle.position.y > height {
        particle.velocity.y = -particle.velocity.y;
    }

    if let Some(offset) = pointer.repulsion(particle.position, strength) {
        particle.position -= offset;
    }
}

pub fn draw<S: DrawSurface + ?Sized>(particle: &Particle, surface: &mut S) {
    surface.fill_disc(particle.position, particle.radius, particle.color);
}
