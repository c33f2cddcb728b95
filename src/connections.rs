/*
 * Connections Module
 *
 * Draws faint white lines between particles that are close to each other.
 * Every unordered pair is tested once per frame using squared distances, so
 * the pass is quadratic in the particle count; the density rule keeps that
 * count small.
 *
 * The link threshold scales with the surface so a large window looks as
 * connected as a small one.
 */

use crate::params::FieldConfig;
use crate::particle::Particle;
use crate::surface::{DrawSurface, SurfaceExtents};

/// A pair of particle indices closer than the link threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub distance_sq: f32,
}

/// Squared distance below which two particles are linked: `(w / d) * (h / d)`.
pub fn link_threshold_sq(extents: SurfaceExtents, divisor: f32) -> f32 {
    (extents.width as f32 / divisor) * (extents.height as f32 / divisor)
}

/// Line opacity for a pair at squared distance `distance_sq`.
pub fn link_opacity(distance_sq: f32, fade: f32, max_alpha: f32) -> f32 {
    (1.0 - distance_sq / fade).clamp(0.0, 1.0) * max_alpha
}

/// Visit every unordered pair (no self-pairs) closer than `threshold_sq`.
pub fn for_each_link<F>(particles: &[Particle], threshold_sq: f32, mut visit: F)
where
    F: FnMut(Link),
{
    for (a, pa) in particles.iter().enumerate() {
        for (offset, pb) in particles[a + 1..].iter().enumerate() {
            let distance_sq = pa.position.distance_squared(pb.position);
            if distance_sq < threshold_sq {
                visit(Link {
                    a,
                    b: a + 1 + offset,
                    distance_sq,
                });
            }
        }
    }
}

/// Draw every visible link and return how many were drawn.
pub fn connect<S: DrawSurface + ?Sized>(
    particles: &[Particle],
    extents: SurfaceExtents,
    config: &FieldConfig,
    surface: &mut S,
) -> usize {
    let threshold_sq = link_threshold_sq(extents, config.link_divisor);
    let mut drawn = 0;

    for_each_link(particles, threshold_sq, |link| {
        let alpha = link_opacity(link.distance_sq, config.link_fade, config.link_alpha);
        if alpha <= 0.0 {
            return;
        }
        surface.stroke_line(
            particles[link.a].position,
            particles[link.b].position,
            config.link_width,
            alpha,
        );
        drawn += 1;
    });

    drawn
}
