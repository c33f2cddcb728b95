/*
 * Surface Module
 *
 * The drawing surface the field renders into. The engine only knows the
 * `DrawSurface` trait; the nannou app hands it a `DisplayList`, records one
 * frame of shapes, and replays it in `view`. Tests inspect the same list.
 *
 * All coordinates here are client space: origin at the top-left corner,
 * x to the right, y downwards, in logical pixels.
 */

use nannou::prelude::*;

use crate::particle::ColorTag;

/// Pixel dimensions of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SurfaceExtents {
    pub width: u32,
    pub height: u32,
}

impl SurfaceExtents {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    // Window sizes arrive as logical points; partial pixels are dropped
    pub fn from_points(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0).floor() as u32,
            height: height.max(0.0).floor() as u32,
        }
    }

    /// Number of particles for this surface: `floor(width * height / area_per_particle)`.
    pub fn particle_count(&self, area_per_particle: f32) -> usize {
        let area = self.width as f64 * self.height as f64;
        (area / area_per_particle as f64).floor() as usize
    }

    pub fn size(&self) -> Vec2 {
        vec2(self.width as f32, self.height as f32)
    }

    /// True when `point` lies inside `[0, width] x [0, height]`.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= 0.0
            && point.x <= self.width as f32
            && point.y >= 0.0
            && point.y <= self.height as f32
    }
}

/// Something the field can paint a frame onto.
pub trait DrawSurface {
    /// Wipe the whole surface before a new frame.
    fn clear(&mut self, extents: SurfaceExtents);

    /// Filled disc in one of the palette colours.
    fn fill_disc(&mut self, center: Vec2, radius: f32, color: ColorTag);

    /// White line segment with the given opacity.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, weight: f32, alpha: f32);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Disc {
        center: Vec2,
        radius: f32,
        color: ColorTag,
    },
    Line {
        from: Vec2,
        to: Vec2,
        weight: f32,
        alpha: f32,
    },
}

/// A recorded frame, in draw order.
#[derive(Debug, Default)]
pub struct DisplayList {
    extents: SurfaceExtents,
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extents(&self) -> SurfaceExtents {
        self.extents
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn discs(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Disc { .. }))
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }
}

impl DrawSurface for DisplayList {
    fn clear(&mut self, extents: SurfaceExtents) {
        self.extents = extents;
        self.commands.clear();
    }

    fn fill_disc(&mut self, center: Vec2, radius: f32, color: ColorTag) {
        self.commands.push(DrawCommand::Disc {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, weight: f32, alpha: f32) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            weight,
            alpha,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particle_count_floors_the_density() {
        assert_eq!(SurfaceExtents::new(700, 700).particle_count(15000.0), 32);
        assert_eq!(SurfaceExtents::new(1920, 1080).particle_count(15000.0), 138);
        assert_eq!(SurfaceExtents::new(0, 1080).particle_count(15000.0), 0);
        assert_eq!(SurfaceExtents::new(100, 100).particle_count(15000.0), 0);
    }

    #[test]
    fn from_points_drops_fractions() {
        assert_eq!(SurfaceExtents::from_points(799.7, 600.2), SurfaceExtents::new(799, 600));
        assert_eq!(SurfaceExtents::from_points(-3.0, 10.0), SurfaceExtents::new(0, 10));
    }

    #[test]
    fn clear_resets_the_list() {
        let mut list = DisplayList::new();
        list.fill_disc(vec2(1.0, 1.0), 2.0, ColorTag::NeonGreen);
        list.stroke_line(vec2(0.0, 0.0), vec2(5.0, 5.0), 1.0, 0.1);
        assert_eq!(list.commands().len(), 2);
        assert_eq!(list.discs().count(), 1);
        assert_eq!(list.lines().count(), 1);

        list.clear(SurfaceExtents::new(10, 20));
        assert!(list.commands().is_empty());
        assert_eq!(list.extents(), SurfaceExtents::new(10, 20));
    }
}
