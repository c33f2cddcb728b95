/*
 * Viewport Module
 *
 * Conversions between nannou window space (origin at the window centre,
 * y pointing up) and client space (origin at the top-left corner, y pointing
 * down) which is what the field simulates in.
 */

use nannou::prelude::*;

use crate::surface::SurfaceExtents;

// Convert a point from window space to client space
pub fn window_to_client(point: Vec2, extents: SurfaceExtents) -> Vec2 {
    let half = extents.size() / 2.0;
    vec2(point.x + half.x, half.y - point.y)
}

// Convert a point from client space to window space
pub fn client_to_window(point: Vec2, extents: SurfaceExtents) -> Vec2 {
    let half = extents.size() / 2.0;
    vec2(point.x - half.x, half.y - point.y)
}
