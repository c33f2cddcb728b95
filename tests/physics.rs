use nannou::prelude::*;
use neural_field::connections::{connect, for_each_link, link_threshold_sq};
use neural_field::particle::{advance, spawn_all};
use neural_field::{
    ColorTag, DisplayList, FieldConfig, FramePacer, Particle, ParticleField, PointerState, SurfaceExtents,
    WindowHost,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn at(x: f32, y: f32) -> Particle {
    Particle::new(vec2(x, y), Vec2::ZERO, 1.0, ColorTag::NeonBlue)
}

/// With no pointer, a particle never strays further than one frame's drift
/// outside the surface, no matter how long it runs.
#[test]
fn positions_stay_near_bounds() {
    let config = FieldConfig::default();
    let extents = SurfaceExtents::new(640, 360);
    let mut rng = StdRng::seed_from_u64(42);
    let mut particles = spawn_all(&mut rng, extents, &config);
    let pointer = PointerState::new(config.influence_radius);

    let eps = config.drift_speed + 1e-3;
    for _ in 0..5000 {
        for p in &mut particles {
            advance(p, extents, &pointer, config.repulsion_strength);
            assert!(
                p.position.x >= -eps && p.position.x <= extents.width as f32 + eps,
                "x escaped: {:?}",
                p.position
            );
            assert!(
                p.position.y >= -eps && p.position.y <= extents.height as f32 + eps,
                "y escaped: {:?}",
                p.position
            );
        }
    }
}

/// Particles at or beyond the influence radius move by velocity only.
#[test]
fn no_repulsion_outside_influence() {
    let config = FieldConfig::default();
    let extents = SurfaceExtents::new(1000, 1000);
    let mut pointer = PointerState::new(150.0);
    pointer.position = Some(vec2(500.0, 500.0));

    let starts = [
        (vec2(500.0, 349.8), vec2(0.0, -0.2)), // ends 150.4 away
        (vec2(800.0, 500.0), vec2(0.1, 0.1)),
        (vec2(10.0, 990.0), vec2(-0.25, 0.25)),
    ];
    for (position, velocity) in starts {
        let mut p = Particle::new(position, velocity, 2.0, ColorTag::NeonGreen);
        advance(&mut p, extents, &pointer, config.repulsion_strength);
        assert!((p.position - (position + velocity)).length() < 1e-4);
    }
}

/// Inside the radius the push is straight away from the pointer.
#[test]
fn repulsion_points_away_from_pointer() {
    let extents = SurfaceExtents::new(1000, 1000);
    let mut pointer = PointerState::new(150.0);
    pointer.position = Some(vec2(500.0, 500.0));

    let mut p = at(460.0, 470.0);
    advance(&mut p, extents, &pointer, 3.0);

    // 30-40-50 triangle: force = 100 / 150
    let away = vec2(-0.8, -0.6);
    let expected = vec2(460.0, 470.0) + away * (100.0 / 150.0) * 3.0;
    assert!((p.position - expected).length() < 1e-4, "{:?}", p.position);
    assert_eq!(p.velocity, Vec2::ZERO);
}

/// The push does not stick: once the pointer leaves, only drift remains.
#[test]
fn repulsion_does_not_persist() {
    let extents = SurfaceExtents::new(1000, 1000);
    let mut pointer = PointerState::new(150.0);
    pointer.position = Some(vec2(505.0, 500.0));

    let mut p = Particle::new(vec2(500.0, 500.0), vec2(0.1, 0.0), 1.0, ColorTag::NeonGreen);
    advance(&mut p, extents, &pointer, 3.0);
    assert_eq!(p.velocity, vec2(0.1, 0.0));

    pointer.position = Some(vec2(0.0, 0.0));
    let before = p.position;
    advance(&mut p, extents, &pointer, 3.0);
    assert!((p.position - (before + vec2(0.1, 0.0))).length() < 1e-4);
}

/// Pairs at or beyond the threshold get no segment.
#[test]
fn no_links_at_or_beyond_threshold() {
    let extents = SurfaceExtents::new(700, 700);
    let threshold = link_threshold_sq(extents, 7.0);
    assert_eq!(threshold, 10000.0);

    // Exactly sqrt(10000) = 100 apart: on the boundary, so excluded
    let boundary = vec![at(100.0, 100.0), at(200.0, 100.0)];
    let mut display = DisplayList::new();
    assert_eq!(connect(&boundary, extents, &FieldConfig::default(), &mut display), 0);

    // Just inside the boundary: linked
    let inside = vec![at(100.0, 100.0), at(199.9, 100.0)];
    assert_eq!(connect(&inside, extents, &FieldConfig::default(), &mut display), 1);

    // Every emitted link in a random set is under the threshold
    let mut rng = StdRng::seed_from_u64(5);
    let particles = spawn_all(&mut rng, extents, &FieldConfig::default());
    let mut total = 0;
    for_each_link(&particles, threshold, |link| {
        assert!(link.distance_sq < threshold);
        assert!(link.a < link.b);
        total += 1;
    });
    let mut brute = 0;
    for a in 0..particles.len() {
        for b in a + 1..particles.len() {
            if particles[a].position.distance_squared(particles[b].position) < threshold {
                brute += 1;
            }
        }
    }
    assert_eq!(total, brute);
}

/// Reseeding twice gives the same count and ranges, not the same particles.
#[test]
fn reseed_is_statistically_idempotent() {
    let mut host = WindowHost::new();
    let mut pacer = FramePacer::new();
    let extents = SurfaceExtents::new(1280, 800);
    host.attach(extents);

    let mut field = ParticleField::new(FieldConfig::default(), Some(99)).unwrap();
    field.start(&mut host, &mut pacer);

    let first = field.particles().to_vec();
    field.reseed();
    let second = field.particles().to_vec();

    assert_eq!(first.len(), 68);
    assert_eq!(second.len(), first.len());
    assert_ne!(first, second);
    for p in first.iter().chain(second.iter()) {
        assert!(extents.contains(p.position));
        assert!(p.velocity.x.abs() <= 0.25 && p.velocity.y.abs() <= 0.25);
        assert!((1.0..=3.0).contains(&p.radius));
    }
}

/// 700x700 viewport, pointer one unit from a particle, links at the boundary.
#[test]
fn end_to_end_700_square() {
    let mut host = WindowHost::new();
    let mut pacer = FramePacer::new();
    host.attach(SurfaceExtents::new(700, 700));

    let mut field = ParticleField::new(FieldConfig::default(), Some(700)).unwrap();
    assert!(field.start(&mut host, &mut pacer));
    assert_eq!(field.particles().len(), 32);

    // Pointer lands one unit to the right of where particle 0 will be after its step
    let target = field.particles()[0].clone();
    let stepped = target.position + target.velocity;
    field.handle_pointer_move(stepped + vec2(1.0, 0.0));

    let mut display = DisplayList::new();
    let id = pacer.take_due().unwrap();
    let stats = field.frame(id, &mut display, &mut pacer).unwrap();
    assert_eq!(stats.particles, 32);
    assert_eq!(display.lines().count(), stats.links);

    let moved = &field.particles()[0];
    let force = 149.0 / 150.0;
    let displacement = stepped.x - moved.position.x;
    assert!((displacement - 3.0 * force).abs() < 1e-3, "displacement {}", displacement);
    assert!((moved.position.y - stepped.y).abs() < 1e-4);
}
