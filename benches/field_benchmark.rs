/*
 * Particle Field Benchmark
 *
 * Measures one full frame (advance + draw + connection pass) and the
 * connection pass alone at a few common viewport sizes. The connection pass
 * is quadratic in the particle count, so it dominates at large sizes.
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use neural_field::connections::connect;
use neural_field::particle::spawn_all;
use neural_field::{DisplayList, DrawSurface, FieldConfig, FramePacer, ParticleField, SurfaceExtents, WindowHost};

const VIEWPORTS: [(u32, u32); 4] = [(700, 700), (1280, 800), (1920, 1080), (3840, 2160)];

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");

    for &(w, h) in VIEWPORTS.iter() {
        let label = format!("{}x{}", w, h);
        group.bench_with_input(BenchmarkId::from_parameter(label), &(w, h), |b, &(w, h)| {
            let mut host = WindowHost::new();
            let mut pacer = FramePacer::new();
            let mut display = DisplayList::new();
            host.attach(SurfaceExtents::new(w, h));

            let mut field = ParticleField::new(FieldConfig::default(), Some(1)).expect("default config");
            field.start(&mut host, &mut pacer);

            b.iter(|| {
                if let Some(id) = pacer.take_due() {
                    black_box(field.frame(id, &mut display, &mut pacer));
                }
            });
        });
    }

    group.finish();
}

fn bench_connections(c: &mut Criterion) {
    let mut group = c.benchmark_group("connections");
    let config = FieldConfig::default();

    for &(w, h) in VIEWPORTS.iter() {
        let extents = SurfaceExtents::new(w, h);
        let mut rng = StdRng::seed_from_u64(2);
        let particles = spawn_all(&mut rng, extents, &config);

        group.bench_with_input(BenchmarkId::from_parameter(particles.len()), &particles, |b, particles| {
            let mut display = DisplayList::new();
            b.iter(|| {
                display.clear(extents);
                black_box(connect(particles, extents, &config, &mut display))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_frame, bench_connections);
criterion_main!(benches);
