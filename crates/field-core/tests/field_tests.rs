// Host-side tests for particle field initialisation, motion and rendering.

use field_core::*;
use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_field(seed: u64) -> ParticleField {
    let mut rng = StdRng::seed_from_u64(seed);
    ParticleField::new(1280.0, 720.0, FieldConfig::default(), &mut rng)
}

#[test]
fn initialize_respects_counts_and_ranges() {
    for seed in 0..20 {
        let field = make_field(seed);
        assert_eq!(field.particles.len(), PARTICLE_COUNT);
        for p in &field.particles {
            assert!(p.radius >= RADIUS_MIN && p.radius < RADIUS_MAX);
            assert!(p.vel.x.abs() <= INITIAL_SPEED && p.vel.y.abs() <= INITIAL_SPEED);
            assert!(p.pos.x >= 0.0 && p.pos.x < 1280.0);
            assert!(p.pos.y >= 0.0 && p.pos.y < 720.0);
        }
    }
}

#[test]
fn every_third_particle_is_accent() {
    let cfg = FieldConfig::default();
    let field = make_field(7);
    for (i, p) in field.particles.iter().enumerate() {
        let expected = if i % 3 == 0 { cfg.accent } else { cfg.shade };
        assert_eq!(p.color, expected, "particle {i}");
    }
    assert_eq!(field.particles[0].color.to_css(), "rgba(255, 0, 0, 0.08)");
    assert_eq!(field.particles[1].color.to_css(), "rgba(26, 26, 26, 0.5)");
}

#[test]
fn zero_sized_canvas_places_particles_at_origin() {
    let mut rng = StdRng::seed_from_u64(1);
    let field = ParticleField::new(0.0, 0.0, FieldConfig::default(), &mut rng);
    assert!(field.particles.iter().all(|p| p.pos == DVec2::ZERO));
}

#[test]
fn same_seed_gives_same_field() {
    let a = make_field(99);
    let b = make_field(99);
    assert_eq!(a.particles, b.particles);
}

#[test]
fn wrap_invariant_holds_over_many_ticks() {
    let mut field = make_field(3);
    let bounds = field.bounds();
    let pointers = [
        None,
        Some(DVec2::new(640.0, 360.0)),
        Some(DVec2::new(-50.0, 900.0)),
    ];
    for step in 0..5_000 {
        field.tick(pointers[(step / 500) % pointers.len()]);
        for p in &field.particles {
            let r = p.radius;
            assert!(p.pos.x >= -r && p.pos.x <= bounds.x + r, "x={} r={}", p.pos.x, r);
            assert!(p.pos.y >= -r && p.pos.y <= bounds.y + r, "y={} r={}", p.pos.y, r);
        }
    }
}

#[test]
fn wrap_is_continuous_not_reflective() {
    let mut p = Particle::new(
        DVec2::new(-100.5, 50.0),
        DVec2::new(-1.0, 0.0),
        100.0,
        Rgba::TRANSPARENT,
    );
    p.wrap(DVec2::new(800.0, 600.0));
    assert_eq!(p.pos.x, 900.0);
    // velocity keeps its sign
    assert_eq!(p.vel.x, -1.0);

    let mut q = Particle::new(
        DVec2::new(10.0, 700.5),
        DVec2::new(0.0, 1.0),
        100.0,
        Rgba::TRANSPARENT,
    );
    q.wrap(DVec2::new(800.0, 600.0));
    assert_eq!(q.pos.y, -100.0);

    // exactly on the edge stays put
    let mut e = Particle::new(DVec2::new(-100.0, 700.0), DVec2::ZERO, 100.0, Rgba::TRANSPARENT);
    e.wrap(DVec2::new(800.0, 600.0));
    assert_eq!(e.pos, DVec2::new(-100.0, 700.0));
}

#[test]
fn attraction_is_monotone_toward_pointer() {
    let mut field = make_field(11);
    let pointer = DVec2::new(640.0, 360.0);
    // park particle 0 near the pointer, moving away from it
    field.particles[0].pos = DVec2::new(500.0, 300.0);
    field.particles[0].vel = DVec2::new(-0.2, -0.1);
    for _ in 0..200 {
        let before = field.particles[0].clone();
        let d = pointer - before.pos;
        if d.length() >= ATTRACTION_RADIUS {
            break;
        }
        let dir = d.normalize();
        field.tick(Some(pointer));
        let after = &field.particles[0];
        assert!(after.vel.dot(dir) >= before.vel.dot(dir));
    }
}

#[test]
fn attraction_nudges_by_gain_times_displacement() {
    let mut p = Particle::new(DVec2::new(100.0, 100.0), DVec2::ZERO, 150.0, Rgba::TRANSPARENT);
    assert!(p.attract(DVec2::new(200.0, 100.0), ATTRACTION_RADIUS, ATTRACTION_GAIN));
    assert!((p.vel.x - 100.0 * ATTRACTION_GAIN).abs() < 1e-12);
    assert_eq!(p.vel.y, 0.0);
}

#[test]
fn attraction_threshold_is_strict() {
    let mut p = Particle::new(DVec2::ZERO, DVec2::ZERO, 150.0, Rgba::TRANSPARENT);
    assert!(!p.attract(DVec2::new(300.0, 0.0), ATTRACTION_RADIUS, ATTRACTION_GAIN));
    assert_eq!(p.vel, DVec2::ZERO);
}

#[test]
fn no_pointer_leaves_velocity_unchanged() {
    let mut field = make_field(5);
    let before: Vec<DVec2> = field.particles.iter().map(|p| p.vel).collect();
    let positions: Vec<DVec2> = field.particles.iter().map(|p| p.pos).collect();
    field.tick(None);
    for (i, p) in field.particles.iter().enumerate() {
        assert_eq!(p.vel, before[i]);
    }
    // positions integrate velocity (no wrap happens from inside the canvas)
    for (i, p) in field.particles.iter().enumerate() {
        assert_eq!(p.pos, positions[i] + before[i]);
    }
}

#[test]
fn far_pointer_leaves_velocity_unchanged() {
    let mut field = make_field(5);
    let before: Vec<DVec2> = field.particles.iter().map(|p| p.vel).collect();
    field.tick(Some(DVec2::new(1.0e6, 1.0e6)));
    for (i, p) in field.particles.iter().enumerate() {
        assert_eq!(p.vel, before[i]);
    }
}

#[test]
fn resize_keeps_positions_bit_identical() {
    let mut field = make_field(8);
    for _ in 0..10 {
        field.tick(None);
    }
    let before: Vec<[u64; 2]> = field
        .particles
        .iter()
        .map(|p| [p.pos.x.to_bits(), p.pos.y.to_bits()])
        .collect();
    field.resize(320.0, 200.0);
    let after: Vec<[u64; 2]> = field
        .particles
        .iter()
        .map(|p| [p.pos.x.to_bits(), p.pos.y.to_bits()])
        .collect();
    assert_eq!(before, after);
    assert_eq!(field.bounds(), DVec2::new(320.0, 200.0));
}

#[test]
fn shrink_then_tick_wraps_into_new_bounds() {
    let mut field = make_field(8);
    field.resize(10.0, 10.0);
    field.tick(None);
    for p in &field.particles {
        let r = p.radius;
        assert!(p.pos.x >= -r && p.pos.x <= 10.0 + r);
        assert!(p.pos.y >= -r && p.pos.y <= 10.0 + r);
    }
}

#[test]
fn render_clears_then_paints_in_index_order() {
    let field = make_field(2);
    let mut surface = RecordingSurface::new(1280.0, 720.0);
    field.render(&mut surface);
    let calls = surface.take_calls();
    assert_eq!(calls.len(), PARTICLE_COUNT + 1);
    assert_eq!(calls[0], DrawCall::Clear(Rgba::new(4, 4, 4, 1.0)));
    for (i, p) in field.particles.iter().enumerate() {
        assert_eq!(
            calls[i + 1],
            DrawCall::RadialDisk {
                center: p.pos,
                radius: p.radius,
                inner: p.color,
                outer: Rgba::TRANSPARENT,
            }
        );
    }
}
