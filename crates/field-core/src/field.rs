//! The particle field: a fixed set of blobs drifting over the canvas, pulled
//! softly toward the pointer and wrapping around the edges.

use glam::DVec2;
use rand::Rng;

use crate::color::Rgba;
use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::surface::Surface;

#[derive(Clone, Debug)]
pub struct ParticleField {
    pub particles: Vec<Particle>,
    pub config: FieldConfig,
    bounds: DVec2,
}

impl ParticleField {
    /// Scatter `config.particle_count` particles uniformly over
    /// `[0, width) x [0, height)`.
    pub fn new<R: Rng + ?Sized>(width: f64, height: f64, config: FieldConfig, rng: &mut R) -> Self {
        let particles = (0..config.particle_count)
            .map(|i| {
                let pos = DVec2::new(
                    uniform(rng, 0.0, width.max(0.0)),
                    uniform(rng, 0.0, height.max(0.0)),
                );
                let vel = DVec2::new(
                    uniform_inclusive(rng, config.speed),
                    uniform_inclusive(rng, config.speed),
                );
                let radius = uniform(rng, config.radius_min, config.radius_max);
                Particle::new(pos, vel, radius, config.color_for(i))
            })
            .collect::<Vec<_>>();
        log::debug!(
            "[field] {} particles over {:.0}x{:.0}",
            particles.len(),
            width,
            height
        );
        Self {
            particles,
            config,
            bounds: DVec2::new(width, height),
        }
    }

    pub fn bounds(&self) -> DVec2 {
        self.bounds
    }

    /// Change the wrap bounds. Particles keep their coordinates; any that are
    /// now outside get wrapped by the next tick.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.bounds = DVec2::new(width, height);
    }

    /// One frame of motion. `pointer` is the last known pointer position in
    /// canvas pixels, if any.
    pub fn tick(&mut self, pointer: Option<DVec2>) {
        let radius = self.config.attraction_radius;
        let gain = self.config.attraction_gain;
        for p in &mut self.particles {
            if let Some(ptr) = pointer {
                p.attract(ptr, radius, gain);
            }
            p.advance();
            p.wrap(self.bounds);
        }
    }

    /// Clear to the background and paint every particle in index order.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear(self.config.background);
        for p in &self.particles {
            surface.fill_radial_disk(p.pos, p.radius, p.color, Rgba::TRANSPARENT);
        }
    }
}

// [lo, hi); collapses to `lo` for an empty range.
fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

// [-half, half]
fn uniform_inclusive<R: Rng + ?Sized>(rng: &mut R, half: f64) -> f64 {
    if half > 0.0 {
        rng.gen_range(-half..=half)
    } else {
        0.0
    }
}
