// A single soft blob of the hero background: position and velocity in canvas
// pixels, a fixed radius and a fixed palette color.

use glam::DVec2;

use crate::color::Rgba;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: DVec2,
    pub vel: DVec2,
    pub radius: f64,
    pub color: Rgba,
}

impl Particle {
    pub fn new(pos: DVec2, vel: DVec2, radius: f64, color: Rgba) -> Self {
        Self {
            pos,
            vel,
            radius,
            color,
        }
    }

    /// Bend velocity toward `pointer` when it is strictly closer than `radius`.
    /// Returns whether the nudge was applied.
    #[inline]
    pub fn attract(&mut self, pointer: DVec2, radius: f64, gain: f64) -> bool {
        let d = pointer - self.pos;
        if d.length() < radius {
            self.vel += d * gain;
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Teleport to the opposite edge once the blob has fully left `bounds`.
    ///
    /// A blob leaving past `-radius` reappears at `bound + radius` and vice
    /// versa, so the jump always happens off-screen. Axes are independent.
    #[inline]
    pub fn wrap(&mut self, bounds: DVec2) {
        let r = self.radius;
        if self.pos.x < -r {
            self.pos.x = bounds.x + r;
        }
        if self.pos.x > bounds.x + r {
            self.pos.x = -r;
        }
        if self.pos.y < -r {
            self.pos.y = bounds.y + r;
        }
        if self.pos.y > bounds.y + r {
            self.pos.y = -r;
        }
    }
}
