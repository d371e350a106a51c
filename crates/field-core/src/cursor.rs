//! Spring-following page cursor: a loose ring and a stiff dot chasing the
//! pointer, with the ring growing while an interactive element is hovered.

use glam::DVec2;

use crate::constants::*;

/// Scalar damped spring integrated with semi-implicit Euler.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    pub value: f64,
    pub velocity: f64,
    pub target: f64,
}

impl Spring {
    pub fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass: SPRING_MASS,
            value: 0.0,
            velocity: 0.0,
            target: 0.0,
        }
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Jump to `value` and stop.
    pub fn snap(&mut self, value: f64) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// Advance by `dt_sec`, clamped to [`SPRING_MAX_DT_SEC`] and split into
    /// fixed sub-steps.
    pub fn step(&mut self, dt_sec: f64) {
        let mut remaining = dt_sec.clamp(0.0, SPRING_MAX_DT_SEC);
        while remaining > 0.0 {
            let h = remaining.min(SPRING_SUBSTEP_SEC);
            let force = -self.stiffness * (self.value - self.target) - self.damping * self.velocity;
            self.velocity += force / self.mass * h;
            self.value += self.velocity * h;
            remaining -= h;
        }
    }

    pub fn is_settled(&self, eps: f64) -> bool {
        (self.value - self.target).abs() < eps && self.velocity.abs() < eps
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring2 {
    pub x: Spring,
    pub y: Spring,
}

impl Spring2 {
    pub fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            x: Spring::new(stiffness, damping),
            y: Spring::new(stiffness, damping),
        }
    }

    pub fn set_target(&mut self, p: DVec2) {
        self.x.set_target(p.x);
        self.y.set_target(p.y);
    }

    pub fn snap(&mut self, p: DVec2) {
        self.x.snap(p.x);
        self.y.snap(p.y);
    }

    pub fn step(&mut self, dt_sec: f64) {
        self.x.step(dt_sec);
        self.y.step(dt_sec);
    }

    pub fn value(&self) -> DVec2 {
        DVec2::new(self.x.value, self.y.value)
    }
}

#[derive(Clone, Debug)]
pub struct CursorFollower {
    pub ring: Spring2,
    pub dot: Spring2,
    hovering: bool,
    visible: bool,
    seen_pointer: bool,
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorFollower {
    pub fn new() -> Self {
        Self {
            ring: Spring2::new(RING_STIFFNESS, RING_DAMPING),
            dot: Spring2::new(DOT_STIFFNESS, DOT_DAMPING),
            hovering: false,
            visible: false,
            seen_pointer: false,
        }
    }

    pub fn pointer_moved(&mut self, p: DVec2) {
        if !self.seen_pointer {
            // first sighting: appear under the pointer instead of flying in from the origin
            self.ring.snap(p);
            self.dot.snap(p);
            self.seen_pointer = true;
            self.visible = true;
            return;
        }
        self.ring.set_target(p);
        self.dot.set_target(p);
    }

    pub fn step(&mut self, dt_sec: f64) {
        self.ring.step(dt_sec);
        self.dot.step(dt_sec);
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn ring_pos(&self) -> DVec2 {
        self.ring.value()
    }

    pub fn dot_pos(&self) -> DVec2 {
        self.dot.value()
    }

    pub fn ring_size(&self) -> f64 {
        if self.hovering {
            RING_SIZE_HOVER
        } else {
            RING_SIZE_IDLE
        }
    }

    pub fn ring_opacity(&self) -> f64 {
        if self.hovering {
            RING_OPACITY_HOVER
        } else {
            RING_OPACITY_IDLE
        }
    }
}
