//! Frame-driven animator with explicit cancellation.
//!
//! The host calls [`Animator::frame`] once per display frame and schedules the
//! next frame only while it returns [`FrameStatus::Continue`]. Cancelling the
//! shared [`CancelToken`] stops all drawing from the next call on.

use std::cell::Cell;
use std::rc::Rc;

use glam::DVec2;

use crate::field::ParticleField;
use crate::surface::Surface;

/// Single-threaded cancellation flag shared between the loop and its owner.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idempotent.
    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStatus {
    Continue,
    Stopped,
}

pub struct Animator<S: Surface> {
    field: ParticleField,
    surface: S,
    token: CancelToken,
    frames: u64,
}

impl<S: Surface> Animator<S> {
    /// Sizes the surface to the field bounds.
    pub fn new(field: ParticleField, mut surface: S) -> Self {
        let b = field.bounds();
        surface.set_size(b.x, b.y);
        Self {
            field,
            surface,
            token: CancelToken::new(),
            frames: 0,
        }
    }

    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Number of frames drawn so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn is_running(&self) -> bool {
        !self.token.is_cancelled()
    }

    /// Tick then render. Does nothing once cancelled.
    pub fn frame(&mut self, pointer: Option<DVec2>) -> FrameStatus {
        if self.token.is_cancelled() {
            return FrameStatus::Stopped;
        }
        self.field.tick(pointer);
        self.field.render(&mut self.surface);
        self.frames += 1;
        FrameStatus::Continue
    }

    /// Resize the surface and the wrap bounds; particles are left untouched.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.surface.set_size(width, height);
        self.field.resize(width, height);
    }

    pub fn teardown(&mut self) {
        if !self.token.is_cancelled() {
            log::info!("[animator] teardown after {} frames", self.frames);
        }
        self.token.cancel();
    }
}
