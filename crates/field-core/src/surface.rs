//! Drawing surface the field renders into.
//!
//! The browser front-end implements this over a Canvas 2D context; the
//! [`RecordingSurface`] keeps a log of calls instead of pixels.

use glam::DVec2;

use crate::color::Rgba;

pub trait Surface {
    /// Current backing size in pixels.
    fn size(&self) -> (f64, f64);
    fn set_size(&mut self, width: f64, height: f64);
    /// Fill the whole surface with `color`.
    fn clear(&mut self, color: Rgba);
    /// Filled circle whose color fades radially from `inner` at `center`
    /// to `outer` at `radius`.
    fn fill_radial_disk(&mut self, center: DVec2, radius: f64, inner: Rgba, outer: Rgba);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear(Rgba),
    RadialDisk {
        center: DVec2,
        radius: f64,
        inner: Rgba,
        outer: Rgba,
    },
}

/// Headless surface that records draw calls in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub width: f64,
    pub height: f64,
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
        }
    }

    /// Drain recorded calls.
    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn set_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    fn clear(&mut self, color: Rgba) {
        self.calls.push(DrawCall::Clear(color));
    }

    fn fill_radial_disk(&mut self, center: DVec2, radius: f64, inner: Rgba, outer: Rgba) {
        self.calls.push(DrawCall::RadialDisk {
            center,
            radius,
            inner,
            outer,
        });
    }
}
