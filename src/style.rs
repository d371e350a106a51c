// CSS strings for the cursor elements and viewport sizing helpers.
// Kept free of web-sys so it can be tested on the host.

use glam::DVec2;

/// Centers an element on `pos` (viewport pixels).
#[inline]
pub fn cursor_transform(pos: DVec2) -> String {
    format!(
        "translate({:.2}px, {:.2}px) translate(-50%, -50%)",
        pos.x, pos.y
    )
}

#[inline]
pub fn px(v: f64) -> String {
    format!("{}px", v.max(0.0))
}

#[inline]
pub fn opacity(v: f64) -> String {
    format!("{}", v.clamp(0.0, 1.0))
}

#[inline]
pub fn display(visible: bool) -> &'static str {
    if visible {
        "block"
    } else {
        "none"
    }
}

/// Canvas backing size for a viewport of `inner_w` x `inner_h` CSS pixels.
/// Non-finite or negative sizes collapse to zero.
#[inline]
pub fn viewport_size(inner_w: f64, inner_h: f64) -> (u32, u32) {
    let clamp = |v: f64| {
        if v.is_finite() && v > 0.0 {
            v.floor().min(u32::MAX as f64) as u32
        } else {
            0
        }
    };
    (clamp(inner_w), clamp(inner_h))
}

/// Seconds between two frame timestamps, with stalls capped at `max_dt`.
#[inline]
pub fn frame_dt(elapsed_sec: f64, max_dt: f64) -> f64 {
    if elapsed_sec.is_finite() {
        elapsed_sec.clamp(0.0, max_dt)
    } else {
        0.0
    }
}
