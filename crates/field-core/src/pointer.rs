use glam::DVec2;

/// Last known pointer position in viewport pixels.
///
/// Written by pointer listeners, read once per frame. Until the first move
/// there is no position and the field feels no attraction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    last: Option<DVec2>,
}

impl PointerState {
    pub fn moved(&mut self, x: f64, y: f64) {
        if x.is_finite() && y.is_finite() {
            self.last = Some(DVec2::new(x, y));
        }
    }

    pub fn position(&self) -> Option<DVec2> {
        self.last
    }
}
