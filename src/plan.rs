// Which parts of the hero come up for a given page. Free of web-sys so it
// can be tested on the host.

/// The background needs a 2D context; the cursor needs a fine pointer and its
/// elements. Either one alone is enough to run the frame loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MountPlan {
    pub field: bool,
    pub cursor: bool,
}

impl MountPlan {
    pub fn new(has_2d_context: bool, has_cursor: bool) -> Self {
        Self {
            field: has_2d_context,
            cursor: has_cursor,
        }
    }

    pub fn needs_loop(&self) -> bool {
        self.field || self.cursor
    }
}
