// Page wiring for the hero background and the custom cursor.

pub const DEFAULT_CANVAS_ID: &str = "hero-canvas";
// Optional JSON overrides for the field, read once at mount
pub const CONFIG_ATTRIBUTE: &str = "data-field-config";

pub const CURSOR_RING_ID: &str = "cursor-ring";
pub const CURSOR_DOT_ID: &str = "cursor-dot";
pub const HOVERABLE_SELECTOR: &str = "a, button, [role=\"button\"]";
pub const FINE_POINTER_QUERY: &str = "(pointer: fine)";

// Frame deltas above this are treated as a stall (tab in background)
pub const MAX_FRAME_DT_SEC: f64 = 0.25;
