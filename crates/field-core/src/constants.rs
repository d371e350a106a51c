// Default tuning for the hero background and the page cursor.

// Particle field
pub const PARTICLE_COUNT: usize = 25;
pub const INITIAL_SPEED: f64 = 0.25; // half-range of the initial velocity, px/frame
pub const RADIUS_MIN: f64 = 100.0;
pub const RADIUS_MAX: f64 = 250.0; // exclusive
pub const ACCENT_EVERY: usize = 3; // every Nth particle (starting at 0) takes the accent color

// Config ceilings; larger values cannot be sampled or allocated
pub const MAX_PARTICLE_COUNT: usize = 4096;
pub const MAX_SPEED: f64 = f64::MAX / 4.0;
pub const MAX_RADIUS: f64 = f64::MAX / 4.0;

// Pointer attraction
pub const ATTRACTION_RADIUS: f64 = 300.0; // px, strict upper bound on distance
pub const ATTRACTION_GAIN: f64 = 0.000_05; // velocity change per px of displacement per frame

// Palette
pub const BACKGROUND_RGBA: [f64; 4] = [4.0, 4.0, 4.0, 1.0];
pub const ACCENT_RGBA: [f64; 4] = [255.0, 0.0, 0.0, 0.08];
pub const SHADE_RGBA: [f64; 4] = [26.0, 26.0, 26.0, 0.5];

// Cursor springs
pub const RING_STIFFNESS: f64 = 500.0;
pub const RING_DAMPING: f64 = 28.0;
pub const DOT_STIFFNESS: f64 = 1000.0;
pub const DOT_DAMPING: f64 = 30.0;
pub const SPRING_MASS: f64 = 1.0;
pub const SPRING_MAX_DT_SEC: f64 = 1.0 / 30.0; // longer frames are treated as this long
pub const SPRING_SUBSTEP_SEC: f64 = 1.0 / 240.0;

// Cursor ring appearance
pub const RING_SIZE_IDLE: f64 = 40.0;
pub const RING_SIZE_HOVER: f64 = 60.0;
pub const RING_OPACITY_IDLE: f64 = 0.5;
pub const RING_OPACITY_HOVER: f64 = 0.8;
