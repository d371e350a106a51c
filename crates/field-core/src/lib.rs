pub mod animator;
pub mod color;
pub mod config;
pub mod constants;
pub mod cursor;
pub mod field;
pub mod particle;
pub mod pointer;
pub mod surface;

pub use animator::*;
pub use color::*;
pub use config::*;
pub use constants::*;
pub use cursor::*;
pub use field::*;
pub use particle::*;
pub use pointer::*;
pub use surface::*;
