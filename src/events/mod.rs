mod pointer;

pub use pointer::*;
