//! Numeric primitives: the error function, blend weights, and sampling grids.

pub mod blend;
pub mod grid;
pub mod special;

pub use blend::*;
pub use grid::*;
pub use special::*;
