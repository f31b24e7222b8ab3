mod aabb;
mod color;

pub use aabb::AABB;
pub use color::{ColorError, HexColor};
