mod aabb;
mod color;
mod grid;

pub use aabb::AABB;
pub use color::{light_direction, shade_factor, Rgb};
pub use grid::linspace;
