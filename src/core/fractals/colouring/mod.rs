pub mod algorithm;
pub mod factory;
pub mod kinds;
pub mod smoothed;
pub mod triangle_grid;
