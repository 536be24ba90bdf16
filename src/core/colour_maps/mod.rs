pub mod errors;
pub mod fire_gradient;
