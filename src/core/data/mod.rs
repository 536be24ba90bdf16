pub mod affine_point;
pub mod colour;
pub mod coloured_point;
pub mod complex;
pub mod complex_rect;
pub mod iteration_point;
pub mod pixel_buffer;
pub mod pixel_rect;
pub mod point;
