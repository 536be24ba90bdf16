pub mod cancellation;
pub mod generate_pixel_buffer;
pub mod render_escape_time;
