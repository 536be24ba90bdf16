pub mod render_escape_time;
pub mod render_escape_time_cancelable;
pub mod render_escape_time_rayon;
