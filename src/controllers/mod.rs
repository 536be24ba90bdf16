pub mod render_mandelbrot;
pub mod render_sierpinski;
