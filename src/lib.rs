pub mod controllers;
pub mod core;
pub mod storage;

pub use controllers::render_mandelbrot::render_mandelbrot_controller;
pub use controllers::render_sierpinski::render_sierpinski_controller;
