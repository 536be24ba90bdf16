fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    std::fs::create_dir_all("output")?;
    fractal_engine::render_mandelbrot_controller("output/mandelbrot.ppm")?;
    fractal_engine::render_sierpinski_controller()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_returns_ok() {
        let result = main();

        assert!(result.is_ok());
    }
}
