use std::time::Instant;

use crate::core::ifs::chaos_game::{ChaosGame, ChaosGameSettings};
use crate::core::ifs::system::IteratedFunctionSystem;

/// Runs the chaos game over the Sierpinski triangle and logs a summary of
/// the attractor it produced.
pub fn render_sierpinski_controller() -> Result<(), Box<dyn std::error::Error>> {
    let system = IteratedFunctionSystem::sierpinski()?;
    let game = ChaosGame::new(ChaosGameSettings::default())?;
    let mut rng = rand::thread_rng();

    log::info!("running chaos game: {}", system.name());

    let start = Instant::now();
    let points = game.run(&system, &mut rng)?;
    log::info!(
        "recorded {} points ({} distinct) in {:?}",
        points.recorded(),
        points.len(),
        start.elapsed()
    );

    if let (Some((min_x, max_x)), Some((min_y, max_y))) = (points.x_bounds(), points.y_bounds()) {
        log::info!(
            "attractor bounds: x in [{}, {}], y in [{}, {}]",
            min_x,
            max_x,
            min_y,
            max_y
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sierpinski_controller_returns_ok() {
        let result = render_sierpinski_controller();

        assert!(result.is_ok());
    }
}
