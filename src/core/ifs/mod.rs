pub mod chaos_game;
pub mod flame;
pub mod linear_function;
pub mod system;
pub mod variation;
