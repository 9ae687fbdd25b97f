pub mod board;
pub mod mask;
pub mod play;
pub mod solver;

mod parse;
