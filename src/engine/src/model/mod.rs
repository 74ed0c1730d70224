pub mod game;
pub mod roster;
