pub mod catalog;
pub mod economy;
pub mod game;
pub mod player;
