//! The two sides of a game.

mod computer;
mod human;
pub mod random;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;
