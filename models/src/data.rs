pub mod players;
pub mod teams;
