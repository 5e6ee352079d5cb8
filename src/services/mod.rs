pub mod discover;
pub mod ranking;
pub mod teams;
