pub mod auth;
pub mod clubs;
pub mod handler;
pub mod matches;
pub mod players;
pub mod public;
pub mod templates;
pub mod tournaments;
