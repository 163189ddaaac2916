pub mod auth;
pub mod clubs;
pub mod leaderboard;
pub mod matches;
pub mod players;
pub mod points;
pub mod public;
pub mod templates;
pub mod tournaments;
