pub mod admins;
pub mod cache;
pub mod clubs;
pub mod database;
pub mod matches;
pub mod players;
pub mod stats;
pub mod templates;
pub mod tournaments;
