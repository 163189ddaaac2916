pub mod admin;
pub mod club;
pub mod match_result;
pub mod player;
pub mod point_system;
pub mod response;
pub mod schema;
pub mod stats;
pub mod token_claims;
pub mod tournament;
