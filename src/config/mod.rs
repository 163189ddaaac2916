pub mod config;
pub mod jwt_auth;
