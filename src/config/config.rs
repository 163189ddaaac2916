use dotenv::dotenv;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_max_age: i64,
    pub bind_host: String,
    pub bind_port: u16,
    pub entity_cache_ttl_secs: u64,
    pub leaderboard_cache_ttl_secs: u64,
}

impl Config {
    pub fn init() -> Config {
        dotenv().ok();
        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let jwt_secret = std::env::var("JWT_SECRET").expect("JWT_SECRET must be set");
        let jwt_max_age = env_or("JWT_MAX_AGE", 3600);
        let bind_host = std::env::var("BIND_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let bind_port = env_or("BIND_PORT", 8080);
        // short TTLs; stale reads last at most one TTL after a write
        let entity_cache_ttl_secs = env_or("ENTITY_CACHE_TTL_SECS", 60);
        let leaderboard_cache_ttl_secs = env_or("LEADERBOARD_CACHE_TTL_SECS", 300);

        Config {
            database_url,
            jwt_secret,
            jwt_max_age,
            bind_host,
            bind_port,
            entity_cache_ttl_secs,
            leaderboard_cache_ttl_secs,
        }
    }
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(raw) if !raw.is_empty() => raw
            .parse::<T>()
            .unwrap_or_else(|_| panic!("Failed to parse {} from the environment", name)),
        _ => default,
    }
}
