use crate::config::config::Config;
use deadpool::managed::Object;
use diesel_async::pooled_connection::{
    deadpool::{Pool, PoolError},
    AsyncDieselConnectionManager,
};
use diesel_async::AsyncPgConnection;
use thiserror::Error;

pub type DbPool = Pool<AsyncPgConnection>;
pub type DbConn = Object<AsyncDieselConnectionManager<AsyncPgConnection>>;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("could not get a connection from the pool: {0}")]
    Pool(#[from] PoolError),
    #[error("query failed: {0}")]
    Query(#[from] diesel::result::Error),
}

pub struct Database {
    pool: DbPool,
}

impl Database {
    pub fn new(config: &Config) -> Self {
        let manager =
            AsyncDieselConnectionManager::<AsyncPgConnection>::new(config.database_url.clone());
        let pool = Pool::builder(manager)
            .build()
            .expect("Failed to create pool.");
        Database { pool }
    }

    pub(crate) async fn conn(&self) -> Result<DbConn, DbError> {
        self.pool.get().await.map_err(DbError::from)
    }
}
