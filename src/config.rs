use serde::Deserialize;
use sqlx::postgres::PgConnectOptions;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub pg_host: String,
    pub pg_port: u16,
    pub pg_db: String,
    pub pg_user: String,
    pub pg_password: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            pg_host: std::env::var("PG_HOST").unwrap_or_else(|_| "localhost".into()),
            pg_port: std::env::var("PG_PORT")
                .ok()
                .and_then(|v| v.parse::<u16>().ok())
                .unwrap_or(5432),
            pg_db: std::env::var("PG_DB")?,
            pg_user: std::env::var("PG_USER")?,
            pg_password: std::env::var("PG_PASSWORD")?,
        })
    }

    // Built field-by-field so a password with URL metacharacters never
    // needs escaping.
    pub fn pg_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.pg_host)
            .port(self.pg_port)
            .database(&self.pg_db)
            .username(&self.pg_user)
            .password(&self.pg_password)
    }
}
