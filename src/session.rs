use anyhow::Context;
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use sqlx::{postgres::PgPoolOptions, PgConnection, PgPool, Postgres, Transaction};

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::state::AppState;

/// Owns the connection pool and hands out one [`Session`] per request.
/// Nothing else touches the pool.
#[derive(Clone)]
pub struct SessionProvider {
    pool: PgPool,
}

impl SessionProvider {
    pub async fn connect(config: &AppConfig) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(config.pg_options())
            .await
            .context("connect to database")?;
        Ok(Self { pool })
    }

    pub async fn session(&self) -> sqlx::Result<Session> {
        Ok(Session {
            tx: self.pool.begin().await?,
        })
    }

    /// Wraps a pool handed in by the test harness instead of one built
    /// from [`AppConfig`].
    #[cfg(test)]
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// One transaction scoped to one request. The handler decides commit or
/// rollback; dropping an un-committed session rolls it back, so the
/// connection returns to the pool on every exit path.
pub struct Session {
    tx: Transaction<'static, Postgres>,
}

impl Session {
    pub fn conn(&mut self) -> &mut PgConnection {
        &mut self.tx
    }

    pub async fn commit(self) -> sqlx::Result<()> {
        self.tx.commit().await
    }

    pub async fn rollback(self) -> sqlx::Result<()> {
        self.tx.rollback().await
    }
}

#[async_trait]
impl FromRequestParts<AppState> for Session {
    type Rejection = ApiError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(state.sessions.session().await?)
    }
}
