use crate::session::SessionProvider;

const CREATE_APP_USERS: &str = r#"
CREATE TABLE IF NOT EXISTS app_users (
    id BIGSERIAL PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    email VARCHAR(100) UNIQUE,
    password_hash VARCHAR(128) NOT NULL,
    creation_time TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

const CREATE_APP_ADVERTISEMENTS: &str = r#"
CREATE TABLE IF NOT EXISTS app_advertisements (
    id BIGSERIAL PRIMARY KEY,
    title VARCHAR(100) NOT NULL,
    description VARCHAR(500) NOT NULL,
    owner VARCHAR(50) NOT NULL,
    creation_time TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    user_id BIGINT REFERENCES app_users (id)
)
"#;

/// Creates both tables when absent. Runs once at startup; there is no
/// migration tooling, the DDL is idempotent.
pub async fn ensure_schema(sessions: &SessionProvider) -> anyhow::Result<()> {
    let mut session = sessions.session().await?;
    sqlx::query(CREATE_APP_USERS).execute(session.conn()).await?;
    sqlx::query(CREATE_APP_ADVERTISEMENTS)
        .execute(session.conn())
        .await?;
    session.commit().await?;
    tracing::debug!("database schema ready");
    Ok(())
}
