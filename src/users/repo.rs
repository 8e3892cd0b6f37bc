use sqlx::{FromRow, PgConnection};
use time::OffsetDateTime;

#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub password_hash: String,
    pub creation_time: OffsetDateTime,
}

/// Fetch a user by primary key.
pub async fn find_by_id(conn: &mut PgConnection, user_id: i64) -> sqlx::Result<Option<User>> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password_hash, creation_time
        FROM app_users
        WHERE id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(conn)
    .await
}

/// Insert a new user and return the generated id.
pub async fn insert(
    conn: &mut PgConnection,
    name: &str,
    email: Option<&str>,
    password_hash: &str,
) -> sqlx::Result<i64> {
    let (id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO app_users (name, email, password_hash)
        VALUES ($1, $2, $3)
        RETURNING id
        "#,
    )
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .fetch_one(conn)
    .await?;
    Ok(id)
}

/// Persist the mutable columns of an already-loaded user.
pub async fn update(conn: &mut PgConnection, user: &User) -> sqlx::Result<()> {
    sqlx::query(
        r#"
        UPDATE app_users
        SET name = $2, email = $3, password_hash = $4
        WHERE id = $1
        "#,
    )
    .bind(user.id)
    .bind(&user.name)
    .bind(&user.email)
    .bind(&user.password_hash)
    .execute(conn)
    .await?;
    Ok(())
}

/// Delete a user by primary key.
pub async fn delete(conn: &mut PgConnection, user_id: i64) -> sqlx::Result<()> {
    sqlx::query("DELETE FROM app_users WHERE id = $1")
        .bind(user_id)
        .execute(conn)
        .await?;
    Ok(())
}
