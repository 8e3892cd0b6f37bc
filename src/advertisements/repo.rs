use sqlx::{FromRow, PgConnection};
use time::OffsetDateTime;

#[derive(Debug, Clone, FromRow)]
pub struct Advertisement {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub owner: String,
    pub creation_time: OffsetDateTime,
    pub user_id: Option<i64>,
}

/// Fetch an advertisement by primary key.
pub async fn find_by_id(
    conn: &mut PgConnection,
    advertisement_id: i64,
) -> sqlx::Result<Option<Advertisement>> {
    sqlx::query_as::<_, Advertisement>(
        r#"
        SELECT id, title, description, owner, creation_time, user_id
        FROM app_advertisements
        WHERE id = $1
        "#,
    )
    .bind(advertisement_id)
    .fetch_optional(conn)
    .await
}

/// Insert a new advertisement and return the generated id.
pub async fn insert(
    conn: &mut PgConnection,
    title: &str,
    description: &str,
    owner: &str,
    user_id: Option<i64>,
) -> sqlx::Result<i64> {
    let (id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO app_advertisements (title, description, owner, user_id)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(title)
    .bind(description)
    .bind(owner)
    .bind(user_id)
    .fetch_one(conn)
    .await?;
    Ok(id)
}

/// Persist the mutable columns of an already-loaded advertisement.
pub async fn update(conn: &mut PgConnection, ad: &Advertisement) -> sqlx::Result<()> {
    sqlx::query(
        r#"
        UPDATE app_advertisements
        SET title = $2, description = $3, owner = $4, user_id = $5
        WHERE id = $1
        "#,
    )
    .bind(ad.id)
    .bind(&ad.title)
    .bind(&ad.description)
    .bind(&ad.owner)
    .bind(ad.user_id)
    .execute(conn)
    .await?;
    Ok(())
}

/// Delete an advertisement by primary key.
pub async fn delete(conn: &mut PgConnection, advertisement_id: i64) -> sqlx::Result<()> {
    sqlx::query("DELETE FROM app_advertisements WHERE id = $1")
        .bind(advertisement_id)
        .execute(conn)
        .await?;
    Ok(())
}
