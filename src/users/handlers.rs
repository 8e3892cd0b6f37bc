use axum::{
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::error::{is_unique_violation, ApiError};
use crate::extractors::{AppJson, AppPath};
use crate::response::{Message, MessageId};
use crate::session::Session;
use crate::state::AppState;

use super::dto::{CreateUser, UpdateUser, UserOut};
use super::password;
use super::repo::{self, User};

const RESOURCE: &str = "User";

// --- public router ---

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user))
        .route(
            "/users/:user_id",
            get(get_user).patch(update_user).delete(delete_user),
        )
}

// --- handlers ---

#[instrument(skip(session))]
pub async fn get_user(
    mut session: Session,
    AppPath(user_id): AppPath<i64>,
) -> Result<Json<UserOut>, ApiError> {
    let Some(user) = repo::find_by_id(session.conn(), user_id).await? else {
        warn!(%user_id, "user not found");
        return Err(ApiError::NotFound(RESOURCE));
    };
    Ok(Json(UserOut::from_row(user)?))
}

#[instrument(skip(session, body))]
pub async fn create_user(
    mut session: Session,
    AppJson(body): AppJson<CreateUser>,
) -> Result<Json<MessageId>, ApiError> {
    let password_hash = password::hash_password(&body.password)?;
    match repo::insert(session.conn(), &body.name, body.email.as_deref(), &password_hash).await {
        Ok(id) => {
            session.commit().await?;
            info!(%id, "user created");
            Ok(Json(MessageId::created(RESOURCE, id)))
        }
        Err(err) if is_unique_violation(&err) => {
            session.rollback().await?;
            warn!(name = %body.name, "user already exists");
            Err(ApiError::Conflict(RESOURCE))
        }
        Err(err) => Err(err.into()),
    }
}

#[instrument(skip(session, body))]
pub async fn update_user(
    mut session: Session,
    AppPath(user_id): AppPath<i64>,
    AppJson(body): AppJson<UpdateUser>,
) -> Result<Json<MessageId>, ApiError> {
    let Some(mut user) = repo::find_by_id(session.conn(), user_id).await? else {
        warn!(%user_id, "user not found");
        return Err(ApiError::NotFound(RESOURCE));
    };
    apply_update(&mut user, body)?;
    repo::update(session.conn(), &user).await?;
    session.commit().await?;
    info!(%user_id, "user updated");
    Ok(Json(MessageId::updated(RESOURCE, user_id)))
}

#[instrument(skip(session))]
pub async fn delete_user(
    mut session: Session,
    AppPath(user_id): AppPath<i64>,
) -> Result<Json<Message>, ApiError> {
    if repo::find_by_id(session.conn(), user_id).await?.is_none() {
        warn!(%user_id, "user not found");
        return Err(ApiError::NotFound(RESOURCE));
    }
    repo::delete(session.conn(), user_id).await?;
    session.commit().await?;
    info!(%user_id, "user deleted");
    Ok(Json(Message::deleted(RESOURCE)))
}

/// Copy the supplied fields onto the row, hashing a new password when present.
/// Fields missing from the body keep their current values; a `null` email
/// clears the stored one.
fn apply_update(user: &mut User, update: UpdateUser) -> Result<(), ApiError> {
    if let Some(name) = update.name {
        user.name = name;
    }
    if let Some(email) = update.email {
        user.email = email;
    }
    if let Some(password) = update.password {
        user.password_hash = password::hash_password(&password)?;
    }
    Ok(())
}
