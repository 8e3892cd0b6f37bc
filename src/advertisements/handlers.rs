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

use super::dto::{AdvertisementOut, CreateAdvertisement, UpdateAdvertisement};
use super::repo::{self, Advertisement};

const RESOURCE: &str = "Advertisement";

// --- public router ---

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/advertisements", post(create_advertisement))
        .route(
            "/advertisements/:advertisement_id",
            get(get_advertisement)
                .patch(update_advertisement)
                .delete(delete_advertisement),
        )
}

// --- handlers ---

#[instrument(skip(session))]
pub async fn get_advertisement(
    mut session: Session,
    AppPath(advertisement_id): AppPath<i64>,
) -> Result<Json<AdvertisementOut>, ApiError> {
    let Some(ad) = repo::find_by_id(session.conn(), advertisement_id).await? else {
        warn!(%advertisement_id, "advertisement not found");
        return Err(ApiError::NotFound(RESOURCE));
    };
    Ok(Json(AdvertisementOut::from_row(ad)?))
}

#[instrument(skip(session, body))]
pub async fn create_advertisement(
    mut session: Session,
    AppJson(body): AppJson<CreateAdvertisement>,
) -> Result<Json<MessageId>, ApiError> {
    let inserted = repo::insert(
        session.conn(),
        &body.title,
        &body.description,
        &body.owner,
        body.user_id,
    )
    .await;
    match inserted {
        Ok(id) => {
            session.commit().await?;
            info!(%id, "advertisement created");
            Ok(Json(MessageId::created(RESOURCE, id)))
        }
        Err(err) if is_unique_violation(&err) => {
            session.rollback().await?;
            warn!(title = %body.title, "advertisement already exists");
            Err(ApiError::Conflict(RESOURCE))
        }
        Err(err) => Err(err.into()),
    }
}

#[instrument(skip(session, body))]
pub async fn update_advertisement(
    mut session: Session,
    AppPath(advertisement_id): AppPath<i64>,
    AppJson(body): AppJson<UpdateAdvertisement>,
) -> Result<Json<MessageId>, ApiError> {
    let Some(mut ad) = repo::find_by_id(session.conn(), advertisement_id).await? else {
        warn!(%advertisement_id, "advertisement not found");
        return Err(ApiError::NotFound(RESOURCE));
    };
    apply_update(&mut ad, body);
    repo::update(session.conn(), &ad).await?;
    session.commit().await?;
    info!(%advertisement_id, "advertisement updated");
    Ok(Json(MessageId::updated(RESOURCE, advertisement_id)))
}

#[instrument(skip(session))]
pub async fn delete_advertisement(
    mut session: Session,
    AppPath(advertisement_id): AppPath<i64>,
) -> Result<Json<Message>, ApiError> {
    if repo::find_by_id(session.conn(), advertisement_id)
        .await?
        .is_none()
    {
        warn!(%advertisement_id, "advertisement not found");
        return Err(ApiError::NotFound(RESOURCE));
    }
    repo::delete(session.conn(), advertisement_id).await?;
    session.commit().await?;
    info!(%advertisement_id, "advertisement deleted");
    Ok(Json(Message::deleted(RESOURCE)))
}

/// Copy the supplied fields onto the row. Fields missing from the body keep
/// their current values; a `null` user_id detaches the ad from its user.
fn apply_update(ad: &mut Advertisement, update: UpdateAdvertisement) {
    if let Some(title) = update.title {
        ad.title = title;
    }
    if let Some(description) = update.description {
        ad.description = description;
    }
    if let Some(owner) = update.owner {
        ad.owner = owner;
    }
    if let Some(user_id) = update.user_id {
        ad.user_id = user_id;
    }
}
