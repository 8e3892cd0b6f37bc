use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::response::format_creation_time;

use super::repo::Advertisement;

/// Request body for creating an advertisement. Every key must be present and
/// nothing else is accepted; `user_id` may be `null` for an unattached ad.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateAdvertisement {
    pub title: String,
    pub description: String,
    pub owner: String,
    #[serde(deserialize_with = "Option::deserialize")]
    pub user_id: Option<i64>,
}

/// Request body for partially updating an advertisement. Absent fields stay
/// untouched; an explicit `"user_id": null` detaches the ad from its user.
#[derive(Debug, Deserialize)]
pub struct UpdateAdvertisement {
    pub title: Option<String>,
    pub description: Option<String>,
    pub owner: Option<String>,
    #[serde(default, deserialize_with = "crate::extractors::double_option")]
    pub user_id: Option<Option<i64>>,
}

/// Public part of the advertisement returned to the client.
#[derive(Debug, Serialize)]
pub struct AdvertisementOut {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub owner: String,
    pub creation_time: String,
}

impl AdvertisementOut {
    pub fn from_row(ad: Advertisement) -> Result<Self, ApiError> {
        Ok(Self {
            id: ad.id,
            title: ad.title,
            description: ad.description,
            owner: ad.owner,
            creation_time: format_creation_time(ad.creation_time)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use time::macros::datetime;

    #[test]
    fn create_advertisement_accepts_a_null_user_id() {
        let body: CreateAdvertisement = serde_json::from_str(
            r#"{"title": "Bike", "description": "Blue bike", "owner": "alice", "user_id": null}"#,
        )
        .unwrap();
        assert_eq!(body.title, "Bike");
        assert!(body.user_id.is_none());
    }

    #[test]
    fn create_advertisement_requires_every_key() {
        assert!(serde_json::from_str::<CreateAdvertisement>(
            r#"{"title": "Bike", "owner": "a", "user_id": null}"#
        )
        .is_err());
        assert!(serde_json::from_str::<CreateAdvertisement>(
            r#"{"title": "Bike", "description": "Blue bike", "owner": "a"}"#
        )
        .is_err());
    }

    #[test]
    fn create_advertisement_rejects_unknown_keys() {
        let body = r#"{"title": "Bike", "description": "Blue bike", "owner": "a",
                       "user_id": null, "price": 100}"#;
        assert!(serde_json::from_str::<CreateAdvertisement>(body).is_err());
    }

    #[test]
    fn update_advertisement_ignores_unknown_keys() {
        let body: UpdateAdvertisement =
            serde_json::from_str(r#"{"price": 100, "title": "Car"}"#).unwrap();
        assert_eq!(body.title.as_deref(), Some("Car"));
        assert!(body.description.is_none());
        assert!(body.owner.is_none());
        assert!(body.user_id.is_none());
    }

    #[test]
    fn update_advertisement_tells_a_null_user_id_from_an_absent_one() {
        let absent: UpdateAdvertisement = serde_json::from_str(r#"{"title": "Car"}"#).unwrap();
        assert_eq!(absent.user_id, None);

        let detached: UpdateAdvertisement = serde_json::from_str(r#"{"user_id": null}"#).unwrap();
        assert_eq!(detached.user_id, Some(None));

        let attached: UpdateAdvertisement = serde_json::from_str(r#"{"user_id": 7}"#).unwrap();
        assert_eq!(attached.user_id, Some(Some(7)));
    }

    #[test]
    fn advertisement_out_omits_the_owning_user_id() {
        let ad = Advertisement {
            id: 2,
            title: "Bike".into(),
            description: "Blue bike".into(),
            owner: "alice".into(),
            creation_time: datetime!(2024-03-07 09:05:42 UTC),
            user_id: Some(1),
        };
        let body = serde_json::to_value(AdvertisementOut::from_row(ad).unwrap()).unwrap();
        assert_eq!(
            body,
            json!({
                "id": 2,
                "title": "Bike",
                "description": "Blue bike",
                "owner": "alice",
                "creation_time": "2024-03-07 09:05"
            })
        );
    }
}
