use serde::Serialize;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

/// Minute-precision rendering used for every `creation_time` sent to clients.
const CREATION_TIME_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]");

pub fn format_creation_time(ts: OffsetDateTime) -> Result<String, time::error::Format> {
    ts.format(CREATION_TIME_FORMAT)
}

/// Body for operations that only need to confirm an outcome.
#[derive(Debug, Serialize)]
pub struct Message {
    message: String,
}

impl Message {
    pub fn deleted(resource: &str) -> Self {
        Self {
            message: format!("{} deleted successfully", resource),
        }
    }
}

/// Confirmation body that also carries the id of the affected row.
#[derive(Debug, Serialize)]
pub struct MessageId {
    message: String,
    id: i64,
}

impl MessageId {
    pub fn created(resource: &str, id: i64) -> Self {
        Self {
            message: format!("{} created successfully", resource),
            id,
        }
    }

    pub fn updated(resource: &str, id: i64) -> Self {
        Self {
            message: format!("{} updated successfully", resource),
            id,
        }
    }
}
