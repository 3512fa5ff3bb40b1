use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub sender_name: Option<String>,
    #[serde(default)]
    pub chat_id: Option<String>,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub is_persistent: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Notification {
    pub fn is_chat(&self) -> bool {
        self.kind.as_deref() == Some("chat")
    }
}

/// Envelope used by `GET /notifications`.
#[derive(Debug, Deserialize)]
pub struct NotificationList {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub data: Vec<Notification>,
}

/// Realtime events pushed to a subscribed user.
#[derive(Debug, Clone, PartialEq)]
pub enum NotificationEvent {
    Created(Notification),
    Deleted { id: String },
}
