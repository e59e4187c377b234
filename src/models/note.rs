use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored note record.
///
/// `id` and `created_at` are assigned once by the store and never change;
/// `updated_at` is refreshed on every successful edit. Timestamps serialize
/// as RFC 3339 strings and field names as camelCase on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub tags: Vec<String>,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
