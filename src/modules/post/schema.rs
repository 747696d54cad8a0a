use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
}

impl MediaType {
    /// Classifies an already whitelisted MIME type.
    pub fn from_mime(mime_type: &str) -> Self {
        if mime_type.starts_with("video") {
            MediaType::Video
        } else {
            MediaType::Image
        }
    }
}

/// Post record as persisted in `posts.json` and returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostEntity {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub actor_category: String,
    pub cinema_region: String,
    pub media_path: String,
    pub media_type: MediaType,
    pub original_file_name: String,
    #[serde(with = "created_at_format")]
    pub created_at: DateTime<Utc>,
}

mod created_at_format {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
