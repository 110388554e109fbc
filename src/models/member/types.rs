use serde::Deserialize;

use crate::models::record::{null_as_default, RecordId};

/// Placeholder portrait for members without a photo.
pub const DEFAULT_PORTRAIT: &str =
    "https://images.pexels.com/photos/1704488/pexels-photo-1704488.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberCategory {
    Faculty,
    Student,
}

/// A row of the `members` collection.
#[derive(Debug, Clone, Deserialize)]
pub struct Member {
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_url: String,
    #[serde(rename = "type")]
    pub category: MemberCategory,
}

impl Member {
    pub fn portrait(&self) -> &str {
        if self.image_url.trim().is_empty() {
            DEFAULT_PORTRAIT
        } else {
            &self.image_url
        }
    }
}
