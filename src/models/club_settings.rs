use serde::Deserialize;

use crate::supabase::{self, Query, RecordSource, Result};

pub const COLLECTION: &str = "club_settings";

/// The single `club_settings` row, flat as stored.
#[derive(Debug, Deserialize)]
struct SettingsRow {
    join_form_link: Option<String>,
    contact_email: Option<String>,
    phone_number: Option<String>,
    social_media_facebook: Option<String>,
    social_media_instagram: Option<String>,
    social_media_linkedin: Option<String>,
    social_media_whatsapp: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialLinks {
    pub facebook: String,
    pub instagram: String,
    pub linkedin: String,
    pub whatsapp: String,
}

/// Contact and join details. Every field is always present; a missing row
/// or `NULL` column reads as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClubSettings {
    pub join_form_link: String,
    pub contact_email: String,
    pub phone_number: String,
    pub social_media: SocialLinks,
}

impl From<SettingsRow> for ClubSettings {
    fn from(row: SettingsRow) -> Self {
        ClubSettings {
            join_form_link: row.join_form_link.unwrap_or_default(),
            contact_email: row.contact_email.unwrap_or_default(),
            phone_number: row.phone_number.unwrap_or_default(),
            social_media: SocialLinks {
                facebook: row.social_media_facebook.unwrap_or_default(),
                instagram: row.social_media_instagram.unwrap_or_default(),
                linkedin: row.social_media_linkedin.unwrap_or_default(),
                whatsapp: row.social_media_whatsapp.unwrap_or_default(),
            },
        }
    }
}

pub fn settings_query() -> Query {
    Query::table(COLLECTION).single()
}

/// Load the settings row, defaulting every field when the row is absent.
pub async fn find<S: RecordSource>(source: &S) -> Result<ClubSettings> {
    let row: Option<SettingsRow> = supabase::fetch_optional(source, &settings_query()).await?;
    Ok(row.map(ClubSettings::from).unwrap_or_default())
}
