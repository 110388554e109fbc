// Template context structures for Askama templates, one file per page family.

mod cards;
mod events;
mod pages;

pub use cards::*;
pub use events::*;
pub use pages::*;

use chrono::Datelike;

use crate::models::club_settings::ClubSettings;
use crate::site;

pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub active: bool,
}

/// Contact details as links: `#` for missing targets, `N/A` for missing labels.
pub struct ContactLinks {
    pub email: String,
    pub email_href: String,
    pub phone: String,
    pub phone_href: String,
    pub whatsapp_href: String,
    pub instagram_href: String,
    pub linkedin_href: String,
}

fn link_or_hash(value: &str) -> String {
    if value.trim().is_empty() {
        "#".to_string()
    } else {
        value.to_string()
    }
}

fn label_or_na(value: &str) -> String {
    if value.trim().is_empty() {
        "N/A".to_string()
    } else {
        value.to_string()
    }
}

impl From<&ClubSettings> for ContactLinks {
    fn from(s: &ClubSettings) -> Self {
        let prefixed = |scheme: &str, value: &str| {
            if value.trim().is_empty() {
                "#".to_string()
            } else {
                format!("{scheme}:{value}")
            }
        };
        ContactLinks {
            email: label_or_na(&s.contact_email),
            email_href: prefixed("mailto", &s.contact_email),
            phone: label_or_na(&s.phone_number),
            phone_href: prefixed("tel", &s.phone_number),
            whatsapp_href: link_or_hash(&s.social_media.whatsapp),
            instagram_href: link_or_hash(&s.social_media.instagram),
            linkedin_href: link_or_hash(&s.social_media.linkedin),
        }
    }
}

/// A status line shown in place of page content.
pub struct Notice {
    pub text: String,
    pub is_error: bool,
}

impl Notice {
    pub fn loading(text: &str) -> Self {
        Notice { text: text.to_string(), is_error: false }
    }

    pub fn error(message: &str) -> Self {
        Notice { text: format!("Error: {message}"), is_error: true }
    }
}

/// Layout data shared by every page: navigation and footer.
/// Templates access these as `ctx.nav`, `ctx.contact`, etc.
pub struct PageContext {
    pub site_name: &'static str,
    pub copyright_holder: &'static str,
    pub nav: Vec<NavLink>,
    pub quick_links: Vec<NavLink>,
    /// `None` renders the minimal footer.
    pub contact: Option<ContactLinks>,
    pub year: i32,
}

impl PageContext {
    pub fn build(current_path: &str, settings: Option<&ClubSettings>) -> Self {
        let nav = site::NAV
            .iter()
            .map(|entry| NavLink {
                label: entry.label,
                href: entry.path,
                active: entry.path == current_path,
            })
            .collect();
        let quick_links = site::NAV
            .iter()
            .map(|entry| NavLink {
                label: entry.footer_label,
                href: entry.path,
                active: false,
            })
            .collect();
        Self {
            site_name: site::CLUB_NAME,
            copyright_holder: site::COPYRIGHT_HOLDER,
            nav,
            quick_links,
            contact: settings.map(ContactLinks::from),
            year: chrono::Local::now().year(),
        }
    }
}
