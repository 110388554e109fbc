pub mod club_settings;
pub mod event;
pub mod member;
pub mod record;
