pub mod club_data;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod site;
pub mod supabase;
pub mod templates_structs;

/// The record source every page handler reads through.
pub type Backend = supabase::CachedSource<supabase::SupabaseClient>;

/// Wire up the backend client described by `config`.
pub fn build_backend(config: &config::AppConfig) -> reqwest::Result<Backend> {
    let client = supabase::SupabaseClient::new(
        &config.supabase_url,
        &config.supabase_anon_key,
        config.request_timeout,
    )?;
    Ok(supabase::CachedSource::new(client, config.cache_ttl))
}
