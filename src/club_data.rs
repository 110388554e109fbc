//! The shared fetch cycle behind every listing page.
//!
//! A page request runs [`load`] once: events, then members, then the
//! settings row, in sequence. The first failure ends the cycle and the
//! whole bundle is reported as failed, even if earlier queries succeeded.

use log::error;

use crate::models::club_settings::{self, ClubSettings};
use crate::models::event::{self, Event};
use crate::models::member::{self, Member};
use crate::supabase::RecordSource;

/// Per-page load state. `Loading` is the only non-terminal state.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Ready(T),
    Error(String),
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Loading
    }
}

impl<T> ViewState<T> {
    /// Settle a `Loading` state with the outcome of a fetch. Settled states
    /// ignore later outcomes.
    pub fn resolve<E: std::fmt::Display>(self, outcome: Result<T, E>) -> Self {
        match self {
            ViewState::Loading => match outcome {
                Ok(value) => ViewState::Ready(value),
                Err(e) => ViewState::Error(e.to_string()),
            },
            settled => settled,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            ViewState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Everything the listing pages draw from.
#[derive(Debug, Clone, Default)]
pub struct ClubData {
    /// Oldest first, as the backend returns them.
    pub events: Vec<Event>,
    /// Alphabetical by name.
    pub members: Vec<Member>,
    pub settings: ClubSettings,
}

async fn fetch_bundle<S: RecordSource>(source: &S) -> crate::supabase::Result<ClubData> {
    let events = event::find_all(source).await?;
    let members = member::find_all(source).await?;
    let settings = club_settings::find(source).await?;
    Ok(ClubData { events, members, settings })
}

/// Run the fetch cycle once.
pub async fn load<S: RecordSource>(source: &S) -> ViewState<ClubData> {
    let outcome = fetch_bundle(source).await;
    if let Err(e) = &outcome {
        error!("Error fetching data: {e}");
    }
    ViewState::default().resolve(outcome)
}
