use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A game in the venue's library
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    /// Unique identifier for the `Game`
    #[serde(rename = "id")]
    pub game_id: Uuid,
    pub title: String,
    /// Shelf category, e.g. `Strategy` or `Party`
    pub category: String,
    pub min_players: u32,
    pub max_players: u32,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// Fields required to add a game to the library
#[derive(Clone, Debug)]
pub struct NewGame {
    pub title: String,
    pub category: String,
    pub min_players: u32,
    pub max_players: u32,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// A logged play session at one of the venue's tables
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaySession {
    #[serde(rename = "id")]
    pub session_id: Uuid,
    /// Combined date and time of the session
    pub date: DateTime<Utc>,
    pub branch: String,
    pub table_number: String,
    /// Optional reference into the games library; ad-hoc games have none
    pub game_id: Option<Uuid>,
    /// The staff member ("guru") who hosted the table
    pub guru_name: String,
    pub player_names: Vec<String>,
    pub notes: Option<String>,
}

/// Fields required to log a play session
#[derive(Clone, Debug)]
pub struct NewPlaySession {
    pub date: DateTime<Utc>,
    pub branch: String,
    pub table_number: String,
    pub game_id: Option<Uuid>,
    pub guru_name: String,
    pub player_names: Vec<String>,
    pub notes: Option<String>,
}

/// An entry on the venue calendar
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    #[serde(rename = "id")]
    pub event_id: Uuid,
    pub title: String,
    pub date: DateTime<Utc>,
    /// Display category, e.g. `meeting`, `event`, `deadline`
    #[serde(rename = "type")]
    pub kind: String,
    pub description: Option<String>,
}

/// Fields required to create a calendar entry
#[derive(Clone, Debug)]
pub struct NewCalendarEvent {
    pub title: String,
    pub date: DateTime<Utc>,
    pub kind: String,
    pub description: Option<String>,
}

/// Filter for listing games
///
/// Both criteria are optional and combined with AND when present.
#[derive(Clone, Debug, Default)]
pub struct GameFilter {
    /// Case-insensitive substring match on the title
    pub search: Option<String>,
    /// Exact match on the category
    pub category: Option<String>,
}

impl GameFilter {
    /// Build a filter from raw query values
    ///
    /// Empty strings disable the criterion, and the category `All` is the
    /// frontend's "every category" sentinel rather than a real category.
    pub fn new(search: Option<String>, category: Option<String>) -> Self {
        Self {
            search: search.filter(|s| !s.trim().is_empty()),
            category: category.filter(|c| !c.trim().is_empty() && c != "All"),
        }
    }

    pub fn matches(&self, game: &Game) -> bool {
        let title_matches = self.search.as_ref().map_or(true, |needle| {
            game.title.to_lowercase().contains(&needle.to_lowercase())
        });
        let category_matches = self
            .category
            .as_ref()
            .map_or(true, |category| &game.category == category);

        title_matches && category_matches
    }
}
