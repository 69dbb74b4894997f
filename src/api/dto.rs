//! Request payloads and their boundary validation
//!
//! Payloads deliberately accept loose input (missing fields default) so every
//! rejection goes through [`validate`](CreateGamePayload::validate) and comes
//! back as a 400 naming the offending field, instead of a framework-level
//! deserialization rejection.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::{NewCalendarEvent, NewGame, NewPlaySession};

use super::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct LookupPayload {
    /// Validated by the lookup gateway itself, not here
    #[serde(default)]
    pub mobile: String,
}

#[derive(Debug, Deserialize)]
pub struct GamesQuery {
    pub search: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGamePayload {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: String,
    pub min_players: Option<u32>,
    pub max_players: Option<u32>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl CreateGamePayload {
    pub fn validate(self) -> Result<NewGame, ApiError> {
        if self.title.trim().is_empty() {
            return Err(ApiError::Validation("title is required".to_string()));
        }
        if self.category.trim().is_empty() {
            return Err(ApiError::Validation("category is required".to_string()));
        }
        let min_players = self
            .min_players
            .ok_or_else(|| ApiError::Validation("minPlayers is required".to_string()))?;
        if min_players == 0 {
            return Err(ApiError::Validation(
                "minPlayers must be at least 1".to_string(),
            ));
        }
        let max_players = self
            .max_players
            .ok_or_else(|| ApiError::Validation("maxPlayers is required".to_string()))?;
        if max_players < min_players {
            return Err(ApiError::Validation(
                "maxPlayers must not be less than minPlayers".to_string(),
            ));
        }

        Ok(NewGame {
            title: self.title,
            category: self.category,
            min_players,
            max_players,
            description: self.description,
            image_url: self.image_url,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionPayload {
    pub date: Option<String>,
    #[serde(default)]
    pub branch: String,
    #[serde(default)]
    pub table_number: String,
    pub game_id: Option<Uuid>,
    #[serde(default)]
    pub guru_name: String,
    #[serde(default)]
    pub player_names: Vec<String>,
    pub notes: Option<String>,
}

impl CreateSessionPayload {
    pub fn validate(self) -> Result<NewPlaySession, ApiError> {
        let date = parse_date(self.date)?;
        if self.branch.trim().is_empty() {
            return Err(ApiError::Validation("branch is required".to_string()));
        }
        if self.table_number.trim().is_empty() {
            return Err(ApiError::Validation("tableNumber is required".to_string()));
        }
        if self.guru_name.trim().is_empty() {
            return Err(ApiError::Validation("guruName is required".to_string()));
        }

        Ok(NewPlaySession {
            date,
            branch: self.branch,
            table_number: self.table_number,
            game_id: self.game_id,
            guru_name: self.guru_name,
            player_names: self.player_names,
            notes: self.notes,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventPayload {
    #[serde(default)]
    pub title: String,
    pub date: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub description: Option<String>,
}

impl CreateEventPayload {
    pub fn validate(self) -> Result<NewCalendarEvent, ApiError> {
        if self.title.trim().is_empty() {
            return Err(ApiError::Validation("title is required".to_string()));
        }
        let date = parse_date(self.date)?;
        if self.kind.trim().is_empty() {
            return Err(ApiError::Validation("type is required".to_string()));
        }

        Ok(NewCalendarEvent {
            title: self.title,
            date,
            kind: self.kind,
            description: self.description,
        })
    }
}

fn parse_date(date: Option<String>) -> Result<DateTime<Utc>, ApiError> {
    let date = date.ok_or_else(|| ApiError::Validation("date is required".to_string()))?;
    DateTime::parse_from_rfc3339(&date)
        .map(|date| date.with_timezone(&Utc))
        .map_err(|_| ApiError::Validation("date must be a valid RFC 3339 timestamp".to_string()))
}
