use crate::{
    domain::{
        CalendarEvent, Game, GameFilter, NewCalendarEvent, NewGame, NewPlaySession, PlaySession,
    },
    ports::store::{Error, StorePort},
};
use std::sync::{Arc, Mutex, PoisonError};
use uuid::Uuid;

/// In-memory record store
///
/// Rows live for the lifetime of the process; ids are generated on insert.
#[derive(Clone, Debug)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

#[derive(Debug, Default)]
struct Tables {
    games: Vec<Game>,
    sessions: Vec<PlaySession>,
    events: Vec<CalendarEvent>,
}

#[async_trait::async_trait]
impl StorePort for MemoryStore {
    async fn list_games(&self, filter: GameFilter) -> Result<Vec<Game>, Error> {
        let games = self
            .tables
            .lock()?
            .games
            .iter()
            .filter(|game| filter.matches(game))
            .cloned()
            .collect();

        Ok(games)
    }

    async fn create_game(&self, new_game: NewGame) -> Result<Game, Error> {
        let game = Game {
            game_id: Uuid::new_v4(),
            title: new_game.title,
            category: new_game.category,
            min_players: new_game.min_players,
            max_players: new_game.max_players,
            description: new_game.description,
            image_url: new_game.image_url,
        };
        self.tables.lock()?.games.push(game.clone());

        Ok(game)
    }

    async fn list_sessions(&self) -> Result<Vec<PlaySession>, Error> {
        let mut sessions = self.tables.lock()?.sessions.clone();
        sessions.sort_by_key(|session| session.date);

        Ok(sessions)
    }

    async fn create_session(&self, new_session: NewPlaySession) -> Result<PlaySession, Error> {
        let session = PlaySession {
            session_id: Uuid::new_v4(),
            date: new_session.date,
            branch: new_session.branch,
            table_number: new_session.table_number,
            game_id: new_session.game_id,
            guru_name: new_session.guru_name,
            player_names: new_session.player_names,
            notes: new_session.notes,
        };
        self.tables.lock()?.sessions.push(session.clone());

        Ok(session)
    }

    async fn list_events(&self) -> Result<Vec<CalendarEvent>, Error> {
        let mut events = self.tables.lock()?.events.clone();
        events.sort_by_key(|event| event.date);

        Ok(events)
    }

    async fn create_event(&self, new_event: NewCalendarEvent) -> Result<CalendarEvent, Error> {
        let event = CalendarEvent {
            event_id: Uuid::new_v4(),
            title: new_event.title,
            date: new_event.date,
            kind: new_event.kind,
            description: new_event.description,
        };
        self.tables.lock()?.events.push(event.clone());

        Ok(event)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            tables: Arc::new(Mutex::new(Tables::default())),
        }
    }
}

/// Erased [`PoisonError`]
///
/// `PoisonError` keeps the `MutexGuard` internally, which is not send. Thus we
/// erase the error and only keep the string representation instead.
#[derive(Debug, thiserror::Error)]
#[error("poison error: {0}")]
pub struct ErasedPoisonError(String);

/// We need to create a custom `From` implementation here for an error that's
/// specific to this adapter.
impl<T> From<PoisonError<T>> for Error {
    fn from(err: PoisonError<T>) -> Self {
        Self::Adapter(Box::new(ErasedPoisonError(err.to_string())))
    }
}
