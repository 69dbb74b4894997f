use crate::domain::{
    CalendarEvent, Game, GameFilter, NewCalendarEvent, NewGame, NewPlaySession, PlaySession,
};

#[mockall::automock]
#[async_trait::async_trait]
pub trait StorePort {
    async fn list_games(&self, filter: GameFilter) -> Result<Vec<Game>, Error>;
    async fn create_game(&self, new_game: NewGame) -> Result<Game, Error>;

    /// Sessions come back ordered by date, oldest first
    async fn list_sessions(&self) -> Result<Vec<PlaySession>, Error>;
    async fn create_session(&self, new_session: NewPlaySession) -> Result<PlaySession, Error>;

    /// Events come back ordered by date, oldest first
    async fn list_events(&self) -> Result<Vec<CalendarEvent>, Error>;
    async fn create_event(&self, new_event: NewCalendarEvent) -> Result<CalendarEvent, Error>;
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Concrete adapter errors
    ///
    /// This could represent any errors from a concrete adapter that is not
    /// part of the domain model, such as connectivity, configuration, or
    /// permission errors.
    #[error("adapter error: {0:?}")]
    Adapter(Box<dyn std::error::Error + Send + Sync>),
}
