use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use tower::{Service, ServiceExt};

use crate::{
    commands::{lookup_member::LookupMemberRequest, DomainLogic},
    domain::{CalendarEvent, Game, GameFilter, PlaySession},
    ports::{membership::MembershipPort, store::StorePort},
};

use super::{
    dto::{
        CreateEventPayload, CreateGamePayload, CreateSessionPayload, GamesQuery, LookupPayload,
    },
    error::ApiError,
    AppState,
};

pub(super) async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Proxy a member identifier to the membership service
///
/// The gateway command does validation and outcome classification; on success
/// the upstream payload is returned to the caller untouched.
pub(super) async fn lookup_member<S, M>(
    State(state): State<AppState<S, M>>,
    Json(payload): Json<LookupPayload>,
) -> Result<Json<serde_json::Value>, ApiError>
where
    S: StorePort + Send + Sync + 'static,
    M: MembershipPort + Send + Sync + 'static,
{
    let mut domain = DomainLogic::new(state.membership.clone());
    let res = domain
        .ready()
        .await?
        .call(LookupMemberRequest {
            mobile: payload.mobile,
        })
        .await?;

    Ok(Json(res.profile))
}

pub(super) async fn list_games<S, M>(
    State(state): State<AppState<S, M>>,
    Query(query): Query<GamesQuery>,
) -> Result<Json<Vec<Game>>, ApiError>
where
    S: StorePort + Send + Sync + 'static,
    M: MembershipPort + Send + Sync + 'static,
{
    let filter = GameFilter::new(query.search, query.category);
    let games = state.store.list_games(filter).await?;

    Ok(Json(games))
}

pub(super) async fn create_game<S, M>(
    State(state): State<AppState<S, M>>,
    Json(payload): Json<CreateGamePayload>,
) -> Result<(StatusCode, Json<Game>), ApiError>
where
    S: StorePort + Send + Sync + 'static,
    M: MembershipPort + Send + Sync + 'static,
{
    let new_game = payload.validate()?;
    let game = state.store.create_game(new_game).await?;

    Ok((StatusCode::CREATED, Json(game)))
}

pub(super) async fn list_sessions<S, M>(
    State(state): State<AppState<S, M>>,
) -> Result<Json<Vec<PlaySession>>, ApiError>
where
    S: StorePort + Send + Sync + 'static,
    M: MembershipPort + Send + Sync + 'static,
{
    let sessions = state.store.list_sessions().await?;

    Ok(Json(sessions))
}

pub(super) async fn create_session<S, M>(
    State(state): State<AppState<S, M>>,
    Json(payload): Json<CreateSessionPayload>,
) -> Result<(StatusCode, Json<PlaySession>), ApiError>
where
    S: StorePort + Send + Sync + 'static,
    M: MembershipPort + Send + Sync + 'static,
{
    let new_session = payload.validate()?;
    let session = state.store.create_session(new_session).await?;

    Ok((StatusCode::CREATED, Json(session)))
}

pub(super) async fn list_events<S, M>(
    State(state): State<AppState<S, M>>,
) -> Result<Json<Vec<CalendarEvent>>, ApiError>
where
    S: StorePort + Send + Sync + 'static,
    M: MembershipPort + Send + Sync + 'static,
{
    let events = state.store.list_events().await?;

    Ok(Json(events))
}

pub(super) async fn create_event<S, M>(
    State(state): State<AppState<S, M>>,
    Json(payload): Json<CreateEventPayload>,
) -> Result<(StatusCode, Json<CalendarEvent>), ApiError>
where
    S: StorePort + Send + Sync + 'static,
    M: MembershipPort + Send + Sync + 'static,
{
    let new_event = payload.validate()?;
    let event = state.store.create_event(new_event).await?;

    Ok((StatusCode::CREATED, Json(event)))
}
