use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::ports::{membership::MembershipPort, store::StorePort};

pub mod dto;
pub mod error;
mod handlers;

/// Shared handles for request handlers
///
/// Both ports are injected at construction time; handlers never reach for
/// process-global state.
pub struct AppState<S, M> {
    pub store: Arc<S>,
    pub membership: Arc<M>,
}

// Manual impl so `S` and `M` don't need to be `Clone` themselves
impl<S, M> Clone for AppState<S, M> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            membership: self.membership.clone(),
        }
    }
}

pub fn router<S, M>(state: AppState<S, M>) -> Router
where
    S: StorePort + Send + Sync + 'static,
    M: MembershipPort + Send + Sync + 'static,
{
    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/members/lookup", post(handlers::lookup_member::<S, M>))
        .route(
            "/api/games",
            get(handlers::list_games::<S, M>).post(handlers::create_game::<S, M>),
        )
        .route(
            "/api/sessions",
            get(handlers::list_sessions::<S, M>).post(handlers::create_session::<S, M>),
        )
        .route(
            "/api/events",
            get(handlers::list_events::<S, M>).post(handlers::create_event::<S, M>),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}
