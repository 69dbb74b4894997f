//! Server side of a board-game venue's admin dashboard
//!
//! A thin REST layer: a member-lookup gateway that proxies an external
//! membership webhook and classifies every possible upstream outcome, plus
//! list/create endpoints for the games library, the play-session log, and the
//! venue calendar. Persistence and the outbound call sit behind ports so the
//! domain logic can be exercised against doubles.

pub mod adapters;
pub mod api;
pub mod commands;
pub mod config;
pub mod domain;
pub mod ports;
pub mod seed;
