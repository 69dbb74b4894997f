use crate::{
    domain::{GameFilter, NewCalendarEvent, NewGame},
    ports::store::{Error, StorePort},
};
use chrono::Utc;

/// Seed demo records so a fresh install has something to show
///
/// Only touches tables that are still empty, so restarting the process does
/// not duplicate rows.
pub async fn seed_demo_data<S: StorePort>(store: &S) -> Result<(), Error> {
    if store.list_games(GameFilter::default()).await?.is_empty() {
        let games = [
            NewGame {
                title: "Catan".to_string(),
                category: "Strategy".to_string(),
                min_players: 3,
                max_players: 4,
                description: Some("Trade, build, and settle.".to_string()),
                image_url: Some(
                    "https://images.unsplash.com/photo-1610890716271-e2fe9d2b0951?auto=format&fit=crop&q=80&w=300"
                        .to_string(),
                ),
            },
            NewGame {
                title: "Dixit".to_string(),
                category: "Party".to_string(),
                min_players: 3,
                max_players: 6,
                description: Some("A picture is worth a thousand words.".to_string()),
                image_url: Some(
                    "https://images.unsplash.com/photo-1606167668584-78701c57f13d?auto=format&fit=crop&q=80&w=300"
                        .to_string(),
                ),
            },
            NewGame {
                title: "Ticket to Ride".to_string(),
                category: "Family".to_string(),
                min_players: 2,
                max_players: 5,
                description: Some("Cross-country train adventure.".to_string()),
                image_url: Some(
                    "https://images.unsplash.com/photo-1596727147705-06a532a65c27?auto=format&fit=crop&q=80&w=300"
                        .to_string(),
                ),
            },
        ];
        for new_game in games {
            store.create_game(new_game).await?;
        }
    }

    if store.list_events().await?.is_empty() {
        store
            .create_event(NewCalendarEvent {
                title: "Board Game Night".to_string(),
                date: Utc::now(),
                kind: "event".to_string(),
                description: Some("Weekly community gathering".to_string()),
            })
            .await?;
    }

    Ok(())
}
