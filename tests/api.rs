use httpmock::prelude::*;
use speculoos::prelude::*;
use std::{sync::Arc, time::Duration};
use venue_admin_service::{
    adapters::{membership::webhook::WebhookMembership, store::memory::MemoryStore},
    api::{router, AppState},
};

/// Start the service on an ephemeral port, wired to the given webhook URL
async fn spawn_app(webhook_url: &str) -> String {
    let store = Arc::new(MemoryStore::default());
    let membership = Arc::new(
        WebhookMembership::new(webhook_url.to_string(), Duration::from_secs(2)).unwrap(),
    );
    let app = router(AppState { store, membership });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

fn full_profile() -> serde_json::Value {
    serde_json::json!({
        "membershipSummary": { "total": 10, "used": 3, "balance": 7, "isExpired": false },
        "history": { "purchases": [], "activityLogs": [] }
    })
}

async fn message_of(response: reqwest::Response) -> String {
    let body: serde_json::Value = response.json().await.unwrap();
    body["message"].as_str().unwrap_or_default().to_string()
}

#[tokio::test]
async fn test_health() {
    let base = spawn_app("http://127.0.0.1:9/webhook").await;

    let response = reqwest::get(format!("{base}/api/health")).await.unwrap();

    assert_that!(response.status().as_u16()).is_equal_to(200);
}

#[tokio::test]
async fn test_lookup_found_passes_payload_through() {
    // GIVEN an upstream that knows the member
    let webhook = MockServer::start();
    let mock = webhook.mock(|when, then| {
        when.method(POST)
            .path("/webhook")
            .json_body(serde_json::json!({ "mobile": "0812345678" }));
        then.status(200).json_body(full_profile());
    });
    let base = spawn_app(&webhook.url("/webhook")).await;

    // WHEN looking up with a padded identifier
    let response = reqwest::Client::new()
        .post(format!("{base}/api/members/lookup"))
        .json(&serde_json::json!({ "mobile": "  0812345678  " }))
        .send()
        .await
        .unwrap();

    // THEN the upstream payload comes back verbatim, and the upstream saw the
    // trimmed identifier exactly once
    assert_that!(response.status().as_u16()).is_equal_to(200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_that!(body).is_equal_to(full_profile());
    mock.assert();
}

#[tokio::test]
async fn test_lookup_blank_identifier_never_reaches_upstream() {
    let webhook = MockServer::start();
    let mock = webhook.mock(|when, then| {
        when.method(POST).path("/webhook");
        then.status(200).json_body(full_profile());
    });
    let base = spawn_app(&webhook.url("/webhook")).await;
    let client = reqwest::Client::new();

    for payload in [
        serde_json::json!({ "mobile": "   " }),
        serde_json::json!({}),
    ] {
        let response = client
            .post(format!("{base}/api/members/lookup"))
            .json(&payload)
            .send()
            .await
            .unwrap();

        assert_that!(response.status().as_u16()).is_equal_to(400);
        assert_that!(message_of(response).await)
            .is_equal_to("Please enter a valid mobile number".to_string());
    }

    assert_that!(mock.hits()).is_equal_to(0);
}

#[tokio::test]
async fn test_lookup_empty_body_is_not_found() {
    let webhook = MockServer::start();
    webhook.mock(|when, then| {
        when.method(POST).path("/webhook");
        then.status(200).body("");
    });
    let base = spawn_app(&webhook.url("/webhook")).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/members/lookup"))
        .json(&serde_json::json!({ "mobile": "0812345678" }))
        .send()
        .await
        .unwrap();

    assert_that!(response.status().as_u16()).is_equal_to(404);
    assert_that!(message_of(response).await).is_equal_to(
        "No member found with that mobile number. Please check and try again.".to_string(),
    );
}

#[tokio::test]
async fn test_lookup_unparseable_body_is_bad_gateway() {
    let webhook = MockServer::start();
    webhook.mock(|when, then| {
        when.method(POST).path("/webhook");
        then.status(200).body("<html>maintenance</html>");
    });
    let base = spawn_app(&webhook.url("/webhook")).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/members/lookup"))
        .json(&serde_json::json!({ "mobile": "0812345678" }))
        .send()
        .await
        .unwrap();

    assert_that!(response.status().as_u16()).is_equal_to(502);
    assert_that!(message_of(response).await).is_equal_to(
        "The membership service returned an invalid response. Please try again later.".to_string(),
    );
}

#[tokio::test]
async fn test_lookup_missing_summary_is_not_found() {
    // Valid JSON, but not the membership shape
    let webhook = MockServer::start();
    webhook.mock(|when, then| {
        when.method(POST).path("/webhook");
        then.status(200)
            .json_body(serde_json::json!({ "unexpected": true }));
    });
    let base = spawn_app(&webhook.url("/webhook")).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/members/lookup"))
        .json(&serde_json::json!({ "mobile": "0812345678" }))
        .send()
        .await
        .unwrap();

    assert_that!(response.status().as_u16()).is_equal_to(404);
    assert_that!(message_of(response).await)
        .is_equal_to("No member found with that mobile number.".to_string());
}

#[tokio::test]
async fn test_lookup_upstream_error_names_the_status() {
    let webhook = MockServer::start();
    webhook.mock(|when, then| {
        when.method(POST).path("/webhook");
        then.status(503).body("Service Unavailable");
    });
    let base = spawn_app(&webhook.url("/webhook")).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/members/lookup"))
        .json(&serde_json::json!({ "mobile": "0812345678" }))
        .send()
        .await
        .unwrap();

    assert_that!(response.status().as_u16()).is_equal_to(502);
    assert_that!(message_of(response).await).contains("503");
}

#[tokio::test]
async fn test_lookup_transport_failure_is_internal() {
    // Nothing listens on the webhook port
    let base = spawn_app("http://127.0.0.1:9/webhook").await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/members/lookup"))
        .json(&serde_json::json!({ "mobile": "0812345678" }))
        .send()
        .await
        .unwrap();

    assert_that!(response.status().as_u16()).is_equal_to(500);
    assert_that!(message_of(response).await).contains("Unable to connect");
}

#[tokio::test]
async fn test_games_create_and_filtered_list() {
    let base = spawn_app("http://127.0.0.1:9/webhook").await;
    let client = reqwest::Client::new();

    // Create a game
    let response = client
        .post(format!("{base}/api/games"))
        .json(&serde_json::json!({
            "title": "Catan",
            "category": "Strategy",
            "minPlayers": 3,
            "maxPlayers": 4,
            "description": "Trade, build, and settle."
        }))
        .send()
        .await
        .unwrap();
    assert_that!(response.status().as_u16()).is_equal_to(201);
    let created: serde_json::Value = response.json().await.unwrap();
    assert_that!(created["id"].as_str()).is_some();
    assert_that!(created["minPlayers"].as_u64()).is_some().is_equal_to(3);

    // A matching substring filter returns it
    let games: serde_json::Value = client
        .get(format!("{base}/api/games?search=cat"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_that!(games.as_array().unwrap().len()).is_equal_to(1);

    // A non-matching category filter excludes it
    let games: serde_json::Value = client
        .get(format!("{base}/api/games?category=Party"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_that!(games.as_array().unwrap().len()).is_equal_to(0);

    // The "All" category is a wildcard
    let games: serde_json::Value = client
        .get(format!("{base}/api/games?category=All"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_that!(games.as_array().unwrap().len()).is_equal_to(1);
}

#[tokio::test]
async fn test_game_validation_rejects_bad_payloads() {
    let base = spawn_app("http://127.0.0.1:9/webhook").await;
    let client = reqwest::Client::new();

    for (payload, field) in [
        (serde_json::json!({ "category": "Strategy", "minPlayers": 2, "maxPlayers": 4 }), "title"),
        (serde_json::json!({ "title": "Catan", "category": "Strategy", "maxPlayers": 4 }), "minPlayers"),
        (serde_json::json!({ "title": "Catan", "category": "Strategy", "minPlayers": 4, "maxPlayers": 2 }), "maxPlayers"),
    ] {
        let response = client
            .post(format!("{base}/api/games"))
            .json(&payload)
            .send()
            .await
            .unwrap();

        assert_that!(response.status().as_u16()).is_equal_to(400);
        assert_that!(message_of(response).await).contains(field);
    }

    // Nothing was stored
    let games: serde_json::Value = client
        .get(format!("{base}/api/games"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_that!(games.as_array().unwrap().len()).is_equal_to(0);
}

#[tokio::test]
async fn test_sessions_create_and_date_ordered_list() {
    let base = spawn_app("http://127.0.0.1:9/webhook").await;
    let client = reqwest::Client::new();

    for (table, date) in [("T2", "2026-08-02T19:00:00Z"), ("T1", "2026-08-01T19:00:00Z")] {
        let response = client
            .post(format!("{base}/api/sessions"))
            .json(&serde_json::json!({
                "date": date,
                "branch": "Downtown",
                "tableNumber": table,
                "guruName": "Alex",
                "playerNames": ["Kim", "Sam"]
            }))
            .send()
            .await
            .unwrap();
        assert_that!(response.status().as_u16()).is_equal_to(201);
    }

    let sessions: serde_json::Value = client
        .get(format!("{base}/api/sessions"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let tables: Vec<_> = sessions
        .as_array()
        .unwrap()
        .iter()
        .map(|session| session["tableNumber"].as_str().unwrap().to_string())
        .collect();
    assert_that!(tables).is_equal_to(vec!["T1".to_string(), "T2".to_string()]);
}

#[tokio::test]
async fn test_events_create_and_date_ordered_list() {
    let base = spawn_app("http://127.0.0.1:9/webhook").await;
    let client = reqwest::Client::new();

    for (title, date) in [
        ("Tournament", "2026-09-01T10:00:00Z"),
        ("Board Game Night", "2026-08-07T18:00:00Z"),
    ] {
        let response = client
            .post(format!("{base}/api/events"))
            .json(&serde_json::json!({
                "title": title,
                "date": date,
                "type": "event",
                "description": "Weekly community gathering"
            }))
            .send()
            .await
            .unwrap();
        assert_that!(response.status().as_u16()).is_equal_to(201);
    }

    let events: serde_json::Value = client
        .get(format!("{base}/api/events"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let titles: Vec<_> = events
        .as_array()
        .unwrap()
        .iter()
        .map(|event| event["title"].as_str().unwrap().to_string())
        .collect();
    assert_that!(titles).is_equal_to(vec![
        "Board Game Night".to_string(),
        "Tournament".to_string(),
    ]);

    // Session/event validation shares the date rule
    let response = client
        .post(format!("{base}/api/events"))
        .json(&serde_json::json!({ "title": "Bad", "date": "next friday", "type": "event" }))
        .send()
        .await
        .unwrap();
    assert_that!(response.status().as_u16()).is_equal_to(400);
}
