use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use engine::Engine;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    server::app(Engine::new())
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

fn get(path: &str) -> Request<Body> {
    Request::builder().uri(path).body(Body::empty()).unwrap()
}

fn with_json(method: &str, path: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn session_payload(location: &str, date: &str, buy_in: f64, cash_out: f64) -> Value {
    json!({
        "location": location,
        "gameType": "cash",
        "tableType": "live",
        "stakes": "2/5",
        "date": date,
        "hours": 5.0,
        "buyIn": buy_in,
        "cashOut": cash_out,
        "tags": ["test"]
    })
}

#[tokio::test]
async fn create_session_derives_fields() {
    let app = app();

    let payload = session_payload("Bellagio", "2025-03-01T19:00:00Z", 500.0, 800.0);
    let (status, body) = send(&app, with_json("POST", "/api/sessions", &payload)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["profit"], json!(300.0));
    assert_eq!(body["hourlyRate"], json!(60.0));
    assert!(body["id"].is_string());
}

#[tokio::test]
async fn created_session_can_be_fetched() {
    let app = app();

    let payload = session_payload("Bellagio", "2025-03-01T19:00:00Z", 500.0, 800.0);
    let (_, created) = send(&app, with_json("POST", "/api/sessions", &payload)).await;
    let id = created["id"].as_str().unwrap().to_string();

    let (status, body) = send(&app, get(&format!("/api/sessions/{id}"))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["location"], json!("Bellagio"));
}

#[tokio::test]
async fn unknown_session_is_404() {
    let app = app();

    let (status, _) = send(
        &app,
        get("/api/sessions/00000000-0000-0000-0000-000000000000"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_game_type_is_rejected() {
    let app = app();

    let mut payload = session_payload("Bellagio", "2025-03-01T19:00:00Z", 500.0, 800.0);
    payload["gameType"] = json!("blackjack");
    let (status, _) = send(&app, with_json("POST", "/api/sessions", &payload)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn update_recomputes_profit() {
    let app = app();

    let payload = session_payload("Aria", "2025-03-01T19:00:00Z", 500.0, 800.0);
    let (_, created) = send(&app, with_json("POST", "/api/sessions", &payload)).await;
    let id = created["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        with_json(
            "PUT",
            &format!("/api/sessions/{id}"),
            &json!({"cashOut": 400.0}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["profit"], json!(-100.0));
}

#[tokio::test]
async fn delete_session_then_404() {
    let app = app();

    let payload = session_payload("Aria", "2025-03-01T19:00:00Z", 500.0, 800.0);
    let (_, created) = send(&app, with_json("POST", "/api/sessions", &payload)).await;
    let id = created["id"].as_str().unwrap().to_string();

    let delete = Request::builder()
        .method("DELETE")
        .uri(format!("/api/sessions/{id}"))
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, delete).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, get(&format!("/api/sessions/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn session_create_posts_bankroll_entry() {
    let app = app();

    let payload = session_payload("Bellagio", "2025-03-01T19:00:00Z", 500.0, 800.0);
    send(&app, with_json("POST", "/api/sessions", &payload)).await;

    let (status, body) = send(&app, get("/api/bankroll/transactions")).await;

    assert_eq!(status, StatusCode::OK);
    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["type"], json!("session"));
    assert_eq!(entries[0]["amount"], json!(300.0));
    assert_eq!(entries[0]["description"], json!("cash session at Bellagio"));
}

#[tokio::test]
async fn manual_transaction_is_created() {
    let app = app();

    let (status, body) = send(
        &app,
        with_json(
            "POST",
            "/api/bankroll/transactions",
            &json!({"type": "deposit", "amount": 1000.0, "description": "top up"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["type"], json!("deposit"));
    assert_eq!(body["sessionId"], Value::Null);
    assert!(body["date"].is_string());
}

#[tokio::test]
async fn settings_default_and_upsert() {
    let app = app();

    let (status, body) = send(&app, get("/api/settings/bankroll")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["value"], json!("15000"));

    let (status, _) = send(
        &app,
        with_json("PUT", "/api/settings/bankroll", &json!({"value": "20000"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, get("/api/settings/bankroll")).await;
    assert_eq!(body["value"], json!("20000"));
}

#[tokio::test]
async fn unknown_setting_is_404() {
    let app = app();

    let (status, _) = send(&app, get("/api/settings/tableImage")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn stats_on_empty_store_are_zeroed() {
    let app = app();

    let (status, body) = send(&app, get("/api/stats")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalSessions"], json!(0));
    assert_eq!(body["winRate"], json!(0.0));
    assert_eq!(body["currentStreak"], json!({"type": "win", "count": 0}));
}

#[tokio::test]
async fn stats_respect_date_range() {
    let app = app();

    let win = session_payload("Bellagio", "2025-03-01T19:00:00Z", 500.0, 600.0);
    send(&app, with_json("POST", "/api/sessions", &win)).await;
    let loss = session_payload("Aria", "2025-03-02T19:00:00Z", 500.0, 450.0);
    send(&app, with_json("POST", "/api/sessions", &loss)).await;

    let (status, body) = send(&app, get("/api/stats?dateFrom=2025-03-02T00:00:00Z")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalSessions"], json!(1));
    assert_eq!(body["netProfit"], json!(-50.0));
}

#[tokio::test]
async fn search_filters_are_conjunctive() {
    let app = app();

    let win = session_payload("Bellagio", "2025-03-01T19:00:00Z", 500.0, 800.0);
    send(&app, with_json("POST", "/api/sessions", &win)).await;
    let mut tournament = session_payload("PokerStars", "2025-03-02T19:00:00Z", 55.0, 0.0);
    tournament["gameType"] = json!("tournament");
    tournament["tableType"] = json!("online");
    send(&app, with_json("POST", "/api/sessions", &tournament)).await;

    let (status, body) = send(&app, get("/api/sessions/search?gameType=cash&result=win")).await;

    assert_eq!(status, StatusCode::OK);
    let found = body.as_array().unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["location"], json!("Bellagio"));
}

#[tokio::test]
async fn list_is_paged_newest_first() {
    let app = app();

    for (location, date) in [
        ("first", "2025-03-01T19:00:00Z"),
        ("second", "2025-03-02T19:00:00Z"),
        ("third", "2025-03-03T19:00:00Z"),
    ] {
        let payload = session_payload(location, date, 100.0, 150.0);
        send(&app, with_json("POST", "/api/sessions", &payload)).await;
    }

    let (status, body) = send(&app, get("/api/sessions?limit=1&offset=1")).await;

    assert_eq!(status, StatusCode::OK);
    let page = body.as_array().unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0]["location"], json!("second"));
}
