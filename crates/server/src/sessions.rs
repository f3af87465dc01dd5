//! Session API endpoints

use api_types::PageQuery;
use api_types::session::{SearchQuery, SessionNew, SessionUpdate, SessionView};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{ServerError, server::ServerState};

fn map_game_type(game_type: api_types::GameType) -> engine::GameType {
    match game_type {
        api_types::GameType::Cash => engine::GameType::Cash,
        api_types::GameType::Tournament => engine::GameType::Tournament,
        api_types::GameType::SitNGo => engine::GameType::SitNGo,
    }
}

fn game_type_view(game_type: engine::GameType) -> api_types::GameType {
    match game_type {
        engine::GameType::Cash => api_types::GameType::Cash,
        engine::GameType::Tournament => api_types::GameType::Tournament,
        engine::GameType::SitNGo => api_types::GameType::SitNGo,
    }
}

fn map_table_type(table_type: api_types::TableType) -> engine::TableType {
    match table_type {
        api_types::TableType::Live => engine::TableType::Live,
        api_types::TableType::Online => engine::TableType::Online,
        api_types::TableType::Home => engine::TableType::Home,
    }
}

fn table_type_view(table_type: engine::TableType) -> api_types::TableType {
    match table_type {
        engine::TableType::Live => api_types::TableType::Live,
        engine::TableType::Online => api_types::TableType::Online,
        engine::TableType::Home => api_types::TableType::Home,
    }
}

fn view(session: engine::Session) -> SessionView {
    SessionView {
        id: session.id,
        location: session.location,
        game_type: game_type_view(session.game_type),
        table_type: table_type_view(session.table_type),
        stakes: session.stakes,
        date: session.date,
        hours: session.hours,
        buy_in: session.buy_in,
        cash_out: session.cash_out,
        profit: session.profit,
        hourly_rate: session.hourly_rate,
        hands: session.hands,
        tags: session.tags,
        notes: session.notes,
        rating: session.rating,
        created_at: session.created_at,
    }
}

pub async fn list(
    State(state): State<ServerState>,
    Query(page): Query<PageQuery>,
) -> Json<Vec<SessionView>> {
    let limit = page.limit.unwrap_or(50);
    let offset = page.offset.unwrap_or(0);

    let engine = state.engine.read().await;
    Json(engine.sessions(limit, offset).into_iter().map(view).collect())
}

pub async fn search(
    State(state): State<ServerState>,
    Query(params): Query<SearchQuery>,
) -> Json<Vec<SessionView>> {
    let filter = engine::SessionFilter {
        location: params.location,
        game_type: params.game_type.map(map_game_type),
        table_type: params.table_type.map(map_table_type),
        date_from: params.date_from,
        date_to: params.date_to,
        result: params
            .result
            .filter(|value| !value.is_empty())
            .map(|value| match value.as_str() {
                "win" => engine::ResultFilter::Win,
                _ => engine::ResultFilter::Loss,
            }),
    };
    let query = params.q.unwrap_or_default();

    let engine = state.engine.read().await;
    Json(
        engine
            .search_sessions(&query, &filter)
            .into_iter()
            .map(view)
            .collect(),
    )
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, ServerError> {
    let engine = state.engine.read().await;
    let session = engine.session(id)?;

    Ok(Json(view(session)))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<SessionNew>,
) -> (StatusCode, Json<SessionView>) {
    let draft = engine::SessionDraft {
        location: payload.location,
        game_type: map_game_type(payload.game_type),
        table_type: map_table_type(payload.table_type),
        stakes: payload.stakes,
        date: payload.date,
        hours: payload.hours,
        buy_in: payload.buy_in,
        cash_out: payload.cash_out,
        hands: payload.hands,
        tags: payload.tags,
        notes: payload.notes,
        rating: payload.rating,
    };

    let mut engine = state.engine.write().await;
    let session = engine.new_session(draft);

    (StatusCode::CREATED, Json(view(session)))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SessionUpdate>,
) -> Result<Json<SessionView>, ServerError> {
    let patch = engine::SessionPatch {
        location: payload.location,
        game_type: payload.game_type.map(map_game_type),
        table_type: payload.table_type.map(map_table_type),
        stakes: payload.stakes,
        date: payload.date,
        hours: payload.hours,
        buy_in: payload.buy_in,
        cash_out: payload.cash_out,
        hands: payload.hands,
        tags: payload.tags,
        notes: payload.notes,
        rating: payload.rating,
    };

    let mut engine = state.engine.write().await;
    let session = engine.update_session(id, patch)?;

    Ok(Json(view(session)))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ServerError> {
    let mut engine = state.engine.write().await;
    engine.delete_session(id)?;

    Ok(StatusCode::NO_CONTENT)
}
