use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;

use serde::Serialize;
pub use server::{app, run, run_with_listener, spawn_with_listener};

mod bankroll;
mod server;
mod sessions;
mod settings;
mod statistics;

pub mod types {
    pub mod session {
        pub use api_types::PageQuery;
        pub use api_types::session::{
            SearchQuery, SessionNew, SessionUpdate, SessionView,
        };
    }

    pub mod bankroll {
        pub use api_types::bankroll::{BankrollKind, TransactionNew, TransactionView};
    }

    pub mod setting {
        pub use api_types::setting::{SettingPut, SettingView};
    }

    pub mod stats {
        pub use api_types::stats::{StatsQuery, StatsView, StreakKind, StreakView};
    }
}

pub enum ServerError {
    Engine(EngineError),
    Generic(String),
}

#[derive(Serialize)]
struct Error {
    error: String,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::KeyNotFound(_) => StatusCode::NOT_FOUND,
        EngineError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Engine(err) => (status_for_engine_error(&err), err.to_string()),
            ServerError::Generic(err) => (StatusCode::BAD_REQUEST, err),
        };

        (status, Json(Error { error })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}
