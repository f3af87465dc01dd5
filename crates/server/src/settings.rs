//! Settings API endpoints

use api_types::setting::{SettingPut, SettingView};
use axum::{
    Json,
    extract::{Path, State},
};

use crate::{ServerError, server::ServerState};

fn view(setting: engine::Setting) -> SettingView {
    SettingView {
        id: setting.id,
        key: setting.key,
        value: setting.value,
    }
}

pub async fn get(
    State(state): State<ServerState>,
    Path(key): Path<String>,
) -> Result<Json<SettingView>, ServerError> {
    let engine = state.engine.read().await;
    let setting = engine.setting(&key)?;

    Ok(Json(view(setting)))
}

/// Upsert a setting by key.
pub async fn put(
    State(state): State<ServerState>,
    Path(key): Path<String>,
    Json(payload): Json<SettingPut>,
) -> Json<SettingView> {
    let mut engine = state.engine.write().await;
    Json(view(engine.set_setting(&key, &payload.value)))
}
