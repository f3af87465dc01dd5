//! Bankroll transactions API endpoints

use api_types::PageQuery;
use api_types::bankroll::{BankrollKind as ApiKind, TransactionNew, TransactionView};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};

use crate::server::ServerState;

fn map_kind(kind: ApiKind) -> engine::BankrollKind {
    match kind {
        ApiKind::Session => engine::BankrollKind::Session,
        ApiKind::Deposit => engine::BankrollKind::Deposit,
        ApiKind::Withdrawal => engine::BankrollKind::Withdrawal,
    }
}

fn kind_view(kind: engine::BankrollKind) -> ApiKind {
    match kind {
        engine::BankrollKind::Session => ApiKind::Session,
        engine::BankrollKind::Deposit => ApiKind::Deposit,
        engine::BankrollKind::Withdrawal => ApiKind::Withdrawal,
    }
}

fn view(transaction: engine::BankrollTransaction) -> TransactionView {
    TransactionView {
        id: transaction.id,
        kind: kind_view(transaction.kind),
        amount: transaction.amount,
        description: transaction.description,
        session_id: transaction.session_id,
        date: transaction.date,
    }
}

pub async fn list(
    State(state): State<ServerState>,
    Query(page): Query<PageQuery>,
) -> Json<Vec<TransactionView>> {
    let limit = page.limit.unwrap_or(50);
    let offset = page.offset.unwrap_or(0);

    let engine = state.engine.read().await;
    Json(
        engine
            .transactions(limit, offset)
            .into_iter()
            .map(view)
            .collect(),
    )
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<TransactionNew>,
) -> (StatusCode, Json<TransactionView>) {
    let draft = engine::TransactionDraft {
        kind: map_kind(payload.kind),
        amount: payload.amount,
        description: payload.description,
        session_id: payload.session_id,
    };

    let mut engine = state.engine.write().await;
    let transaction = engine.new_transaction(draft);

    (StatusCode::CREATED, Json(view(transaction)))
}
