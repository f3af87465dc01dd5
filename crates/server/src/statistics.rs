//! Statistics API endpoints

use api_types::stats::{StatsQuery, StatsView, StreakKind, StreakView};
use axum::{
    Json,
    extract::{Query, State},
};

use crate::server::ServerState;

fn streak_view(streak: engine::Streak) -> StreakView {
    StreakView {
        kind: match streak.kind {
            engine::StreakKind::Win => StreakKind::Win,
            engine::StreakKind::Loss => StreakKind::Loss,
        },
        count: streak.count,
    }
}

fn view(stats: engine::Statistics) -> StatsView {
    StatsView {
        total_sessions: stats.total_sessions,
        total_hours: stats.total_hours,
        net_profit: stats.net_profit,
        win_rate: stats.win_rate,
        hourly_rate: stats.hourly_rate,
        biggest_win: stats.biggest_win,
        biggest_loss: stats.biggest_loss,
        current_streak: streak_view(stats.current_streak),
        longest_win_streak: stats.longest_win_streak,
        longest_loss_streak: stats.longest_loss_streak,
    }
}

/// Handle requests for aggregate statistics over an optional date range.
pub async fn get_stats(
    State(state): State<ServerState>,
    Query(params): Query<StatsQuery>,
) -> Json<StatsView> {
    let engine = state.engine.read().await;
    Json(view(engine.statistics(params.date_from, params.date_to)))
}
