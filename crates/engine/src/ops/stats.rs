//! Aggregate statistics over the session history.
//!
//! Streaks come from two deliberately separate passes over the
//! chronologically sorted set: the current streak walks backward from the
//! most recent session and stops at the first sign change, while the
//! longest streaks come from a full forward scan accumulating run maxima.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Engine, Session};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakKind {
    Win,
    Loss,
}

/// A run of consecutive sessions sharing the same win/loss sign.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    pub kind: StreakKind,
    pub count: usize,
}

/// Aggregates over a date-restricted session set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_sessions: usize,
    pub total_hours: f64,
    pub net_profit: f64,
    /// Percentage of sessions with profit > 0. Break-even counts as a loss.
    pub win_rate: f64,
    pub hourly_rate: f64,
    /// Max profit across the set, 0 when empty. An empty set is therefore
    /// indistinguishable from a break-even best; known edge case, kept.
    pub biggest_win: f64,
    pub biggest_loss: f64,
    pub current_streak: Streak,
    pub longest_win_streak: usize,
    pub longest_loss_streak: usize,
}

fn won(session: &Session) -> bool {
    session.profit > 0.0
}

/// Walk backward from the most recent session while consecutive sessions
/// share its win/loss sign, stopping at the first change.
fn current_streak(chronological: &[Session]) -> Streak {
    let Some(latest) = chronological.last() else {
        return Streak {
            kind: StreakKind::Win,
            count: 0,
        };
    };

    let kind = if won(latest) {
        StreakKind::Win
    } else {
        StreakKind::Loss
    };
    let count = chronological
        .iter()
        .rev()
        .take_while(|session| won(session) == won(latest))
        .count();

    Streak { kind, count }
}

/// Full forward scan over the chronological set, tracking the longest win
/// run and the longest loss run independently.
fn longest_streaks(chronological: &[Session]) -> (usize, usize) {
    let mut longest_win = 0;
    let mut longest_loss = 0;
    let mut win_run = 0;
    let mut loss_run = 0;

    for session in chronological {
        if won(session) {
            win_run += 1;
            loss_run = 0;
            longest_win = longest_win.max(win_run);
        } else {
            loss_run += 1;
            win_run = 0;
            longest_loss = longest_loss.max(loss_run);
        }
    }

    (longest_win, longest_loss)
}

impl Engine {
    /// Compute aggregates over sessions whose date falls within the
    /// inclusive range. Either bound may be absent.
    pub fn statistics(
        &self,
        date_from: Option<DateTime<Utc>>,
        date_to: Option<DateTime<Utc>>,
    ) -> Statistics {
        let mut sessions: Vec<Session> = self
            .sessions
            .values()
            .filter(|session| date_from.is_none_or(|from| session.date >= from))
            .filter(|session| date_to.is_none_or(|to| session.date <= to))
            .cloned()
            .collect();
        sessions.sort_by(|a, b| a.date.cmp(&b.date));

        let total_sessions = sessions.len();
        let total_hours: f64 = sessions.iter().map(|session| session.hours).sum();
        let net_profit: f64 = sessions.iter().map(|session| session.profit).sum();
        let wins = sessions.iter().filter(|session| won(session)).count();
        let win_rate = if total_sessions > 0 {
            wins as f64 / total_sessions as f64 * 100.0
        } else {
            0.0
        };
        let hourly_rate = if total_hours > 0.0 {
            net_profit / total_hours
        } else {
            0.0
        };
        let biggest_win = sessions
            .iter()
            .map(|session| session.profit)
            .reduce(f64::max)
            .unwrap_or(0.0);
        let biggest_loss = sessions
            .iter()
            .map(|session| session.profit)
            .reduce(f64::min)
            .unwrap_or(0.0);
        let (longest_win_streak, longest_loss_streak) = longest_streaks(&sessions);

        Statistics {
            total_sessions,
            total_hours,
            net_profit,
            win_rate,
            hourly_rate,
            biggest_win,
            biggest_loss,
            current_streak: current_streak(&sessions),
            longest_win_streak,
            longest_loss_streak,
        }
    }
}
