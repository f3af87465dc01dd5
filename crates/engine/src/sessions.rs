//! Session primitives.
//!
//! A `Session` is one recorded poker-playing occurrence. Profit and hourly
//! rate are derived from buy-in, cash-out and hours; they are never taken
//! from input.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::EngineError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameType {
    Cash,
    Tournament,
    SitNGo,
}

impl GameType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Tournament => "tournament",
            Self::SitNGo => "sit-n-go",
        }
    }
}

impl TryFrom<&str> for GameType {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "cash" => Ok(Self::Cash),
            "tournament" => Ok(Self::Tournament),
            "sit-n-go" => Ok(Self::SitNGo),
            other => Err(EngineError::InvalidInput(format!(
                "invalid game type: {other}"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableType {
    Live,
    Online,
    Home,
}

impl TableType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Online => "online",
            Self::Home => "home",
        }
    }
}

impl TryFrom<&str> for TableType {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "live" => Ok(Self::Live),
            "online" => Ok(Self::Online),
            "home" => Ok(Self::Home),
            other => Err(EngineError::InvalidInput(format!(
                "invalid table type: {other}"
            ))),
        }
    }
}

/// One recorded playing occurrence.
///
/// `profit` and `hourly_rate` always reflect the current buy-in, cash-out
/// and hours; `created_at` is set once and never changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub location: String,
    pub game_type: GameType,
    pub table_type: TableType,
    pub stakes: String,
    pub date: DateTime<Utc>,
    pub hours: f64,
    pub buy_in: f64,
    pub cash_out: f64,
    pub profit: f64,
    pub hourly_rate: f64,
    pub hands: Option<i64>,
    pub tags: Vec<String>,
    pub notes: Option<String>,
    pub rating: Option<u8>,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a session.
///
/// The derived fields are absent on purpose; the engine computes them.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionDraft {
    pub location: String,
    pub game_type: GameType,
    pub table_type: TableType,
    pub stakes: String,
    pub date: DateTime<Utc>,
    pub hours: f64,
    pub buy_in: f64,
    pub cash_out: f64,
    pub hands: Option<i64>,
    pub tags: Vec<String>,
    pub notes: Option<String>,
    pub rating: Option<u8>,
}

/// Partial update for a session. `None` leaves the stored field untouched.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SessionPatch {
    pub location: Option<String>,
    pub game_type: Option<GameType>,
    pub table_type: Option<TableType>,
    pub stakes: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub hours: Option<f64>,
    pub buy_in: Option<f64>,
    pub cash_out: Option<f64>,
    pub hands: Option<i64>,
    pub tags: Option<Vec<String>>,
    pub notes: Option<String>,
    pub rating: Option<u8>,
}

/// Derive profit and hourly rate from the raw numbers.
pub(crate) fn derive_results(buy_in: f64, cash_out: f64, hours: f64) -> (f64, f64) {
    let profit = cash_out - buy_in;
    let hourly_rate = if hours > 0.0 { profit / hours } else { 0.0 };
    (profit, hourly_rate)
}

impl Session {
    pub fn new(draft: SessionDraft) -> Self {
        let (profit, hourly_rate) = derive_results(draft.buy_in, draft.cash_out, draft.hours);

        Self {
            id: Uuid::new_v4(),
            location: draft.location,
            game_type: draft.game_type,
            table_type: draft.table_type,
            stakes: draft.stakes,
            date: draft.date,
            hours: draft.hours,
            buy_in: draft.buy_in,
            cash_out: draft.cash_out,
            profit,
            hourly_rate,
            hands: draft.hands,
            tags: draft.tags,
            notes: draft.notes,
            rating: draft.rating,
            created_at: Utc::now(),
        }
    }

    /// Merge a partial update over the stored record.
    ///
    /// Profit and hourly rate are recomputed only when buy-in, cash-out or
    /// hours is part of the patch, each combined with the stored values for
    /// the others.
    pub fn apply(&mut self, patch: SessionPatch) {
        let results_touched =
            patch.buy_in.is_some() || patch.cash_out.is_some() || patch.hours.is_some();

        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(game_type) = patch.game_type {
            self.game_type = game_type;
        }
        if let Some(table_type) = patch.table_type {
            self.table_type = table_type;
        }
        if let Some(stakes) = patch.stakes {
            self.stakes = stakes;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(hours) = patch.hours {
            self.hours = hours;
        }
        if let Some(buy_in) = patch.buy_in {
            self.buy_in = buy_in;
        }
        if let Some(cash_out) = patch.cash_out {
            self.cash_out = cash_out;
        }
        if let Some(hands) = patch.hands {
            self.hands = Some(hands);
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        if let Some(notes) = patch.notes {
            self.notes = Some(notes);
        }
        if let Some(rating) = patch.rating {
            self.rating = Some(rating);
        }

        if results_touched {
            let (profit, hourly_rate) = derive_results(self.buy_in, self.cash_out, self.hours);
            self.profit = profit;
            self.hourly_rate = hourly_rate;
        }
    }
}
