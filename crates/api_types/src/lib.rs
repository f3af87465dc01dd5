use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameType {
    Cash,
    Tournament,
    SitNGo,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableType {
    Live,
    Online,
    Home,
}

/// Query parameters shared by the paginated list endpoints.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PageQuery {
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

pub mod session {
    use super::*;

    /// Request body for creating a session.
    ///
    /// Profit and hourly rate are intentionally absent: the engine derives
    /// them and never trusts client-supplied values.
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SessionNew {
        pub location: String,
        pub game_type: GameType,
        pub table_type: TableType,
        pub stakes: String,
        /// RFC3339 timestamp of when the session was played.
        pub date: DateTime<Utc>,
        pub hours: f64,
        pub buy_in: f64,
        pub cash_out: f64,
        pub hands: Option<i64>,
        #[serde(default)]
        pub tags: Vec<String>,
        pub notes: Option<String>,
        /// 1-5 star rating.
        pub rating: Option<u8>,
    }

    /// Request body for a partial session update. Absent fields keep their
    /// stored value.
    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SessionUpdate {
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

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SessionView {
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

    /// Query parameters for session search.
    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SearchQuery {
        /// Free-text query matched against location, game type, stakes,
        /// notes and tags.
        pub q: Option<String>,
        pub location: Option<String>,
        pub game_type: Option<GameType>,
        pub table_type: Option<TableType>,
        /// Inclusive lower date bound.
        pub date_from: Option<DateTime<Utc>>,
        /// Inclusive upper date bound.
        pub date_to: Option<DateTime<Utc>>,
        /// `win` selects profitable sessions; any other value selects
        /// break-even and losing ones.
        pub result: Option<String>,
    }
}

pub mod bankroll {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum BankrollKind {
        Session,
        Deposit,
        Withdrawal,
    }

    /// Request body for posting a ledger entry. The timestamp is
    /// server-assigned.
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct TransactionNew {
        #[serde(rename = "type")]
        pub kind: BankrollKind,
        pub amount: f64,
        pub description: String,
        pub session_id: Option<Uuid>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct TransactionView {
        pub id: Uuid,
        #[serde(rename = "type")]
        pub kind: BankrollKind,
        pub amount: f64,
        pub description: String,
        /// May reference a session that has since been deleted.
        pub session_id: Option<Uuid>,
        pub date: DateTime<Utc>,
    }
}

pub mod setting {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct SettingPut {
        pub value: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct SettingView {
        pub id: Uuid,
        pub key: String,
        pub value: String,
    }
}

pub mod stats {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum StreakKind {
        Win,
        Loss,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct StreakView {
        #[serde(rename = "type")]
        pub kind: StreakKind,
        pub count: usize,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct StatsQuery {
        pub date_from: Option<DateTime<Utc>>,
        pub date_to: Option<DateTime<Utc>>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct StatsView {
        pub total_sessions: usize,
        pub total_hours: f64,
        pub net_profit: f64,
        pub win_rate: f64,
        pub hourly_rate: f64,
        pub biggest_win: f64,
        pub biggest_loss: f64,
        pub current_streak: StreakView,
        pub longest_win_streak: usize,
        pub longest_loss_streak: usize,
    }
}
