//! Bankroll ledger primitives.
//!
//! A `BankrollTransaction` is one entry in the bankroll ledger: the result
//! of a session, a deposit or a withdrawal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::EngineError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BankrollKind {
    Session,
    Deposit,
    Withdrawal,
}

impl BankrollKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Session => "session",
            Self::Deposit => "deposit",
            Self::Withdrawal => "withdrawal",
        }
    }
}

impl TryFrom<&str> for BankrollKind {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "session" => Ok(Self::Session),
            "deposit" => Ok(Self::Deposit),
            "withdrawal" => Ok(Self::Withdrawal),
            other => Err(EngineError::InvalidInput(format!(
                "invalid transaction kind: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BankrollTransaction {
    pub id: Uuid,
    pub kind: BankrollKind,
    /// Signed amount; negative for losses and withdrawals.
    pub amount: f64,
    pub description: String,
    /// Weak reference to the originating session. May no longer resolve
    /// once that session is deleted.
    pub session_id: Option<Uuid>,
    /// Server-assigned at creation, not client-settable.
    pub date: DateTime<Utc>,
}

/// Input for posting a ledger entry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransactionDraft {
    pub kind: BankrollKind,
    pub amount: f64,
    pub description: String,
    pub session_id: Option<Uuid>,
}

impl BankrollTransaction {
    pub fn new(draft: TransactionDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: draft.kind,
            amount: draft.amount,
            description: draft.description,
            session_id: draft.session_id,
            date: Utc::now(),
        }
    }
}
