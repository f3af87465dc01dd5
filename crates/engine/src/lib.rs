use std::collections::HashMap;

use uuid::Uuid;

pub use bankroll::{BankrollKind, BankrollTransaction, TransactionDraft};
pub use error::EngineError;
pub use ops::{ResultFilter, SessionFilter, Statistics, Streak, StreakKind};
pub use sessions::{GameType, Session, SessionDraft, SessionPatch, TableType};
pub use settings::Setting;

mod bankroll;
mod error;
mod ops;
mod sessions;
mod settings;

type ResultEngine<T> = Result<T, EngineError>;

/// In-memory store for poker sessions, bankroll transactions and settings.
///
/// State lives for the lifetime of the process. Mutating operations take
/// `&mut self`; whoever owns the request lifecycle wraps the engine in a
/// lock so scans see a consistent snapshot.
#[derive(Debug)]
pub struct Engine {
    sessions: HashMap<Uuid, Session>,
    bankroll: HashMap<Uuid, BankrollTransaction>,
    settings: HashMap<String, Setting>,
}

impl Engine {
    /// Create an empty engine with the default settings seeded.
    pub fn new() -> Self {
        let mut engine = Self {
            sessions: HashMap::new(),
            bankroll: HashMap::new(),
            settings: HashMap::new(),
        };

        for (key, value) in [
            ("bankroll", "15000"),
            ("stopLossLimit", "500"),
            ("winGoal", "1000"),
        ] {
            engine.set_setting(key, value);
        }

        engine
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
