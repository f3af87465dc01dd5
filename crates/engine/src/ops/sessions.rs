//! Session store operations.

use uuid::Uuid;

use crate::{
    BankrollKind, Engine, EngineError, ResultEngine, Session, SessionDraft, SessionPatch,
    TransactionDraft,
};

impl Engine {
    /// Return a page of sessions ordered by date, newest first.
    ///
    /// An offset past the end yields an empty page.
    pub fn sessions(&self, limit: usize, offset: usize) -> Vec<Session> {
        let mut sessions: Vec<Session> = self.sessions.values().cloned().collect();
        sessions.sort_by(|a, b| b.date.cmp(&a.date));
        sessions.into_iter().skip(offset).take(limit).collect()
    }

    pub fn session(&self, id: Uuid) -> ResultEngine<Session> {
        self.sessions
            .get(&id)
            .cloned()
            .ok_or_else(|| EngineError::KeyNotFound(id.to_string()))
    }

    /// Store a new session and post the linked bankroll transaction.
    ///
    /// Profit and hourly rate are derived here. The linked transaction
    /// records the profit at creation time; later edits to the session do
    /// not update it.
    pub fn new_session(&mut self, draft: SessionDraft) -> Session {
        let description = format!(
            "{} session at {}",
            draft.game_type.as_str(),
            draft.location
        );
        let session = Session::new(draft);

        self.new_transaction(TransactionDraft {
            kind: BankrollKind::Session,
            amount: session.profit,
            description,
            session_id: Some(session.id),
        });
        self.sessions.insert(session.id, session.clone());

        session
    }

    /// Merge a partial update over an existing session.
    ///
    /// Recomputes profit and hourly rate only when buy-in, cash-out or
    /// hours is part of the patch. The originally linked bankroll
    /// transaction is left untouched.
    pub fn update_session(&mut self, id: Uuid, patch: SessionPatch) -> ResultEngine<Session> {
        let session = self
            .sessions
            .get_mut(&id)
            .ok_or_else(|| EngineError::KeyNotFound(id.to_string()))?;
        session.apply(patch);
        Ok(session.clone())
    }

    /// Remove a session, returning the removed record.
    ///
    /// Linked bankroll transactions are kept; their `session_id` no longer
    /// resolves.
    pub fn delete_session(&mut self, id: Uuid) -> ResultEngine<Session> {
        self.sessions
            .remove(&id)
            .ok_or_else(|| EngineError::KeyNotFound(id.to_string()))
    }
}
