//! Session search and filtering.

use chrono::{DateTime, Utc};

use crate::{Engine, GameType, Session, TableType};

/// Structured filters for [`Engine::search_sessions`].
///
/// `date_from` and `date_to` are inclusive. All present predicates are
/// ANDed together.
#[derive(Clone, Debug, Default)]
pub struct SessionFilter {
    /// Case-insensitive substring match against the location.
    pub location: Option<String>,
    pub game_type: Option<GameType>,
    pub table_type: Option<TableType>,
    pub date_from: Option<DateTime<Utc>>,
    pub date_to: Option<DateTime<Utc>>,
    pub result: Option<ResultFilter>,
}

/// Win/loss selector. A break-even session counts as a loss.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultFilter {
    Win,
    Loss,
}

fn matches_query(session: &Session, query: &str) -> bool {
    session.location.to_lowercase().contains(query)
        || session.game_type.as_str().contains(query)
        || session.stakes.to_lowercase().contains(query)
        || session
            .notes
            .as_ref()
            .is_some_and(|notes| notes.to_lowercase().contains(query))
        || session
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(query))
}

fn matches_filter(session: &Session, filter: &SessionFilter) -> bool {
    if let Some(location) = &filter.location
        && !session
            .location
            .to_lowercase()
            .contains(&location.to_lowercase())
    {
        return false;
    }
    if let Some(game_type) = filter.game_type
        && session.game_type != game_type
    {
        return false;
    }
    if let Some(table_type) = filter.table_type
        && session.table_type != table_type
    {
        return false;
    }
    if let Some(from) = filter.date_from
        && session.date < from
    {
        return false;
    }
    if let Some(to) = filter.date_to
        && session.date > to
    {
        return false;
    }
    if let Some(result) = filter.result {
        let won = session.profit > 0.0;
        let selected = match result {
            ResultFilter::Win => won,
            ResultFilter::Loss => !won,
        };
        if !selected {
            return false;
        }
    }

    true
}

impl Engine {
    /// Free-text search combined with structured filters.
    ///
    /// A non-empty query matches case-insensitively against location, game
    /// type, stakes, notes and every tag. Results come back newest first;
    /// with an empty query and no filters this is the full session set.
    pub fn search_sessions(&self, query: &str, filter: &SessionFilter) -> Vec<Session> {
        let query = query.to_lowercase();
        let mut sessions: Vec<Session> = self
            .sessions
            .values()
            .filter(|session| query.is_empty() || matches_query(session, &query))
            .filter(|session| matches_filter(session, filter))
            .cloned()
            .collect();
        sessions.sort_by(|a, b| b.date.cmp(&a.date));
        sessions
    }
}
