//! Key/value user settings (bankroll, stop-loss limit, win goal).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single named setting. Keys are unique; writes to an existing key
/// mutate the record in place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setting {
    pub id: Uuid,
    pub key: String,
    pub value: String,
}
