use serde::{Deserialize, Serialize};

use super::model::JournalEntry;

#[derive(Debug, Deserialize)]
pub struct SaveEntryRequest {
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct EntrySaved {
    pub notice: String,
    pub entry: JournalEntry,
}
