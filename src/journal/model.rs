use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JournalEntry {
    pub date: String, // e.g. "March 05, 2025 - 09:07 PM"
    pub content: String,
}
