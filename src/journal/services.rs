use time::{format_description::BorrowedFormatItem, macros::format_description, OffsetDateTime};
use tracing::info;

use super::model::JournalEntry;
use crate::{error::AppError, session::model::Session};

pub const SAVED_NOTICE: &str = "Journal saved! 🌿";

const ENTRY_DATE: &[BorrowedFormatItem<'static>] = format_description!(
    "[month repr:long] [day], [year] - [hour repr:12]:[minute] [period case:upper]"
);

pub fn format_entry_date(at: OffsetDateTime) -> anyhow::Result<String> {
    Ok(at.format(ENTRY_DATE)?)
}

/// Records `content` as the newest journal entry.
pub fn save_entry(
    session: &mut Session,
    now: OffsetDateTime,
    content: &str,
) -> Result<JournalEntry, AppError> {
    session.require_user()?;
    if content.trim().is_empty() {
        return Err(AppError::EmptyInput);
    }

    let entry = JournalEntry {
        date: format_entry_date(now)?,
        content: content.to_string(),
    };
    session.journals.insert(0, entry.clone());
    info!(entries = session.journals.len(), "journal entry saved");
    Ok(entry)
}
