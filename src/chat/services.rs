use std::time::Duration;

use tracing::{debug, info};

use super::{model::ChatTurn, responder::respond};
use crate::{error::AppError, session::model::Session};

/// Records the user's message and the scripted reply, in that order.
/// `reply_delay` pauses before either turn is recorded; zero skips it.
/// Both turns are pushed together, so a cancelled call leaves no trace.
pub async fn submit_message(
    session: &mut Session,
    text: &str,
    reply_delay: Duration,
) -> Result<(ChatTurn, ChatTurn), AppError> {
    session.require_user()?;
    if text.trim().is_empty() {
        return Err(AppError::EmptyInput);
    }

    let asked = ChatTurn::user(text);
    let answered = ChatTurn::assistant(respond(text));

    if !reply_delay.is_zero() {
        tokio::time::sleep(reply_delay).await;
    }

    // no await past this point
    session.chat_history.push(asked.clone());
    session.chat_history.push(answered.clone());
    debug!(turns = session.chat_history.len(), "chat reply recorded");
    Ok((asked, answered))
}

pub fn clear_history(session: &mut Session) -> Result<(), AppError> {
    session.require_user()?;
    info!(cleared = session.chat_history.len(), "chat history cleared");
    session.chat_history.clear();
    Ok(())
}
