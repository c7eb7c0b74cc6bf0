use serde::{Deserialize, Serialize};

use super::model::ChatTurn;

#[derive(Debug, Deserialize)]
pub struct SubmitMessageRequest {
    pub message: String,
}

/// The two turns appended by one submitted message.
#[derive(Debug, Serialize)]
pub struct ChatExchange {
    pub user: ChatTurn,
    pub assistant: ChatTurn,
}
