use serde::{Deserialize, Serialize};

/// Request body for login and signup.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

/// Authentication state after login, signup or logout.
#[derive(Debug, Serialize)]
pub struct AuthStatus {
    pub logged_in: bool,
    pub current_user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}
