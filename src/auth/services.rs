use tracing::{info, warn};

use super::{
    credentials::{CredentialStore, User},
    password::{hash_password, verify_password},
};
use crate::{error::AppError, session::model::Session};

pub const MIN_USERNAME_CHARS: usize = 3;
pub const MIN_PASSWORD_CHARS: usize = 6;

pub const LOGIN_NOTICE: &str = "Successfully logged in!";
pub const SIGNUP_NOTICE: &str = "Account created! Please log in.";
const SIGNUP_TOO_SHORT: &str =
    "Username must be at least 3 characters and password at least 6 characters.";

/// Signs `username` into `session` if the password matches. On failure the
/// session is left as it was.
pub async fn login(
    store: &dyn CredentialStore,
    session: &mut Session,
    username: &str,
    password: &str,
) -> Result<(), AppError> {
    let Some(user) = store.find_user(username).await? else {
        warn!(%username, "login unknown username");
        return Err(AppError::InvalidCredentials);
    };

    if !verify_password(password, &user.password_hash)? {
        warn!(%username, "login invalid password");
        return Err(AppError::InvalidCredentials);
    }

    session.sign_in(user.username);
    info!(%username, "user logged in");
    Ok(())
}

/// Registers a new account. Does not sign in.
pub async fn signup(
    store: &dyn CredentialStore,
    username: &str,
    password: &str,
) -> Result<(), AppError> {
    if store.find_user(username).await?.is_some() {
        warn!(%username, "username already registered");
        return Err(AppError::DuplicateUser);
    }

    if username.chars().count() < MIN_USERNAME_CHARS
        || password.chars().count() < MIN_PASSWORD_CHARS
    {
        warn!(%username, "signup credentials too short");
        return Err(AppError::InvalidInput(SIGNUP_TOO_SHORT.into()));
    }

    let user = User {
        username: username.to_string(),
        password_hash: hash_password(password)?,
    };
    // another signup may have won the race since the lookup above
    if !store.insert_if_absent(user).await? {
        warn!(%username, "username registered concurrently");
        return Err(AppError::DuplicateUser);
    }

    info!(%username, "user registered");
    Ok(())
}

pub fn logout(session: &mut Session) {
    if let Some(user) = session.current_user() {
        info!(username = %user, "user logged out");
    }
    session.sign_out();
}
