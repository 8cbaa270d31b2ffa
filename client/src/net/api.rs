//! Auth gateway: `login` and `register` against the configured API root.
//!
//! ERROR HANDLING
//! ==============
//! Every outcome is normalized into [`AuthError`]. Local validation runs
//! before any request is built, so an invalid form never reaches the network.
//! The `Display` text of each error is exactly what the form shows.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;

use super::transport::{HttpResponse, HttpTransport, Transport};
use super::types::{ApiMessage, LoginRequest, LoginResponseBody, LoginSuccess, RegisterAck, RegisterRequest, SessionUser};

pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";
pub const MIN_PASSWORD_LEN: usize = 6;

/// Gateway wired to the browser transport; the type provided via context.
pub type AppGateway = AuthGateway<HttpTransport>;

/// Client-side form validation failures. No request was sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter both email and password.")]
    MissingCredentials,
    #[error("Please fill in all fields.")]
    MissingFields,
    #[error("Password must be at least 6 characters long.")]
    PasswordTooShort,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Non-2xx response; `message` is the server's text or a status fallback.
    #[error("{message}")]
    Api { status: u16, message: String },
    /// 2xx login response without a token or user.
    #[error("Login successful, but token or user data was not received.")]
    MalformedResponse,
    /// Login succeeded but the browser refused to store the session.
    #[error("Login successful, but the session could not be saved in this browser.")]
    SessionNotStored,
    #[error("{0}")]
    Transport(String),
}

/// Check sign-in fields before sending.
///
/// # Errors
///
/// Returns [`ValidationError::MissingCredentials`] if either field is empty.
pub fn validate_login_input(email: &str, password: &str) -> Result<(), ValidationError> {
    if email.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    Ok(())
}

/// Check sign-up fields before sending.
///
/// # Errors
///
/// Returns [`ValidationError::MissingFields`] if any field is empty, or
/// [`ValidationError::PasswordTooShort`] below [`MIN_PASSWORD_LEN`] characters.
pub fn validate_register_input(username: &str, email: &str, password: &str) -> Result<(), ValidationError> {
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

fn http_status_message(status: u16) -> String {
    format!("HTTP error! Status: {status}")
}

/// Build the [`AuthError::Api`] for a non-2xx response.
pub(crate) fn api_error(resp: &HttpResponse) -> AuthError {
    let message = serde_json::from_str::<ApiMessage>(&resp.body)
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| http_status_message(resp.status));
    AuthError::Api { status: resp.status, message }
}

/// Turn a login response into a session pair, enforcing the response contract.
///
/// # Errors
///
/// [`AuthError::Api`] for non-2xx statuses; [`AuthError::MalformedResponse`]
/// when a 2xx body lacks a non-empty `token` or an object `user`.
pub fn interpret_login_response(resp: &HttpResponse) -> Result<LoginSuccess, AuthError> {
    if !resp.is_success() {
        return Err(api_error(resp));
    }
    let body: LoginResponseBody =
        serde_json::from_str(&resp.body).map_err(|_| AuthError::MalformedResponse)?;
    let token = body.token.filter(|token| !token.is_empty()).ok_or(AuthError::MalformedResponse)?;
    let Some(serde_json::Value::Object(fields)) = body.user else {
        return Err(AuthError::MalformedResponse);
    };
    Ok(LoginSuccess { token, user: SessionUser::from(fields) })
}

/// Turn a register response into an acknowledgement.
///
/// # Errors
///
/// [`AuthError::Api`] for non-2xx statuses. Any 2xx body is accepted.
pub fn interpret_register_response(resp: &HttpResponse) -> Result<RegisterAck, AuthError> {
    if !resp.is_success() {
        return Err(api_error(resp));
    }
    let message = serde_json::from_str::<ApiMessage>(&resp.body).ok().and_then(|body| body.message);
    Ok(RegisterAck { message })
}

fn to_payload<T: Serialize>(body: &T) -> Result<serde_json::Value, AuthError> {
    serde_json::to_value(body).map_err(|e| AuthError::Transport(e.to_string()))
}

/// HTTP client for the remote auth API.
#[derive(Clone, Debug)]
pub struct AuthGateway<T> {
    base_url: String,
    transport: T,
}

impl<T: Transport> AuthGateway<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url, transport }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Exchange credentials for a token and user record.
    ///
    /// # Errors
    ///
    /// Validation, API, malformed-response, or transport failure; see [`AuthError`].
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginSuccess, AuthError> {
        validate_login_input(email, password)?;
        let payload = to_payload(&LoginRequest { email, password })?;
        let resp = self.transport.post_json(&self.endpoint(LOGIN_PATH), &payload).await?;
        match interpret_login_response(&resp) {
            Ok(success) => {
                log::info!("sign in accepted (status {})", resp.status);
                Ok(success)
            }
            Err(err) => {
                log::warn!("sign in rejected (status {}): {err}", resp.status);
                Err(err)
            }
        }
    }

    /// Create an account. Does not sign the user in.
    ///
    /// # Errors
    ///
    /// Validation, API, or transport failure; see [`AuthError`].
    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<RegisterAck, AuthError> {
        validate_register_input(username, email, password)?;
        let payload = to_payload(&RegisterRequest { username, email, password })?;
        let resp = self.transport.post_json(&self.endpoint(REGISTER_PATH), &payload).await?;
        let outcome = interpret_register_response(&resp);
        match &outcome {
            Ok(_) => log::info!("registration accepted (status {})", resp.status),
            Err(err) => log::warn!("registration rejected (status {}): {err}", resp.status),
        }
        outcome
    }
}
