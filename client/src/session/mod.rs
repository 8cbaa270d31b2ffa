//! Session lifecycle: establish on login, classify on navigation, clear on
//! logout or corruption.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`resolve`] classifies without side effects. [`recover`] is the only place
//! an unusable session is wiped: a token whose user record is missing or
//! undecodable. The protected gate and the dashboard go through it.


pub mod store;

use std::sync::Arc;

use crate::net::api::{AuthError, AuthGateway};
use crate::net::transport::Transport;
use crate::routes::AppRoute;

pub use store::{LocalStorageStore, MemoryStore, Session, SessionError, SessionStore};

/// Shared store handle provided through context.
pub type SessionHandle = Arc<dyn SessionStore + Send + Sync>;

/// What the store currently holds.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionStatus {
    /// Token and a decodable user record.
    Active(Session),
    /// No token.
    Absent,
    /// Token present, user record missing or undecodable.
    Corrupted(SessionError),
}

impl SessionStatus {
    pub fn has_token(&self) -> bool {
        !matches!(self, Self::Absent)
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }
}

/// Classify the stored state without mutating it.
pub fn resolve<S: SessionStore + ?Sized>(store: &S) -> SessionStatus {
    match store.read() {
        Ok(Some(session)) => SessionStatus::Active(session),
        Ok(None) => SessionStatus::Absent,
        Err(err) => SessionStatus::Corrupted(err),
    }
}

/// Classify, clearing a corrupted session first. Never returns `Corrupted`.
pub fn recover<S: SessionStore + ?Sized>(store: &S) -> SessionStatus {
    match resolve(store) {
        SessionStatus::Corrupted(err) => {
            log::warn!("clearing unusable session: {err}");
            store.clear();
            SessionStatus::Absent
        }
        status => status,
    }
}

/// Log in and persist the session. Returns where to navigate next.
///
/// # Errors
///
/// Any [`AuthError`] from the gateway; the store is left untouched.
/// [`AuthError::SessionNotStored`] when the store refuses the session.
pub async fn sign_in<T, S>(gateway: &AuthGateway<T>, store: &S, email: &str, password: &str) -> Result<AppRoute, AuthError>
where
    T: Transport,
    S: SessionStore + ?Sized,
{
    let success = gateway.login(email, password).await?;
    if let Err(err) = store.write(&success.token, &success.user) {
        log::warn!("sign in accepted but not persisted: {err}");
        return Err(AuthError::SessionNotStored);
    }
    Ok(AppRoute::Dashboard)
}

/// Drop the session. Returns where to navigate next.
pub fn logout<S: SessionStore + ?Sized>(store: &S) -> AppRoute {
    store.clear();
    log::info!("signed out");
    AppRoute::SignIn
}
