//! Route gate decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every gated route applies the same rule: render when a predicate over the
//! session holds, otherwise redirect. The two variants differ only in the
//! predicate and the redirect target.
//!
//! Only `RequireSession` evicts an unusable session. The public side and `/`
//! classify without clearing, so a stored token always sends the user toward
//! the dashboard, whose gate then clears a corrupted session and bounces to
//! sign-in.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::routes::AppRoute;
use crate::session::{self, SessionStatus, SessionStore};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Render,
    Redirect(AppRoute),
}

/// Which side of the session boundary a route lives on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateVariant {
    /// Protected route; bounces to sign-in.
    RequireSession,
    /// Public auth form; bounces signed-in users to the dashboard.
    RequireNoSession,
}

impl GateVariant {
    pub fn decide(self, status: &SessionStatus) -> GateDecision {
        match self {
            Self::RequireSession => gate(status.is_active(), AppRoute::SignIn),
            Self::RequireNoSession => gate(!status.has_token(), AppRoute::Dashboard),
        }
    }

    /// Read the store and decide. `RequireSession` clears a corrupted session
    /// first; `RequireNoSession` leaves the store untouched.
    pub fn evaluate<S: SessionStore + ?Sized>(self, store: &S) -> GateDecision {
        let status = match self {
            Self::RequireSession => session::recover(store),
            Self::RequireNoSession => session::resolve(store),
        };
        self.decide(&status)
    }
}

pub fn gate(allowed: bool, redirect_to: AppRoute) -> GateDecision {
    if allowed { GateDecision::Render } else { GateDecision::Redirect(redirect_to) }
}

/// Target for `/`.
pub fn root_target(status: &SessionStatus) -> AppRoute {
    if status.has_token() { AppRoute::Dashboard } else { AppRoute::SignIn }
}

/// Target for `/` read from the store without mutating it.
pub fn root_dispatch<S: SessionStore + ?Sized>(store: &S) -> AppRoute {
    root_target(&session::resolve(store))
}
