//! Dashboard page showing the cached profile with a logout action.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the protected landing route. The profile comes from the session
//! store, not the network. An unusable stored session is cleared and the user
//! is sent back to sign-in.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_navigate;

use crate::net::types::SessionUser;
use crate::routes::AppRoute;
use crate::session::{self, SessionHandle, SessionStatus, SessionStore};
use crate::util::date::format_joined;

/// What the dashboard does on mount.
#[derive(Clone, Debug, PartialEq)]
pub enum DashboardMount {
    Show(SessionUser),
    Leave(AppRoute),
}

/// Read the session for display, clearing it first if it is corrupted.
pub fn on_mount<S: SessionStore + ?Sized>(store: &S) -> DashboardMount {
    match session::recover(store) {
        SessionStatus::Active(session) => DashboardMount::Show(session.user),
        _ => DashboardMount::Leave(AppRoute::SignIn),
    }
}

/// Display strings derived from the cached user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileSummary {
    pub greeting: String,
    pub email: String,
    pub joined: Option<String>,
}

impl ProfileSummary {
    pub fn from_user(user: &SessionUser) -> Self {
        Self {
            greeting: format!("Welcome to Your Dashboard, {}!", user.display_name()),
            email: user.email().unwrap_or_default().to_owned(),
            joined: user.created_at().and_then(format_joined),
        }
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = expect_context::<SessionHandle>();

    let user = match on_mount(store.as_ref()) {
        DashboardMount::Show(user) => user,
        DashboardMount::Leave(route) => {
            return view! { <Redirect path=route.path()/> }.into_any();
        }
    };
    let summary = ProfileSummary::from_user(&user);

    let navigate = use_navigate();
    let next_route = RwSignal::new(None::<AppRoute>);
    Effect::new(move || {
        if let Some(route) = next_route.get() {
            navigate(route.path(), NavigateOptions::default());
        }
    });

    let on_logout = move |_| next_route.set(Some(session::logout(store.as_ref())));

    view! {
        <div class="dashboard-container">
            <div class="dashboard-header">
                <h1>{summary.greeting}</h1>
                <button class="logout-btn" on:click=on_logout>
                    "Logout"
                </button>
            </div>
            <div class="dashboard-content">
                <p>"This is your personal dashboard."</p>
                <p>"You are successfully logged in."</p>
                <div class="user-info">
                    <h3>"Your Information:"</h3>
                    <p>
                        <strong>"Email: "</strong>
                        {summary.email}
                    </p>
                    {summary.joined.map(|joined| {
                        view! {
                            <p>
                                <strong>"Joined: "</strong>
                                {joined}
                            </p>
                        }
                    })}
                </div>
            </div>
        </div>
    }
    .into_any()
}
