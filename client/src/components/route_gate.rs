//! Route guards wrapping page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each guarded route mounts a fresh `Gate`, so the session is re-read on
//! every navigation. Redirects replace the history entry so the back button
//! cannot return to a page the user may no longer see.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use crate::session::SessionHandle;
use crate::util::auth::{GateDecision, GateVariant, root_dispatch};

fn replace_history() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Render `children` when `variant` admits the current session, else redirect.
#[component]
pub fn Gate(variant: GateVariant, children: Children) -> impl IntoView {
    let store = expect_context::<SessionHandle>();
    match variant.evaluate(store.as_ref()) {
        GateDecision::Render => children().into_any(),
        GateDecision::Redirect(route) => {
            log::debug!("{variant:?} redirecting to {}", route.path());
            view! { <Redirect path=route.path() options=replace_history()/> }.into_any()
        }
    }
}

/// `/` dispatcher: dashboard when signed in, sign-in otherwise.
#[component]
pub fn RootRedirect() -> impl IntoView {
    let store = expect_context::<SessionHandle>();
    let target = root_dispatch(store.as_ref());
    view! { <Redirect path=target.path()/> }
}
