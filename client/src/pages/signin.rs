//! Sign-in page: email + password against `/auth/login`.

#[cfg(test)]
#[path = "signin_test.rs"]
mod signin_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::auth_fields::{AuthLogo, PasswordInput};
use crate::net::api::{AppGateway, AuthGateway};
use crate::net::transport::Transport;
use crate::routes::AppRoute;
use crate::session::{self, SessionHandle, SessionStore};
use crate::state::submit::{SubmitState, submit_label};

/// Run one sign-in attempt. Returns the settled form state and, on success,
/// the route to navigate to.
pub async fn attempt_sign_in<T, S>(
    gateway: &AuthGateway<T>,
    store: &S,
    email: &str,
    password: &str,
) -> (SubmitState, Option<AppRoute>)
where
    T: Transport,
    S: SessionStore + ?Sized,
{
    match session::sign_in(gateway, store, email, password).await {
        Ok(route) => (SubmitState::Succeeded(None), Some(route)),
        Err(err) => (SubmitState::Failed(err.to_string()), None),
    }
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let gateway = expect_context::<AppGateway>();
    let store = expect_context::<SessionHandle>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let submit = RwSignal::new(SubmitState::default());
    let next_route = RwSignal::new(None::<AppRoute>);
    let pending = Signal::derive(move || submit.with(SubmitState::is_pending));

    Effect::new(move || {
        if let Some(route) = next_route.get() {
            navigate(route.path(), NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !submit.try_update(SubmitState::begin).unwrap_or(false) {
            return;
        }
        let gateway = gateway.clone();
        let store = store.clone();
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();

        leptos::task::spawn_local(async move {
            let (settled, route) = attempt_sign_in(&gateway, store.as_ref(), &email_value, &password_value).await;
            submit.set(settled);
            if route.is_some() {
                next_route.set(route);
            }
        });
    };

    view! {
        <div class="auth-container">
            <div class="auth-form">
                <AuthLogo/>
                <h2>"Sign In"</h2>
                <form on:submit=on_submit>
                    <div class="form-group">
                        <input
                            type="email"
                            placeholder="Email"
                            required=true
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                            disabled=move || pending.get()
                        />
                    </div>
                    <div class="form-group">
                        <PasswordInput value=password placeholder="Password" disabled=pending/>
                    </div>
                    <Show when=move || submit.with(|s| s.error().is_some())>
                        <p class="error-message">
                            {move || submit.with(|s| s.error().unwrap_or_default().to_owned())}
                        </p>
                    </Show>
                    <button type="submit" class="submit-btn" disabled=move || pending.get()>
                        {move || submit.with(|s| submit_label(s, "Login", "Logging in..."))}
                    </button>
                </form>
                <p class="switch-form-link">
                    "Don't have an account? "
                    <A href=AppRoute::SignUp.path()>"Sign Up"</A>
                </p>
            </div>
        </div>
    }
}
