//! Sign-up page: full name (sent as `username`), email, password.
//!
//! Registration does not sign the user in; on success the form clears and
//! points the user at the sign-in page.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::auth_fields::{AuthLogo, PasswordInput};
use crate::net::api::{AppGateway, AuthError, AuthGateway};
use crate::net::transport::Transport;
use crate::routes::AppRoute;
use crate::state::submit::{SubmitState, submit_label};

pub const REGISTERED_NOTICE: &str = "Registration successful! You can now sign in.";

/// Register and produce the notice to show on success.
///
/// # Errors
///
/// Any [`AuthError`] from the gateway, including local validation.
pub async fn register_account<T: Transport>(
    gateway: &AuthGateway<T>,
    username: &str,
    email: &str,
    password: &str,
) -> Result<String, AuthError> {
    let ack = gateway.register(username, email, password).await?;
    if let Some(message) = ack.message {
        log::debug!("register acknowledged: {message}");
    }
    Ok(REGISTERED_NOTICE.to_owned())
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let gateway = expect_context::<AppGateway>();

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let submit = RwSignal::new(SubmitState::default());
    let pending = Signal::derive(move || submit.with(SubmitState::is_pending));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !submit.try_update(SubmitState::begin).unwrap_or(false) {
            return;
        }
        let gateway = gateway.clone();
        let username = full_name.get_untracked();
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();

        leptos::task::spawn_local(async move {
            match register_account(&gateway, &username, &email_value, &password_value).await {
                Ok(notice) => {
                    full_name.set(String::new());
                    email.set(String::new());
                    password.set(String::new());
                    submit.update(|s| s.succeed(Some(notice)));
                }
                Err(err) => submit.update(|s| s.fail(err.to_string())),
            }
        });
    };

    view! {
        <div class="auth-container">
            <div class="auth-form">
                <AuthLogo/>
                <h2>"Sign Up"</h2>
                <form on:submit=on_submit>
                    <div class="form-group">
                        <input
                            type="text"
                            placeholder="Full Name (becomes your username)"
                            required=true
                            prop:value=move || full_name.get()
                            on:input=move |ev| full_name.set(event_target_value(&ev))
                            disabled=move || pending.get()
                        />
                    </div>
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
                        <PasswordInput value=password placeholder="Password (min. 6 characters)" disabled=pending/>
                    </div>
                    <Show when=move || submit.with(|s| s.error().is_some())>
                        <p class="error-message">
                            {move || submit.with(|s| s.error().unwrap_or_default().to_owned())}
                        </p>
                    </Show>
                    <Show when=move || submit.with(|s| s.notice().is_some())>
                        <p class="success-message">
                            {move || submit.with(|s| s.notice().unwrap_or_default().to_owned())}
                        </p>
                    </Show>
                    <button type="submit" class="submit-btn" disabled=move || pending.get()>
                        {move || submit.with(|s| submit_label(s, "Register", "Registering..."))}
                    </button>
                </form>
                <p class="switch-form-link">
                    "Already have an account? "
                    <A href=AppRoute::SignIn.path()>"Sign In"</A>
                </p>
            </div>
        </div>
    }
}
