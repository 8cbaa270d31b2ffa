//! Shared pieces of the sign-in and sign-up cards.

use leptos::prelude::*;

/// Brand mark shown above both auth forms.
#[component]
pub fn AuthLogo() -> impl IntoView {
    view! {
        <div class="logo-container">
            <span class="logo-text-main">"POINTS"</span>
            <span class="logo-text-accent">"Ê"</span>
        </div>
    }
}

/// Password input with a show/hide toggle.
#[component]
pub fn PasswordInput(value: RwSignal<String>, placeholder: &'static str, disabled: Signal<bool>) -> impl IntoView {
    let visible = RwSignal::new(false);

    view! {
        <div class="password-field">
            <input
                class="password-field__input"
                type=move || if visible.get() { "text" } else { "password" }
                placeholder=placeholder
                required=true
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                disabled=move || disabled.get()
            />
            <button
                type="button"
                class="password-field__toggle"
                tabindex="-1"
                aria-label=move || if visible.get() { "Hide password" } else { "Show password" }
                on:click=move |_| visible.update(|v| *v = !*v)
            >
                {move || if visible.get() { "Hide" } else { "Show" }}
            </button>
        </div>
    }
}
