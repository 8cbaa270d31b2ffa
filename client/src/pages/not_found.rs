//! Placeholder for unmatched paths. Renders in place; never redirects.

use leptos::prelude::*;

pub const NOT_FOUND_TEXT: &str = "404 - Page Not Found";

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! { <div class="not-found">{NOT_FOUND_TEXT}</div> }
}
