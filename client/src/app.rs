//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::route_gate::{Gate, RootRedirect};
use crate::config;
use crate::net::api::AppGateway;
use crate::net::transport::HttpTransport;
use crate::pages::{dashboard::DashboardPage, not_found::NotFoundPage, signin::SignInPage, signup::SignUpPage};
use crate::routes::AppRoute;
use crate::session::SessionHandle;
use crate::util::auth::GateVariant;

/// Session backend for this build: `localStorage` in the browser, memory
/// elsewhere.
fn session_handle() -> SessionHandle {
    #[cfg(feature = "csr")]
    {
        Arc::new(crate::session::LocalStorageStore)
    }
    #[cfg(not(feature = "csr"))]
    {
        Arc::new(crate::session::MemoryStore::new())
    }
}

/// Root application component.
///
/// Provides the session store and auth gateway, then routes every path
/// through its gate.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(session_handle());
    provide_context(AppGateway::new(config::api_base_url(), HttpTransport));

    view! {
        <Title text="POINTSE"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route
                    path=StaticSegment(AppRoute::SignIn.segment())
                    view=|| view! { <Gate variant=GateVariant::RequireNoSession><SignInPage/></Gate> }
                />
                <Route
                    path=StaticSegment(AppRoute::SignUp.segment())
                    view=|| view! { <Gate variant=GateVariant::RequireNoSession><SignUpPage/></Gate> }
                />
                <Route
                    path=StaticSegment(AppRoute::Dashboard.segment())
                    view=|| view! { <Gate variant=GateVariant::RequireSession><DashboardPage/></Gate> }
                />
                <Route path=StaticSegment(AppRoute::Root.segment()) view=RootRedirect/>
            </Routes>
        </Router>
    }
}
