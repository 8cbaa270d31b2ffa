//! Client-visible navigation targets.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Paths the router knows about. Anything else renders the not-found page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// `/`, dispatches to dashboard or sign-in.
    Root,
    SignIn,
    SignUp,
    Dashboard,
}

impl AppRoute {
    /// Router segment without the leading slash.
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Root => "",
            Self::SignIn => "signin",
            Self::SignUp => "signup",
            Self::Dashboard => "dashboard",
        }
    }

    pub const fn path(self) -> &'static str {
        match self {
            Self::Root => "/",
            Self::SignIn => "/signin",
            Self::SignUp => "/signup",
            Self::Dashboard => "/dashboard",
        }
    }
}
