//! Build-time client configuration.
//!
//! The auth API root is baked in at compile time from `POINTSE_API_BASE_URL`
//! (the build script also forwards it from a `.env` file).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Root of the auth API, without a trailing slash.
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("POINTSE_API_BASE_URL"))
}

fn normalize_base_url(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_API_BASE_URL)
        .trim_end_matches('/')
        .to_owned()
}
