//! Browser `localStorage` string access.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes the csr-only web-sys glue so the session store never touches
//! `window` directly. Native builds see an empty, read-only storage.

/// Read the raw string stored under `key`.
pub fn get_item(key: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let storage = local_storage()?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}

/// Store `value` under `key`. Returns `false` when storage is unavailable or
/// the write is refused (quota, private mode).
pub fn set_item(key: &str, value: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        local_storage().is_some_and(|storage| storage.set_item(key, value).is_ok())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (key, value);
        false
    }
}

/// Remove `key`. Missing keys are not an error.
pub fn remove_item(key: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}
