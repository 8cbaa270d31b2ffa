//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Session data lives in the session store, not here; this module only holds
//! per-view UI state.

pub mod submit;
