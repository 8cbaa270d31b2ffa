//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! `route_gate` decides whether a page renders at all; `auth_fields` holds
//! the form pieces shared by the sign-in and sign-up pages.

pub mod auth_fields;
pub mod route_gate;
