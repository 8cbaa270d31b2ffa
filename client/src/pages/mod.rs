//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates shared pieces to
//! `components`. Gating happens before a page mounts.

pub mod dashboard;
pub mod not_found;
pub mod signin;
pub mod signup;
