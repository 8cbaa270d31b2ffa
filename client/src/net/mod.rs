//! Networking modules for the auth API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the login/register contract, `transport` is the HTTP seam, and
//! `types` defines the wire schema.

pub mod api;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
