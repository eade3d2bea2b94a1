//! Service layer for the storefront core.

pub mod auth;
