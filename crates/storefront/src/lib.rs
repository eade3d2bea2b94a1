//! Cute Shop storefront core library.
//!
//! Client-side state for the storefront: cart management with derived
//! totals, a session guard gating authenticated views, and the navigation
//! surface connecting them. The presentation layer consumes this crate;
//! the catalog API is an injected read-only collaborator.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod routes;
pub mod services;
pub mod session;
pub mod state;
