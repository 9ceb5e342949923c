//! MyShop headless storefront client.
//!
//! Talks to the shop's JSON API and holds the two pieces of client-side
//! state the browser version keeps: the persisted session (token +
//! username, surviving restarts like `localStorage`) and the in-memory
//! cart for an interactive shopping session.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod session;
pub mod shop;

pub use api::{ApiClient, ApiError};
pub use session::Session;
