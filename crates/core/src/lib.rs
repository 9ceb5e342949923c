//! MyShop Core - Shared types and cart state machine.
//!
//! This crate provides the common types used across all MyShop components:
//! - `server` - Catalog and account HTTP service
//! - `cli` - Operator tools for migrations and seeding
//! - `client` - Headless storefront client
//!
//! # Architecture
//!
//! The core crate contains only types and pure state - no I/O, no database
//! access, no HTTP clients. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and emails,
//!   plus the [`types::Product`] catalog record
//! - [`cart`] - The client-held shopping cart state machine

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod types;

pub use cart::{Cart, CartLine, CartTotals};
pub use types::*;
