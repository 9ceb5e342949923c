//! Domain models for the server.

pub mod account;

pub use account::Account;
