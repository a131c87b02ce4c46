//! Shared client core for the student registration app.
//!
//! Everything in this crate is plain Rust so it can be exercised with
//! `cargo test` outside the browser. The `frontend` crate renders the state
//! machines in [`state`] and executes the [`api::ApiCall`]s they emit.

pub mod api;
pub mod config;
pub mod dates;
pub mod filter;
pub mod model;
pub mod requests;
pub mod state;
pub mod validation;
