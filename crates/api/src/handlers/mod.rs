//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers lock the shared store, delegate to it, and map errors via
//! [`AppError`](crate::error::AppError).

pub mod character;
