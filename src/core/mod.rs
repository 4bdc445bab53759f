//! Core library components.
//!
//! This module contains the reusable logic for the active context, the
//! remote secret store, and moving secrets between the store, local files
//! and child processes.

pub mod config;
pub mod constants;
pub mod context;
pub mod domain;
pub mod env;
pub mod exec;
pub mod remote;
pub mod secrets;
pub mod slug;
pub mod store;
pub mod sync;
pub mod types;
pub mod validation;

#[cfg(test)]
pub(crate) mod testing;
