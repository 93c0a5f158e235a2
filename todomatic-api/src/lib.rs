//! Shared domain types and REST client for `TodoMatic`.

pub mod client;
pub mod filter;
pub mod task;
pub mod user;
