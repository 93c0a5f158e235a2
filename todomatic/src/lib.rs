//! `TodoMatic` — terminal task list backed by a remote REST API.

pub mod app;
pub mod config;
pub mod net;
pub mod tasks;
pub mod ui;
