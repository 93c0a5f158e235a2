//! Fetch coordinator for wiring the TUI to the async HTTP layer.
//!
//! The TUI event loop is synchronous (crossterm poll-based) while the
//! REST client is async. This module bridges the two: it spawns a tokio
//! background task that owns the [`ApiClient`] and talks to the main
//! thread over [`FetchCommand`] / [`FetchEvent`] channels.
//!
//! # Architecture
//!
//! ```text
//! TUI (main thread)  ←── FetchEvent ───  tokio background task
//!                     ─── FetchCommand →
//! ```
//!
//! An initial load is issued as soon as the task spawns (the fetch-on-
//! mount of the app); afterwards the main loop drains [`FetchEvent`]s on
//! every tick and may request a [`FetchCommand::Refresh`].

use std::time::Duration;

use tokio::sync::mpsc;

use todomatic_api::client::{ApiClient, ApiError};
use todomatic_api::task::Task;
use todomatic_api::user::User;

/// Commands sent from the TUI main loop to the fetch background task.
#[derive(Debug)]
pub enum FetchCommand {
    /// Re-fetch tasks and users, replacing local state on success.
    Refresh,
    /// Gracefully shut down the background task.
    Shutdown,
}

/// Events sent from the fetch background task to the TUI main loop.
#[derive(Debug)]
pub enum FetchEvent {
    /// A load has started; the UI shows the loading screen.
    Loading,
    /// Both collections arrived.
    Loaded {
        /// The fetched task list.
        tasks: Vec<Task>,
        /// The fetched user list.
        users: Vec<User>,
    },
    /// The load failed; the message is shown as-is.
    Failed(String),
}

/// Configuration for the fetch layer.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Base URL of the to-do API (e.g. `https://jsonplaceholder.typicode.com`).
    pub base_url: String,
    /// Per-request timeout.
    pub request_timeout: Duration,
    /// Channel capacity for the command/event mpsc channels.
    pub channel_capacity: usize,
}

/// Default channel capacity for commands and events.
const DEFAULT_CHANNEL_CAPACITY: usize = 32;

impl FetchConfig {
    /// Creates a `FetchConfig` with default timeout and channel capacity.
    #[must_use]
    pub const fn new(base_url: String) -> Self {
        Self {
            base_url,
            request_timeout: Duration::from_secs(10),
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

/// Spawn the fetch background task and return channel handles.
///
/// Builds an [`ApiClient`], spawns the load loop, and immediately kicks
/// off the initial concurrent load of `/todos` and `/users`. Must be
/// called from within a tokio runtime.
///
/// # Errors
///
/// Returns [`ApiError::Build`] if the HTTP client cannot be constructed.
/// The caller should surface this as a failed load.
pub fn spawn_fetch(
    config: &FetchConfig,
) -> Result<(mpsc::Sender<FetchCommand>, mpsc::Receiver<FetchEvent>), ApiError> {
    let client = ApiClient::new(&config.base_url, config.request_timeout)?;

    let (cmd_tx, cmd_rx) = mpsc::channel::<FetchCommand>(config.channel_capacity);
    let (evt_tx, evt_rx) = mpsc::channel::<FetchEvent>(config.channel_capacity);

    tokio::spawn(async move {
        fetch_loop(client, cmd_rx, evt_tx).await;
    });

    Ok((cmd_tx, evt_rx))
}

/// Background task: perform the initial load, then serve commands.
async fn fetch_loop(
    client: ApiClient,
    mut cmd_rx: mpsc::Receiver<FetchCommand>,
    evt_tx: mpsc::Sender<FetchEvent>,
) {
    load(&client, &evt_tx).await;

    while let Some(cmd) = cmd_rx.recv().await {
        match cmd {
            FetchCommand::Refresh => load(&client, &evt_tx).await,
            FetchCommand::Shutdown => {
                tracing::info!("fetch loop shutting down");
                break;
            }
        }
    }
}

/// One full load: announce `Loading`, fetch both collections in
/// parallel, report `Loaded` or `Failed`.
async fn load(client: &ApiClient, evt_tx: &mpsc::Sender<FetchEvent>) {
    if evt_tx.send(FetchEvent::Loading).await.is_err() {
        // TUI dropped; nothing left to report to.
        return;
    }

    match client.fetch_all().await {
        Ok((tasks, users)) => {
            tracing::info!(tasks = tasks.len(), users = users.len(), "load complete");
            let _ = evt_tx.send(FetchEvent::Loaded { tasks, users }).await;
        }
        Err(e) => {
            tracing::warn!(error = %e, "load failed");
            let _ = evt_tx.send(FetchEvent::Failed(e.to_string())).await;
        }
    }
}
