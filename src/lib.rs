//! `tracker_rust` - In-memory issue tracker HTTP service
//!
//! This crate provides the request surface for the `trackerd` binary, a
//! thin axum adapter over the [`tracker_lib`] core.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`server`] - Router, shared state, and endpoint handlers
//! - [`config`] - Listen-address configuration (flags + `PORT` env)
//! - [`error`] - API error to HTTP status/body mapping
//! - [`logging`] - tracing subscriber initialization
//!
//! The record store and query pipeline live in `crates/tracker-lib`.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod logging;
pub mod server;

use anyhow::Result;
use clap::Parser;
use tracker_lib::IssueStore;

use crate::config::ServerConfig;
use crate::server::AppState;

/// Run the HTTP service until the process is stopped.
///
/// This is the main entry point called from `main()`.
///
/// # Errors
///
/// Returns an error if the listen address cannot be bound or the
/// server loop fails.
pub async fn run() -> Result<()> {
    let config = ServerConfig::parse();
    logging::init();

    let state = AppState::new(IssueStore::with_samples());
    let app = server::app(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "trackerd listening");
    axum::serve(listener, app).await?;

    Ok(())
}
