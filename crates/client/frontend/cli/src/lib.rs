//! Terminal UI frontend for the TCG game.
//!
//! This crate draws the single view held by the
//! [`ViewBridge`](client_frontend_core::ViewBridge) with ratatui and turns key
//! presses into the actions that view accepts.
//!
//! # Architecture
//!
//! `CliApp` owns the engine and drives it from a fixed-interval frame loop:
//! - Keyboard input is delivered to the on-screen view's action consumer
//! - The engine ticks and renders through the registered entry points
//! - The bridge's current view is drawn to the terminal

mod app;
mod config;
mod event;
mod input;
pub mod logging;
pub mod presentation;
mod state;

pub use app::CliApp;
pub use config::CliConfig;

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
