//! Cross-frontend primitives for presenting the game.
//!
//! The engine in `game-core` pushes screens through named render entry points.
//! This crate binds those entry points to views, keeps the single on-screen
//! [`ViewState`] in a [`ViewBridge`], hands player actions back through
//! per-screen mailboxes, and lays out the level graph. Nothing here depends on
//! a particular UI toolkit.
pub mod bridge;
pub mod config;
pub mod frontend;
pub mod geometry;
pub mod graph;
pub mod mailbox;
pub mod presentation;
pub mod presenter;
pub mod props;
pub mod registry;
pub mod screen;
pub mod storage;
pub mod views;

pub use bridge::{BridgeError, ViewBridge, ViewComponent, ViewState};
pub use config::{FrontendConfig, LayoutConfig, StorageConfig};
pub use frontend::FrontendApp;
pub use geometry::{EdgeSegment, EdgeStyle, resolve_edge};
pub use graph::{Edge, Graph, Layout, Location, Node, layered_layout, layers};
pub use mailbox::ActionMailbox;
pub use presentation::{NodeStatus, PresentationMapper, node_label};
pub use presenter::BridgedPresenter;
pub use props::{Callable, PropValue, Props, props_are_same, records_are_same};
pub use registry::{EntryPoint, RenderFn, ViewRegistry};
pub use screen::{RenderArgs, ScreenAction, ScreenKind};
pub use storage::{FileSaveStore, InMemorySaveStore, SaveStore, StorageError};
pub use views::{MainMenuProps, Mailboxes, MapViewProps, MenuProps};
