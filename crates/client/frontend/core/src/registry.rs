//! Binding of screen kinds to render functions.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use strum::IntoEnumIterator;

use crate::bridge::{BridgeError, ViewBridge};
use crate::screen::{RenderArgs, ScreenAction, ScreenKind};

/// Render function produced by a screen's setup.
pub type RenderFn = Box<dyn FnMut(RenderArgs) -> Option<ScreenAction>>;

/// Two-phase entry point: declared at startup, bound once the UI mounts.
pub enum EntryPoint {
    Unbound,
    Bound(RenderFn),
}

impl EntryPoint {
    pub const fn is_bound(&self) -> bool {
        matches!(self, EntryPoint::Bound(_))
    }
}

impl fmt::Debug for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryPoint::Unbound => f.write_str("Unbound"),
            EntryPoint::Bound(_) => f.write_str("Bound(..)"),
        }
    }
}

/// One entry point per [`ScreenKind`], all sharing one [`ViewBridge`].
#[derive(Debug)]
pub struct ViewRegistry {
    bridge: Rc<ViewBridge>,
    entries: HashMap<ScreenKind, EntryPoint>,
}

impl ViewRegistry {
    pub fn new(bridge: Rc<ViewBridge>) -> Self {
        let entries = ScreenKind::iter()
            .map(|kind| (kind, EntryPoint::Unbound))
            .collect();
        Self { bridge, entries }
    }

    pub fn bridge(&self) -> &Rc<ViewBridge> {
        &self.bridge
    }

    /// Binds `kind` to the render function returned by `setup`.
    pub fn register<F>(&mut self, kind: ScreenKind, setup: F)
    where
        F: FnOnce(Rc<ViewBridge>) -> RenderFn,
    {
        let render = setup(Rc::clone(&self.bridge));
        let previous = self.entries.insert(kind, EntryPoint::Bound(render));
        if previous.is_some_and(|entry| entry.is_bound()) {
            tracing::warn!(entry_point = kind.entry_point(), "entry point bound twice");
        }
        tracing::debug!(entry_point = kind.entry_point(), "entry point bound");
    }

    pub fn is_bound(&self, kind: ScreenKind) -> bool {
        self.entries.get(&kind).is_some_and(EntryPoint::is_bound)
    }

    /// Dispatches a render call to the entry point of `args.kind()`.
    pub fn render(&mut self, args: RenderArgs) -> Result<Option<ScreenAction>, BridgeError> {
        let kind = args.kind();
        match self.entries.get_mut(&kind) {
            Some(EntryPoint::Bound(render)) => Ok(render(args)),
            _ => Err(BridgeError::NotBound(kind.entry_point())),
        }
    }
}
