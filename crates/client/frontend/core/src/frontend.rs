//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;

/// Frontend abstraction for UI layers.
///
/// A frontend owns the game engine and the presenter it renders through, and
/// drives both from its own event loop until the player quits.
///
/// Views share state through `Rc`, so frontends run on a single thread and the
/// returned future is not `Send`.
///
/// # Implementations
///
/// - `CliApp`: Terminal-based UI (ratatui + crossterm)
#[async_trait(?Send)]
pub trait FrontendApp {
    /// Run the frontend event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error, such as a
    /// render entry point that was never bound.
    async fn run(self) -> Result<()>
    where
        Self: Sized;
}
