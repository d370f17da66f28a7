//! Widgets drawing each view component.
pub mod game_map;
pub mod menu;
pub mod null_view;

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};

/// A `width` x `height` rectangle centred in `area`, clipped to it.
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Foreground color of a style, for canvas shapes that only take a color.
pub(crate) fn fg(style: Style) -> Color {
    style.fg.unwrap_or(Color::Reset)
}
