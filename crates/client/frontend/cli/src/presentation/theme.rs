//! Ratatui theme implementation of PresentationMapper.
//!
//! This module provides concrete styling for the terminal UI, implementing
//! the framework-agnostic PresentationMapper trait from client-frontend-core.

use client_frontend_core::{NodeStatus, PresentationMapper, node_label};
use ratatui::style::{Color, Modifier, Style};

/// Ratatui-specific theme implementing PresentationMapper.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl PresentationMapper for RatatuiTheme {
    type Style = Style;

    fn render_node(&self, code: u8, status: NodeStatus) -> (String, Self::Style) {
        let color = match status {
            NodeStatus::Current => Color::Yellow,
            NodeStatus::Highlighted => Color::LightGreen,
            NodeStatus::Visited => Color::DarkGray,
            NodeStatus::Default => Color::White,
        };

        let mut style = Style::default().fg(color);
        if matches!(status, NodeStatus::Current | NodeStatus::Highlighted) {
            style = style.add_modifier(Modifier::BOLD);
        }

        (node_label(code).to_string(), style)
    }

    fn style_edge(&self, from_current: bool) -> Self::Style {
        if from_current {
            Style::default().fg(Color::Gray)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    fn style_menu_item(&self, selected: bool, enabled: bool) -> Self::Style {
        match (selected, enabled) {
            (_, false) => Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
            (true, true) => Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            (false, true) => Style::default().fg(Color::White),
        }
    }

    fn style_title(&self) -> Self::Style {
        Style::default()
            .fg(Color::LightCyan)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_node_is_bold_and_labeled() {
        let (label, style) = RatatuiTheme.render_node(0, NodeStatus::Current);
        assert_eq!(label, "S");
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn disabled_menu_item_is_dimmed_even_when_selected() {
        let style = RatatuiTheme.style_menu_item(true, false);
        assert_eq!(style.fg, Some(Color::DarkGray));
        assert_eq!(style.bg, None);
    }
}
