use client_frontend_core::PresentationMapper;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Paragraph},
};

pub const MESSAGE: &str = "Game is not running";

pub fn render<T: PresentationMapper<Style = Style>>(frame: &mut Frame, area: Rect, theme: &T) {
    let paragraph = Paragraph::new(MESSAGE)
        .style(theme.style_title())
        .alignment(Alignment::Center)
        .block(Block::bordered());
    frame.render_widget(paragraph, super::centered(area, 32, 3));
}
