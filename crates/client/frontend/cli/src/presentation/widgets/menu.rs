//! Menu screens: main, settings and pause.

use client_frontend_core::{MainMenuProps, MenuProps, PresentationMapper};
use game_core::{MainMenu, PauseMenu, SettingsMenu};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};
use strum::IntoEnumIterator;

const MENU_WIDTH: u16 = 32;
const HINT: &str = "Up/Down move  Enter select";

struct MenuEntry {
    label: String,
    enabled: bool,
}

pub fn render_main_menu<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    props: &MainMenuProps,
    theme: &T,
) {
    let entries: Vec<MenuEntry> = MainMenu::iter()
        .map(|item| MenuEntry {
            label: item.to_string(),
            enabled: item.is_enabled(props.has_save_game),
        })
        .collect();
    render_menu(frame, area, "TCG", &entries, props.position, theme);
}

pub fn render_settings_menu<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    props: &MenuProps,
    theme: &T,
) {
    let entries: Vec<MenuEntry> = SettingsMenu::iter()
        .map(|item| MenuEntry {
            label: item.to_string(),
            enabled: true,
        })
        .collect();
    render_menu(frame, area, "Settings", &entries, props.position, theme);
}

pub fn render_pause_menu<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    props: &MenuProps,
    theme: &T,
) {
    let entries: Vec<MenuEntry> = PauseMenu::iter()
        .map(|item| MenuEntry {
            label: item.to_string(),
            enabled: true,
        })
        .collect();
    render_menu(frame, area, "Paused", &entries, props.position, theme);
}

fn render_menu<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    entries: &[MenuEntry],
    position: u8,
    theme: &T,
) {
    let mut lines: Vec<Line> = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let selected = index == usize::from(position);
            let style = theme.style_menu_item(selected, entry.enabled);
            Line::from(Span::styled(format!(" {} ", entry.label), style)).centered()
        })
        .collect();
    lines.push(Line::default());
    lines.push(Line::from(HINT).centered());

    let height = lines.len() as u16 + 2;
    let block = Block::bordered().title(
        Line::from(format!(" {title} "))
            .style(theme.style_title())
            .centered(),
    );

    frame.render_widget(
        Paragraph::new(lines).block(block),
        super::centered(area, MENU_WIDTH, height),
    );
}
