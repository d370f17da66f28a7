//! UI rendering: routes the view on screen to its widget.
use anyhow::Result;
use client_frontend_core::{
    EdgeStyle, LayoutConfig, MainMenuProps, MapViewProps, MenuProps, PresentationMapper,
    ViewComponent, ViewState,
};
use ratatui::{Frame, style::Style};

use crate::{
    presentation::{terminal::Tui, theme::RatatuiTheme, widgets},
    state::ViewSession,
};

/// Everything a frame needs to draw the current view.
pub struct RenderContext<'a> {
    pub view: &'a ViewState,
    pub session: &'a ViewSession,
    pub layout: &'a LayoutConfig,
    pub edge_style: &'a EdgeStyle,
}

pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    let theme = RatatuiTheme;
    terminal.draw(|frame| render_view(frame, ctx, &theme))?;
    Ok(())
}

pub(crate) fn render_view<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    ctx: &RenderContext,
    theme: &T,
) {
    let area = frame.area();
    let props = &ctx.view.props;

    let drawn = match ctx.view.component {
        ViewComponent::Null => {
            widgets::null_view::render(frame, area, theme);
            true
        }
        ViewComponent::MainMenu => MainMenuProps::from_props(props)
            .map(|props| widgets::menu::render_main_menu(frame, area, &props, theme))
            .is_some(),
        ViewComponent::SettingsMenu => MenuProps::from_props(props)
            .map(|props| widgets::menu::render_settings_menu(frame, area, &props, theme))
            .is_some(),
        ViewComponent::PauseMenu => MenuProps::from_props(props)
            .map(|props| widgets::menu::render_pause_menu(frame, area, &props, theme))
            .is_some(),
        ViewComponent::GameMap => MapViewProps::from_props(props)
            .map(|props| {
                widgets::game_map::render(
                    frame,
                    area,
                    &props,
                    ctx.session.highlighted(),
                    ctx.layout,
                    ctx.edge_style,
                    theme,
                )
            })
            .is_some(),
    };

    if !drawn {
        tracing::debug!(component = %ctx.view.component, "view props did not decode");
        widgets::null_view::render(frame, area, theme);
    }
}
