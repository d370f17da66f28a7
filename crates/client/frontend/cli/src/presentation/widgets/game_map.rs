//! Level map drawn on a braille canvas.
//!
//! Layout coordinates grow downwards while the canvas grows upwards, so every
//! point is flipped against the canvas height before drawing.

use client_frontend_core::{
    EdgeStyle, Graph, LayoutConfig, Location, MapViewProps, NodeStatus, PresentationMapper,
    layered_layout,
};
use glam::DVec2;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, Paragraph,
        canvas::{Canvas, Circle, Line as CanvasLine},
    },
};

use super::fg;

const HINT: &str = "Left/Right choose  Enter travel  Esc pause";

pub fn render<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    props: &MapViewProps,
    highlighted: Option<usize>,
    layout_config: &LayoutConfig,
    edge_style: &EdgeStyle,
    theme: &T,
) {
    let [map_area, hint_area] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(area);

    let graph = Graph::from_parts(props.nodes.iter().copied(), props.edges.iter().copied());
    let layout = layered_layout(&graph, layout_config);

    let padding = layout_config.margin.max(edge_style.circle_radius() * 2.0);
    let width = layout.values().map(|l| l.x).fold(0.0, f64::max) + padding;
    let height = layout.values().map(|l| l.y).fold(0.0, f64::max) + padding;
    let point = |location: &Location| DVec2::new(location.x, height - location.y);

    let canvas = Canvas::default()
        .block(Block::bordered().title(Line::from(" Map ").style(theme.style_title())))
        .marker(Marker::Braille)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            for edge in graph.edges() {
                let (Some(from), Some(to)) = (layout.get(&edge.from), layout.get(&edge.to)) else {
                    continue;
                };
                let Some(segment) = edge_style.resolve(point(from), point(to)) else {
                    continue;
                };

                let color = fg(theme.style_edge(edge.from == props.current));
                ctx.draw(&segment_line(segment.from, segment.to, color));
                if let Some([tip, left, right]) = edge_style.arrowhead(&segment) {
                    ctx.draw(&segment_line(tip, left, color));
                    ctx.draw(&segment_line(tip, right, color));
                    ctx.draw(&segment_line(left, right, color));
                }
            }

            ctx.layer();

            for node in graph.nodes() {
                // Nodes unreachable from the start have no location.
                let Some(location) = layout.get(&node.id) else {
                    continue;
                };
                let status = NodeStatus::of(node.id, props.current, &props.visited, highlighted);
                let (label, style) = theme.render_node(node.data, status);
                let centre = point(location);

                ctx.draw(&Circle {
                    x: centre.x,
                    y: centre.y,
                    radius: edge_style.circle_radius(),
                    color: fg(style),
                });
                ctx.print(centre.x, centre.y, Span::styled(label, style));
            }
        });

    frame.render_widget(canvas, map_area);
    frame.render_widget(Paragraph::new(Line::from(HINT).centered()), hint_area);
}

fn segment_line(from: DVec2, to: DVec2, color: ratatui::style::Color) -> CanvasLine {
    CanvasLine::new(from.x, from.y, to.x, to.y, color)
}
