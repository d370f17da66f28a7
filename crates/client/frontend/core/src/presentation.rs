//! Framework-agnostic styling contract for view widgets.

use game_core::MapNode;

/// How a map node relates to the player's position.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum NodeStatus {
    Current,
    /// Reachable from the current node and under the player's cursor.
    Highlighted,
    Visited,
    Default,
}

impl NodeStatus {
    /// Current wins over highlighted, which wins over visited.
    pub fn of(id: usize, current: usize, visited: &[usize], highlighted: Option<usize>) -> Self {
        if id == current {
            NodeStatus::Current
        } else if highlighted == Some(id) {
            NodeStatus::Highlighted
        } else if visited.contains(&id) {
            NodeStatus::Visited
        } else {
            NodeStatus::Default
        }
    }
}

/// Short label drawn inside a map node. Unknown codes render as `?`.
pub fn node_label(code: u8) -> &'static str {
    match MapNode::from_repr(code) {
        Some(MapNode::Start) => "S",
        Some(MapNode::Combat) => "C",
        Some(MapNode::End) => "B",
        None => "?",
    }
}

/// Maps view state to frontend styles.
pub trait PresentationMapper {
    /// Style type for this frontend (e.g., `ratatui::style::Style`).
    type Style: Clone;

    /// Label and style of a map node.
    fn render_node(&self, code: u8, status: NodeStatus) -> (String, Self::Style);

    /// Style of an edge; `from_current` marks edges the player can take.
    fn style_edge(&self, from_current: bool) -> Self::Style;

    fn style_menu_item(&self, selected: bool, enabled: bool) -> Self::Style;

    fn style_title(&self) -> Self::Style;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_precedence() {
        let visited = [0, 1];
        assert_eq!(NodeStatus::of(1, 1, &visited, Some(1)), NodeStatus::Current);
        assert_eq!(NodeStatus::of(2, 1, &visited, Some(2)), NodeStatus::Highlighted);
        assert_eq!(NodeStatus::of(0, 1, &visited, Some(2)), NodeStatus::Visited);
        assert_eq!(NodeStatus::of(3, 1, &visited, None), NodeStatus::Default);
    }

    #[test]
    fn labels_follow_node_codes() {
        assert_eq!(node_label(MapNode::Start.code()), "S");
        assert_eq!(node_label(MapNode::Combat.code()), "C");
        assert_eq!(node_label(MapNode::End.code()), "B");
        assert_eq!(node_label(200), "?");
    }
}
