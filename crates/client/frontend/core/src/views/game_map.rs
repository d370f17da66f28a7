use std::rc::Rc;

use game_core::{GameMapAction, MapEdge};

use super::{CONSUME_ACTION, consume_action, indices};
use crate::bridge::{ViewBridge, ViewComponent};
use crate::mailbox::ActionMailbox;
use crate::props::{Callable, PropValue, Props};
use crate::registry::RenderFn;
use crate::screen::{RenderArgs, ScreenAction};

const NODES: &str = "nodes";
const EDGES: &str = "edges";
const CURRENT: &str = "current";
const VISITED: &str = "visited";
const FROM: &str = "from";
const TO: &str = "to";

/// Props of the level map. `nodes` holds one kind code per node id.
#[derive(Clone, Debug, PartialEq)]
pub struct MapViewProps {
    pub nodes: Vec<u8>,
    pub edges: Vec<MapEdge>,
    pub current: usize,
    pub visited: Vec<usize>,
    pub consume_action: Callable,
}

impl MapViewProps {
    pub fn into_props(self) -> Props {
        let edges: Vec<PropValue> = self
            .edges
            .into_iter()
            .map(|edge| PropValue::from(crate::props! { FROM => edge.from, TO => edge.to }))
            .collect();

        crate::props! {
            NODES => self.nodes,
            EDGES => edges,
            CURRENT => self.current,
            VISITED => self.visited,
            CONSUME_ACTION => self.consume_action,
        }
    }

    pub fn from_props(props: &Props) -> Option<Self> {
        let nodes = indices(props.get(NODES))?
            .into_iter()
            .map(|code| u8::try_from(code).ok())
            .collect::<Option<Vec<_>>>()?;

        let edges = props
            .get(EDGES)?
            .as_sequence()?
            .iter()
            .map(|edge| {
                let edge = edge.as_record()?;
                Some(MapEdge::new(
                    edge.get(FROM)?.as_index()?,
                    edge.get(TO)?.as_index()?,
                ))
            })
            .collect::<Option<Vec<_>>>()?;

        Some(Self {
            nodes,
            edges,
            current: props.get(CURRENT)?.as_index()?,
            visited: indices(props.get(VISITED))?,
            consume_action: consume_action(props)?,
        })
    }

    /// Targets of the edges leaving the current node, ascending.
    pub fn reachable(&self) -> Vec<usize> {
        let mut targets: Vec<usize> = self
            .edges
            .iter()
            .filter(|edge| edge.from == self.current)
            .map(|edge| edge.to)
            .collect();
        targets.sort_unstable();
        targets.dedup();
        targets
    }
}

pub fn setup(
    mailbox: Rc<ActionMailbox<GameMapAction>>,
) -> impl FnOnce(Rc<ViewBridge>) -> RenderFn {
    move |bridge: Rc<ViewBridge>| -> RenderFn {
        let consume_action = mailbox.consumer(ScreenAction::as_map);
        Box::new(move |args: RenderArgs| {
            let RenderArgs::GameMap {
                nodes,
                edges,
                current,
                visited,
            } = args
            else {
                return None;
            };

            let props = MapViewProps {
                nodes,
                edges,
                current,
                visited,
                consume_action: consume_action.clone(),
            }
            .into_props();

            bridge
                .present(ViewComponent::GameMap, props, &mailbox)
                .map(ScreenAction::Map)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(current: usize, visited: Vec<usize>) -> RenderArgs {
        RenderArgs::GameMap {
            nodes: vec![0, 1, 1, 2],
            edges: vec![
                MapEdge::new(0, 1),
                MapEdge::new(0, 2),
                MapEdge::new(1, 3),
                MapEdge::new(2, 3),
            ],
            current,
            visited,
        }
    }

    #[test]
    fn props_decode_back_to_render_arguments() {
        let bridge = Rc::new(ViewBridge::new());
        let mut render = setup(Rc::new(ActionMailbox::new()))(Rc::clone(&bridge));

        render(args(1, vec![0]));

        let props = MapViewProps::from_props(&bridge.current().props).unwrap();
        assert_eq!(props.nodes, vec![0, 1, 1, 2]);
        assert_eq!(props.edges.len(), 4);
        assert_eq!(props.edges[2], MapEdge::new(1, 3));
        assert_eq!(props.current, 1);
        assert_eq!(props.visited, vec![0]);
        assert_eq!(props.reachable(), vec![3]);
    }

    #[test]
    fn identical_map_keeps_view_and_delivers_action() {
        let bridge = Rc::new(ViewBridge::new());
        let mut render = setup(Rc::new(ActionMailbox::new()))(Rc::clone(&bridge));

        render(args(0, vec![]));
        let generation = bridge.generation();
        let props = MapViewProps::from_props(&bridge.current().props).unwrap();
        props
            .consume_action
            .call(ScreenAction::Map(GameMapAction::GoToNode(2)));

        assert_eq!(
            render(args(0, vec![])),
            Some(ScreenAction::Map(GameMapAction::GoToNode(2)))
        );
        assert_eq!(bridge.generation(), generation);
    }

    #[test]
    fn menu_actions_never_reach_the_map() {
        let bridge = Rc::new(ViewBridge::new());
        let mut render = setup(Rc::new(ActionMailbox::new()))(Rc::clone(&bridge));

        render(args(0, vec![]));
        let props = MapViewProps::from_props(&bridge.current().props).unwrap();
        props
            .consume_action
            .call(ScreenAction::Menu(game_core::MenuAction::Confirm));

        assert_eq!(render(args(0, vec![])), None);
    }
}
