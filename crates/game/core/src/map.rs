//! Procedurally generated level map.
//!
//! A level is a layered DAG: a single `Start` node, several layers of
//! encounter nodes and a single `End` node. Adjacent layers are stitched
//! together with a monotone walk so edges never cross and every node keeps at
//! least one incoming and one outgoing edge.

use std::collections::{BTreeMap, BTreeSet};

use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::{EnumCount, FromRepr};

const MIN_LAYERS: usize = 7;
const MAX_LAYERS: usize = 9;
const MIN_NODES_IN_LAYER: usize = 2;
const MAX_NODES_IN_LAYER: usize = 4;

/// Kind of encounter behind a map node.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize, EnumCount, FromRepr)]
pub enum MapNode {
    Start,
    Combat,
    End,
}

impl MapNode {
    /// Kinds allowed in the layers between `Start` and `End`.
    pub const INNER: &'static [MapNode] = &[MapNode::Combat];

    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// Directed edge between two map nodes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct MapEdge {
    pub from: usize,
    pub to: usize,
}

impl MapEdge {
    pub const fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }
}

/// Intent produced by the map screen.
///
/// "Nothing happened this frame" is expressed by the absence of an action, not
/// by a dedicated variant.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum GameMapAction {
    PauseGame,
    GoToNode(usize),
}

/// A generated level and the player's progress through it.
///
/// Ordered collections keep the map's presentation stable from frame to frame.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameLevel {
    pub nodes: Vec<MapNode>,
    pub edges: BTreeMap<usize, BTreeSet<usize>>,
    pub current: usize,
    pub visited: BTreeSet<usize>,
}

impl GameLevel {
    /// Generates a fresh level. Node 0 is always the `Start` node and the last
    /// node is always the `End` node.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let layer_count = rng.gen_range(MIN_LAYERS..=MAX_LAYERS);

        let mut layers: Vec<Vec<usize>> = Vec::with_capacity(layer_count);
        let mut nodes = vec![MapNode::Start];
        layers.push(vec![0]);

        for _ in 1..layer_count - 1 {
            let width = rng.gen_range(MIN_NODES_IN_LAYER..=MAX_NODES_IN_LAYER);
            let mut layer = Vec::with_capacity(width);
            for _ in 0..width {
                let kind = MapNode::INNER[rng.gen_range(0..MapNode::INNER.len())];
                layer.push(nodes.len());
                nodes.push(kind);
            }
            layers.push(layer);
        }

        layers.push(vec![nodes.len()]);
        nodes.push(MapNode::End);

        let mut edges: BTreeMap<usize, BTreeSet<usize>> = BTreeMap::new();
        for pair in layers.windows(2) {
            stitch_layers(rng, &pair[0], &pair[1], &mut edges);
        }

        tracing::debug!(
            layers = layer_count,
            nodes = nodes.len(),
            "generated level"
        );

        Self {
            nodes,
            edges,
            current: 0,
            visited: BTreeSet::new(),
        }
    }

    /// Flattened edge list in ascending `(from, to)` order.
    pub fn edge_list(&self) -> Vec<MapEdge> {
        self.edges
            .iter()
            .flat_map(|(&from, tos)| tos.iter().map(move |&to| MapEdge::new(from, to)))
            .collect()
    }

    /// Nodes reachable in one step from `node`.
    pub fn successors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.edges.get(&node).into_iter().flatten().copied()
    }

    pub fn can_travel_to(&self, node: usize) -> bool {
        self.edges
            .get(&self.current)
            .is_some_and(|tos| tos.contains(&node))
    }

    /// Moves along an edge from the current node. Returns `false` and leaves
    /// the level untouched when no such edge exists.
    pub fn travel_to(&mut self, node: usize) -> bool {
        if !self.can_travel_to(node) {
            return false;
        }
        self.visited.insert(self.current);
        self.current = node;
        true
    }

    pub fn is_finished(&self) -> bool {
        self.nodes.get(self.current) == Some(&MapNode::End)
    }
}

/// Connects two adjacent layers with a monotone walk from the first pair to
/// the last pair.
fn stitch_layers<R: Rng>(
    rng: &mut R,
    previous: &[usize],
    current: &[usize],
    edges: &mut BTreeMap<usize, BTreeSet<usize>>,
) {
    let mut p = 0;
    let mut c = 0;

    loop {
        edges.entry(previous[p]).or_default().insert(current[c]);

        let previous_is_last = p == previous.len() - 1;
        let current_is_last = c == current.len() - 1;

        match (previous_is_last, current_is_last) {
            (true, true) => break,
            (false, true) => p += 1,
            (true, false) => c += 1,
            (false, false) => match rng.gen_range(0..3) {
                0 => p += 1,
                1 => c += 1,
                _ => {
                    p += 1;
                    c += 1;
                }
            },
        }
    }
}
