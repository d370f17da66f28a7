//! Breadth-first layered layout.
//!
//! Node 0 is the root. Every node reachable from it lands in the layer of its
//! shallowest path; nodes in a layer are ordered by id. Layers become columns
//! and each column splits a span proportional to the widest layer into equal
//! slots.

use std::collections::{BTreeMap, BTreeSet};

use super::Graph;
use crate::config::LayoutConfig;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Location {
    pub x: f64,
    pub y: f64,
}

impl Location {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Positions of the nodes reachable from the root.
pub type Layout = BTreeMap<usize, Location>;

/// Groups reachable nodes by breadth-first depth from node 0.
///
/// A node is placed once, in the first layer that discovers it.
pub fn layers<T>(graph: &Graph<T>) -> Vec<Vec<usize>> {
    if graph.is_empty() {
        return Vec::new();
    }

    let adjacency = graph.adjacency();
    let mut placed = BTreeSet::from([0]);
    let mut layers = vec![vec![0]];

    loop {
        let Some(frontier) = layers.last() else {
            break;
        };

        let mut next = BTreeSet::new();
        for node in frontier {
            for &to in adjacency.get(node).into_iter().flatten() {
                if placed.insert(to) {
                    next.insert(to);
                }
            }
        }

        if next.is_empty() {
            break;
        }
        layers.push(next.into_iter().collect());
    }

    layers
}

/// Assigns a location to every node reachable from node 0.
///
/// `x = layer * column_width + margin`. With `W` the widest layer and `k` the
/// size of the node's layer, `y = slot * (W * row_spacing / k) + half a slot +
/// margin`.
pub fn layered_layout<T>(graph: &Graph<T>, config: &LayoutConfig) -> Layout {
    let layers = layers(graph);
    let widest = layers.iter().map(Vec::len).max().unwrap_or(0);
    let span = widest as f64 * config.row_spacing;

    let mut layout = Layout::new();
    for (depth, layer) in layers.iter().enumerate() {
        let x = depth as f64 * config.column_width + config.margin;
        let slot = span / layer.len() as f64;
        for (index, &node) in layer.iter().enumerate() {
            let y = index as f64 * slot + slot / 2.0 + config.margin;
            layout.insert(node, Location::new(x, y));
        }
    }

    tracing::trace!(
        layers = layers.len(),
        widest,
        placed = layout.len(),
        "computed graph layout"
    );
    layout
}
