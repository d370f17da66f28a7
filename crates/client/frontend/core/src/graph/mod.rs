//! Directed graphs with per-node data, and their layered layout.

pub mod layout;

use std::collections::{BTreeMap, BTreeSet};

use game_core::MapEdge;

pub use layout::{Layout, Location, layered_layout, layers};

/// A node and the data attached to it. Ids are dense and zero-based.
#[derive(Clone, Debug, PartialEq)]
pub struct Node<T> {
    pub id: usize,
    pub data: T,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
}

impl Edge {
    pub const fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }
}

impl From<MapEdge> for Edge {
    fn from(edge: MapEdge) -> Self {
        Self::new(edge.from, edge.to)
    }
}

/// Ordered nodes plus a set of directed edges.
///
/// Edges may reference ids outside the node range; such references are kept
/// but never placed by the layout.
#[derive(Clone, Debug, PartialEq)]
pub struct Graph<T> {
    nodes: Vec<Node<T>>,
    edges: BTreeSet<Edge>,
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            edges: BTreeSet::new(),
        }
    }
}

impl<T> Graph<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph whose node ids follow the order of `data`.
    pub fn from_parts<D, E>(data: D, edges: E) -> Self
    where
        D: IntoIterator<Item = T>,
        E: IntoIterator,
        E::Item: Into<Edge>,
    {
        let nodes = data
            .into_iter()
            .enumerate()
            .map(|(id, data)| Node { id, data })
            .collect();
        let edges = edges.into_iter().map(Into::into).collect();
        Self { nodes, edges }
    }

    /// Appends a node and returns its id.
    pub fn add_node(&mut self, data: T) -> usize {
        let id = self.nodes.len();
        self.nodes.push(Node { id, data });
        id
    }

    pub fn add_edge(&mut self, from: usize, to: usize) {
        self.edges.insert(Edge::new(from, to));
    }

    pub fn nodes(&self) -> &[Node<T>] {
        &self.nodes
    }

    pub fn node(&self, id: usize) -> Option<&Node<T>> {
        self.nodes.get(id)
    }

    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: usize) -> bool {
        id < self.nodes.len()
    }

    /// Successors of every node that has outgoing edges to known ids.
    pub fn adjacency(&self) -> BTreeMap<usize, BTreeSet<usize>> {
        let mut adjacency: BTreeMap<usize, BTreeSet<usize>> = BTreeMap::new();
        for edge in self.edges.iter().filter(|edge| self.contains(edge.to)) {
            adjacency.entry(edge.from).or_default().insert(edge.to);
        }
        adjacency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_insertion_order() {
        let mut graph = Graph::new();
        assert_eq!(graph.add_node("a"), 0);
        assert_eq!(graph.add_node("b"), 1);
        assert_eq!(graph.node(1).map(|n| n.data), Some("b"));
        assert_eq!(graph.len(), 2);
    }

    #[test]
    fn duplicate_edges_collapse() {
        let graph = Graph::from_parts([(), ()], [Edge::new(0, 1), Edge::new(0, 1)]);
        assert_eq!(graph.edges().count(), 1);
    }

    #[test]
    fn adjacency_drops_unknown_targets() {
        let graph = Graph::from_parts([(), ()], [Edge::new(0, 1), Edge::new(0, 9)]);
        let adjacency = graph.adjacency();
        assert_eq!(adjacency.get(&0), Some(&BTreeSet::from([1])));
    }
}
