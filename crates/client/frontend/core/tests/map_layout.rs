//! Generated levels laid out the way the map view draws them.

use client_frontend_core::{EdgeStyle, Graph, LayoutConfig, layered_layout, layers};
use game_core::{GameLevel, MapNode};
use glam::DVec2;
use rand::SeedableRng;
use rand_xoshiro::Xoroshiro128PlusPlus;

fn level(seed: u64) -> GameLevel {
    GameLevel::generate(&mut Xoroshiro128PlusPlus::seed_from_u64(seed))
}

fn graph(level: &GameLevel) -> Graph<u8> {
    Graph::from_parts(
        level.nodes.iter().map(|node| node.code()),
        level.edge_list(),
    )
}

#[test]
fn every_generated_node_gets_a_location() {
    for seed in 0..32 {
        let level = level(seed);
        let layout = layered_layout(&graph(&level), &LayoutConfig::default());
        assert_eq!(layout.len(), level.nodes.len(), "seed {seed}");
    }
}

#[test]
fn start_is_alone_in_the_first_column_and_end_in_the_last() {
    let level = level(11);
    let layers = layers(&graph(&level));

    assert_eq!(layers.first(), Some(&vec![0]));
    let end = level.nodes.len() - 1;
    assert_eq!(level.nodes[end], MapNode::End);
    assert_eq!(layers.last(), Some(&vec![end]));
}

#[test]
fn edges_point_rightwards_and_stay_visible() {
    let level = level(5);
    let layout = layered_layout(&graph(&level), &LayoutConfig::default());
    let style = EdgeStyle::default();

    for edge in level.edge_list() {
        let from = layout[&edge.from];
        let to = layout[&edge.to];
        assert!(to.x > from.x, "edge {edge:?} goes backwards");

        let segment = style
            .resolve(DVec2::new(from.x, from.y), DVec2::new(to.x, to.y))
            .expect("distinct nodes have a segment");
        assert!(segment.to.x > segment.from.x);
    }
}
