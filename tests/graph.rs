//! Node graph construction and query behavior.

mod common;

use pretty_assertions::assert_eq;

use chomp::direction::{Direction, DIRECTIONS};
use chomp::maze::graph::{tile_center, NodeGroup};

#[test]
fn corridor_links_left_to_right() {
    let nodes = common::corridor(4);

    assert_eq!(nodes.len(), 4);
    assert_eq!(nodes.neighbor(0, Direction::Right), Some(1));
    assert_eq!(nodes.neighbor(1, Direction::Right), Some(2));
    assert_eq!(nodes.neighbor(2, Direction::Right), Some(3));
    assert_eq!(nodes.neighbor(3, Direction::Right), None);
    assert_eq!(nodes.neighbor(0, Direction::Left), None);

    // No vertical links in a single row.
    assert_eq!(nodes.neighbor(1, Direction::Up), None);
    assert_eq!(nodes.neighbor(1, Direction::Down), None);
}

#[test]
fn row_sweep_resets_at_walls() {
    let nodes = common::node_group(&["++#++"]);

    assert_eq!(nodes.len(), 4);
    assert_eq!(nodes.neighbor(0, Direction::Right), Some(1));
    // The wall at column 2 breaks the run; ids 1 and 2 sit on either side.
    assert_eq!(nodes.neighbor(1, Direction::Right), None);
    assert_eq!(nodes.neighbor(2, Direction::Left), None);
    assert_eq!(nodes.neighbor(2, Direction::Right), Some(3));
}

#[test]
fn column_sweep_resets_at_walls() {
    let nodes = common::node_group(&["+", "+", "#", "+"]);

    assert_eq!(nodes.len(), 3);
    assert_eq!(nodes.neighbor(0, Direction::Down), Some(1));
    assert_eq!(nodes.neighbor(1, Direction::Down), None);
    assert_eq!(nodes.neighbor(2, Direction::Up), None);
}

#[test]
fn plus_grid_junction_has_four_neighbors() {
    let nodes = common::plus_grid();

    assert_eq!(nodes.len(), 5);
    assert_eq!(nodes.neighbor(2, Direction::Up), Some(0));
    assert_eq!(nodes.neighbor(2, Direction::Left), Some(1));
    assert_eq!(nodes.neighbor(2, Direction::Right), Some(3));
    assert_eq!(nodes.neighbor(2, Direction::Down), Some(4));
}

#[test]
fn links_are_symmetric() {
    let nodes = common::plus_grid();

    for id in nodes.ids() {
        for direction in DIRECTIONS {
            if let Some(neighbor) = nodes.neighbor(id, direction) {
                assert_eq!(
                    nodes.neighbor(neighbor, direction.opposite()),
                    Some(id),
                    "link {id} -> {neighbor} has no inverse"
                );
            }
        }
    }
}

#[test]
fn stop_never_resolves_to_a_neighbor() {
    let nodes = common::plus_grid();

    for id in nodes.ids() {
        assert_eq!(nodes.neighbor(id, Direction::Stop), None);
    }
}

#[test]
fn lookups_miss_cleanly() {
    let nodes = common::corridor(3);

    assert_eq!(nodes.node_at_tile(0, 0), Some(0));
    assert_eq!(nodes.node_at_tile(3, 0), None);
    assert_eq!(nodes.node_at_tile(0, 1), None);

    // Pixel lookup is exact-center only.
    let center = tile_center(1, 0);
    assert_eq!(nodes.node_at_pixel(center.x as i32, center.y as i32), Some(1));
    assert_eq!(nodes.node_at_pixel(center.x as i32 + 1, center.y as i32), None);
}

#[test]
fn positions_are_tile_centers() {
    let nodes = common::corridor(2);

    assert_eq!(nodes.position(0), tile_center(0, 0));
    assert_eq!(nodes.position(1), tile_center(1, 0));
    assert_eq!(tile_center(1, 0).x, 24.0);
}

#[test]
fn first_node_is_the_first_inserted() {
    let nodes = common::corridor(3);
    assert_eq!(nodes.first_node(), Some(0));

    let empty = NodeGroup::new();
    assert_eq!(empty.first_node(), None);
    assert!(empty.is_empty());
}

#[test]
fn link_splices_disjoint_components() {
    // Two corridors with a gap; a manual link bridges them.
    let mut nodes = common::node_group(&["++#++"]);
    nodes.link(1, 2, Direction::Right);

    assert_eq!(nodes.neighbor(1, Direction::Right), Some(2));
    assert_eq!(nodes.neighbor(2, Direction::Left), Some(1));
}
