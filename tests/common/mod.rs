#![allow(dead_code)]

use glam::IVec2;

use chomp::constants::MazeTile;
use chomp::maze::graph::NodeGroup;
use chomp::maze::parser::BoardParser;

/// Builds a node group from a micro-grid (`+` walkable, `#` wall), anchored
/// at tile (0, 0).
pub fn node_group(rows: &[&str]) -> NodeGroup {
    let tiles: Vec<Vec<MazeTile>> = BoardParser::parse_micro_grid(rows).unwrap();
    let mut nodes = NodeGroup::new();
    nodes.add_tiles(&tiles, IVec2::ZERO);
    nodes
}

/// A single horizontal corridor of `len` tiles; node ids run left to right.
pub fn corridor(len: usize) -> NodeGroup {
    let row = "+".repeat(len);
    node_group(&[row.as_str()])
}

/// A plus-shaped junction:
///
/// ```text
/// #+#        ids:   0
/// +++             1 2 3
/// #+#               4
/// ```
pub fn plus_grid() -> NodeGroup {
    node_group(&["#+#", "+++", "#+#"])
}

/// A 6x6 board with a door, a player start, and two pellets (one power),
/// small enough to walk across in a handful of frames. The rows below the
/// door are solid so the home pocket hangs off the bottom edge by itself.
pub const TINY_BOARD: [&str; 6] = [
    "######",
    "#0.o #",
    "#    #",
    "# == #",
    "######",
    "######",
];

/// Like [`TINY_BOARD`] but with exactly one regular pellet.
pub const ONE_PELLET_BOARD: [&str; 6] = [
    "######",
    "#0.###",
    "#    #",
    "# == #",
    "######",
    "######",
];
