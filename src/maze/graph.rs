//! The waypoint graph entities travel on.
//!
//! One node per walkable tile, placed at the tile's pixel center and keyed by
//! that integer pixel coordinate. Topology is built once by two independent
//! sweeps over the tile grid and never mutated afterwards; entities hold
//! [`NodeId`] handles into the group rather than references.

use std::collections::HashMap;

use glam::{IVec2, Vec2};
use tracing::trace;

use crate::constants::{MazeTile, TILE_SIZE};
use crate::direction::Direction;

/// A unique identifier for a node, represented by its index in the group's storage.
pub type NodeId = usize;

/// The four neighbor slots of a node.
///
/// Absent connectivity is an empty slot, not an omitted entry; `Stop` never
/// resolves to a neighbor.
#[derive(Debug, Default, Clone, Copy)]
pub struct Neighbors {
    pub up: Option<NodeId>,
    pub down: Option<NodeId>,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

impl Neighbors {
    /// Retrieves the neighbor in the specified direction, if it exists.
    pub fn get(&self, direction: Direction) -> Option<NodeId> {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
            Direction::Stop => None,
        }
    }

    /// Sets the neighbor in the specified direction, overwriting any existing link.
    pub fn set(&mut self, direction: Direction, id: NodeId) {
        match direction {
            Direction::Up => self.up = Some(id),
            Direction::Down => self.down = Some(id),
            Direction::Left => self.left = Some(id),
            Direction::Right => self.right = Some(id),
            Direction::Stop => {}
        }
    }
}

/// A graph vertex at a tile's pixel center.
#[derive(Debug)]
pub struct Node {
    /// The 2D pixel coordinates of the node.
    pub position: Vec2,
    /// Up to four directional neighbor links.
    pub neighbors: Neighbors,
}

/// Owns the full set of nodes, keyed both by index and by pixel coordinate.
#[derive(Debug, Default)]
pub struct NodeGroup {
    nodes: Vec<Node>,
    by_pixel: HashMap<(i32, i32), NodeId>,
}

/// Returns the pixel center of a tile.
pub fn tile_center(col: i32, row: i32) -> Vec2 {
    let t = TILE_SIZE as i32;
    Vec2::new((col * t + t / 2) as f32, (row * t + t / 2) as f32)
}

fn pixel_key(col: i32, row: i32) -> (i32, i32) {
    let t = TILE_SIZE as i32;
    (col * t + t / 2, row * t + t / 2)
}

impl NodeGroup {
    /// Creates a new, empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds nodes and links for every walkable cell of `tiles`, which is
    /// placed at `offset` (in tiles) within the board.
    ///
    /// Construction is three passes: node creation, a row-wise sweep that
    /// produces LEFT/RIGHT links, and a column-wise sweep that produces
    /// UP/DOWN links. Each sweep resets its open run at non-walkable cells.
    pub fn add_tiles(&mut self, tiles: &[Vec<MazeTile>], offset: IVec2) {
        for (y, row) in tiles.iter().enumerate() {
            for (x, tile) in row.iter().enumerate() {
                if tile.is_walkable() {
                    self.add_node(offset.x + x as i32, offset.y + y as i32);
                }
            }
        }

        self.connect_row_wise(tiles, offset);
        self.connect_column_wise(tiles, offset);

        trace!(nodes = self.nodes.len(), "node group extended");
    }

    fn add_node(&mut self, col: i32, row: i32) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node {
            position: tile_center(col, row),
            neighbors: Neighbors::default(),
        });
        self.by_pixel.insert(pixel_key(col, row), id);
        id
    }

    fn connect_row_wise(&mut self, tiles: &[Vec<MazeTile>], offset: IVec2) {
        for (y, row) in tiles.iter().enumerate() {
            let mut run: Option<NodeId> = None;
            for (x, tile) in row.iter().enumerate() {
                if tile.is_walkable() {
                    let current = self.by_pixel[&pixel_key(offset.x + x as i32, offset.y + y as i32)];
                    if let Some(previous) = run {
                        self.link(previous, current, Direction::Right);
                    }
                    run = Some(current);
                } else {
                    run = None;
                }
            }
        }
    }

    fn connect_column_wise(&mut self, tiles: &[Vec<MazeTile>], offset: IVec2) {
        let width = tiles.first().map_or(0, Vec::len);
        for x in 0..width {
            let mut run: Option<NodeId> = None;
            for (y, row) in tiles.iter().enumerate() {
                if row[x].is_walkable() {
                    let current = self.by_pixel[&pixel_key(offset.x + x as i32, offset.y + y as i32)];
                    if let Some(previous) = run {
                        self.link(previous, current, Direction::Down);
                    }
                    run = Some(current);
                } else {
                    run = None;
                }
            }
        }
    }

    /// Links two nodes with mutually-inverse neighbor slots.
    ///
    /// This is also the splice operation used to attach separately-built
    /// sub-graphs (the home pocket) to the main graph.
    pub fn link(&mut self, from: NodeId, to: NodeId, direction: Direction) {
        self.nodes[from].neighbors.set(direction, to);
        self.nodes[to].neighbors.set(direction.opposite(), from);
    }

    /// Retrieves a node by id.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// The pixel position of a node. Panics only on a foreign id, which the
    /// group never hands out.
    pub fn position(&self, id: NodeId) -> Vec2 {
        self.nodes[id].position
    }

    /// The neighbor of `id` in `direction`, if linked.
    pub fn neighbor(&self, id: NodeId, direction: Direction) -> Option<NodeId> {
        self.nodes.get(id)?.neighbors.get(direction)
    }

    /// Looks up the node at a tile coordinate. Out-of-graph tiles yield `None`.
    pub fn node_at_tile(&self, col: i32, row: i32) -> Option<NodeId> {
        self.by_pixel.get(&pixel_key(col, row)).copied()
    }

    /// Looks up the node at an exact pixel coordinate. Misses yield `None`.
    pub fn node_at_pixel(&self, x: i32, y: i32) -> Option<NodeId> {
        self.by_pixel.get(&(x, y)).copied()
    }

    /// Deterministic bootstrap pick: the first node ever inserted.
    pub fn first_node(&self) -> Option<NodeId> {
        if self.nodes.is_empty() {
            None
        } else {
            Some(0)
        }
    }

    /// Returns the total number of nodes in the group.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over all node ids.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        0..self.nodes.len()
    }
}
