//! Maze assembly: board parsing, graph construction, and the home-pocket splice.

use glam::IVec2;
use tracing::debug;

use crate::constants::{MazeTile, HOME_BOARD, HOME_ENTRANCE};
use crate::direction::Direction;
use crate::error::{GameResult, MazeError};
use crate::maze::graph::{NodeGroup, NodeId};
use crate::maze::parser::BoardParser;

/// The starting nodes of the entities in the game.
#[derive(Debug, Clone, Copy)]
pub struct StartNodes {
    pub player: NodeId,
    /// Node just above the door; the direct-chaser starts here.
    pub home_entrance: NodeId,
    /// Center of the home pocket; also the spawn target for eaten ghosts.
    pub home_center: NodeId,
    pub home_left: NodeId,
    pub home_right: NodeId,
}

/// The main maze structure containing the tile grid and navigation graph.
#[derive(Debug)]
pub struct Maze {
    /// The waypoint graph for entity movement.
    pub nodes: NodeGroup,
    /// Starting nodes for the player and ghosts.
    pub start: StartNodes,
    /// The raw tile data for the main board, indexed as `tiles[row][col]`.
    tiles: Vec<Vec<MazeTile>>,
}

impl Maze {
    /// Builds a maze from a raw board layout.
    ///
    /// The main grid is swept into a graph, then the home pocket is built
    /// from its own micro-grid and spliced in through the two nodes flanking
    /// the house door.
    pub fn new(raw_board: &[&str]) -> GameResult<Maze> {
        let parsed = BoardParser::parse_board(raw_board)?;

        let mut nodes = NodeGroup::new();
        nodes.add_tiles(&parsed.tiles, IVec2::ZERO);

        let player_tile = parsed.player_start.ok_or(MazeError::MissingPlayerStart)?;
        let player = nodes
            .node_at_tile(player_tile.x, player_tile.y)
            .ok_or(MazeError::NodeNotFound(player_tile.x, player_tile.y))?;

        let start = Self::build_home(&mut nodes, parsed.door, player)?;

        debug!(
            nodes = nodes.len(),
            player = start.player,
            home = start.home_center,
            "maze assembled"
        );

        Ok(Maze {
            nodes,
            start,
            tiles: parsed.tiles,
        })
    }

    /// Builds the home pocket from [`HOME_BOARD`] and splices it into the
    /// main graph at the two door-flank nodes.
    fn build_home(nodes: &mut NodeGroup, door: [IVec2; 2], player: NodeId) -> GameResult<StartNodes> {
        let home_tiles = BoardParser::parse_micro_grid(&HOME_BOARD)?;
        // Align the pocket so its entrance cell sits on the left door tile;
        // the splice edges then stay horizontal whatever the board layout.
        let offset = door[0] - IVec2::new(HOME_ENTRANCE.0, HOME_ENTRANCE.1);
        nodes.add_tiles(&home_tiles, offset);

        let home_node = |nodes: &NodeGroup, x: i32, y: i32| -> GameResult<NodeId> {
            nodes
                .node_at_tile(offset.x + x, offset.y + y)
                .ok_or_else(|| MazeError::NodeNotFound(offset.x + x, offset.y + y).into())
        };

        let home_entrance = home_node(nodes, 2, 0)?;
        let home_center = home_node(nodes, 2, 2)?;
        let home_left = home_node(nodes, 1, 2)?;
        let home_right = home_node(nodes, 3, 2)?;

        // Splice points: the walkable nodes immediately left of the left door
        // tile and right of the right door tile.
        let left_flank = door[0] + IVec2::new(-1, 0);
        let right_flank = door[1] + IVec2::new(1, 0);

        let left_node = nodes
            .node_at_tile(left_flank.x, left_flank.y)
            .ok_or(MazeError::NodeNotFound(left_flank.x, left_flank.y))?;
        let right_node = nodes
            .node_at_tile(right_flank.x, right_flank.y)
            .ok_or(MazeError::NodeNotFound(right_flank.x, right_flank.y))?;

        nodes.link(home_entrance, left_node, Direction::Left);
        nodes.link(home_entrance, right_node, Direction::Right);

        Ok(StartNodes {
            player,
            home_entrance,
            home_center,
            home_left,
            home_right,
        })
    }

    /// The raw tile grid, for collectible placement and renderers.
    pub fn tiles(&self) -> &[Vec<MazeTile>] {
        &self.tiles
    }
}
