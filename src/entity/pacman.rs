//! The player agent.

use crate::constants::{PLAYER_COLLIDE_RADIUS, PLAYER_SPEED};
use crate::direction::Direction;
use crate::entity::body::Body;
use crate::entity::ghost::Ghost;
use crate::maze::graph::{NodeGroup, NodeId};
use crate::pellets::Pellet;

/// Raw held-key state, polled by the outer loop and handed in each frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl InputState {
    /// Resolves held keys to a movement intent, first match wins:
    /// up, down, left, right.
    pub fn intent(&self) -> Direction {
        if self.up {
            Direction::Up
        } else if self.down {
            Direction::Down
        } else if self.left {
            Direction::Left
        } else if self.right {
            Direction::Right
        } else {
            Direction::Stop
        }
    }
}

/// The player-controlled entity.
pub struct Pacman {
    pub body: Body,
}

impl Pacman {
    pub fn new(nodes: &NodeGroup, start: NodeId) -> Self {
        Pacman {
            body: Body::new(nodes, start, PLAYER_SPEED, PLAYER_COLLIDE_RADIUS),
        }
    }

    /// Runs one frame of input-driven movement.
    pub fn update(&mut self, nodes: &NodeGroup, dt: f32, input: InputState) {
        self.body.update(nodes, dt, input.intent());
    }

    /// Returns the index of the first visible pellet the player overlaps.
    ///
    /// The caller owns the collection and performs the removal.
    pub fn eat_pellets(&self, pellets: &[Pellet]) -> Option<usize> {
        pellets
            .iter()
            .position(|pellet| pellet.visible && self.body.collides_with_point(pellet.position, pellet.collide_radius))
    }

    pub fn collides_with_ghost(&self, ghost: &Ghost) -> bool {
        self.body.collides_with(&ghost.body)
    }
}
