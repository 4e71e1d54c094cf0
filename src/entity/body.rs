//! The shared movement capability of every maze entity.
//!
//! A body always sits on the segment between its current node and its target
//! node. Each frame it advances along its direction vector; when the squared
//! distance travelled from the origin node meets the squared distance to the
//! target, it has overshot and is snapped to the target's center before the
//! next edge is chosen. Lateral turns commit only at nodes; 180-degree
//! reversals are immediate.

use glam::Vec2;
use tracing::trace;

use crate::direction::Direction;
use crate::maze::graph::{NodeGroup, NodeId};

/// Movement state shared by the player and the ghosts.
#[derive(Debug, Clone)]
pub struct Body {
    /// Continuous pixel position.
    pub position: Vec2,
    /// The node most recently departed (or occupied, when stalled).
    pub node: NodeId,
    /// The node currently moved toward. Equals `node` when stalled.
    pub target: NodeId,
    pub direction: Direction,
    /// Speed in pixels per second.
    pub speed: f32,
    pub collide_radius: f32,
    pub visible: bool,
}

impl Body {
    pub fn new(nodes: &NodeGroup, start: NodeId, speed: f32, collide_radius: f32) -> Self {
        Body {
            position: nodes.position(start),
            node: start,
            target: start,
            direction: Direction::Stop,
            speed,
            collide_radius,
            visible: true,
        }
    }

    /// Snaps the position exactly onto the current node's center, clearing
    /// any accumulated floating drift.
    pub fn snap_to_node(&mut self, nodes: &NodeGroup) {
        self.position = nodes.position(self.node);
    }

    /// True if the current node has a neighbor in `direction`.
    pub fn valid_direction(&self, nodes: &NodeGroup, direction: Direction) -> bool {
        nodes.neighbor(self.node, direction).is_some()
    }

    /// The neighbor in `direction`, or the current node when there is none.
    fn new_target(&self, nodes: &NodeGroup, direction: Direction) -> NodeId {
        nodes.neighbor(self.node, direction).unwrap_or(self.node)
    }

    /// Whether this frame's motion reached or passed the target node.
    pub fn overshot_target(&self, nodes: &NodeGroup) -> bool {
        let origin = nodes.position(self.node);
        let to_target = nodes.position(self.target) - origin;
        let to_self = self.position - origin;
        to_self.length_squared() >= to_target.length_squared()
    }

    /// Swaps node and target and flips direction: an immediate mid-corridor reversal.
    pub fn reverse(&mut self) {
        self.direction = self.direction.opposite();
        std::mem::swap(&mut self.node, &mut self.target);
    }

    /// Advances the position along the current direction.
    pub fn advance(&mut self, dt: f32) {
        self.position += self.direction.vector() * self.speed * dt;
    }

    /// Lands on the target node after an overshoot.
    pub fn land(&mut self, nodes: &NodeGroup) {
        self.node = self.target;
        self.snap_to_node(nodes);
    }

    /// Picks the next target from the node just landed on.
    ///
    /// Tries `desired` first; the direction changes only if that neighbor
    /// exists. Otherwise the body continues straight, and if that is also
    /// blocked it stalls in place.
    pub fn depart(&mut self, nodes: &NodeGroup, desired: Direction) {
        self.target = self.new_target(nodes, desired);
        if self.target != self.node {
            self.direction = desired;
        } else {
            self.target = self.new_target(nodes, self.direction);
        }
        if self.target == self.node && self.direction != Direction::Stop {
            trace!(node = self.node, "entity stalled");
            self.direction = Direction::Stop;
        }
    }

    /// Runs one frame of the full movement contract with an externally
    /// resolved desired direction (the player's input intent).
    pub fn update(&mut self, nodes: &NodeGroup, dt: f32, desired: Direction) {
        self.advance(dt);
        if self.overshot_target(nodes) {
            self.land(nodes);
            self.depart(nodes, desired);
        } else if desired != Direction::Stop && desired == self.direction.opposite() {
            self.reverse();
        }
    }

    /// Closed-boundary circle overlap test; symmetric and side-effect free.
    pub fn collides_with(&self, other: &Body) -> bool {
        let radii = self.collide_radius + other.collide_radius;
        (self.position - other.position).length_squared() <= radii * radii
    }

    /// Overlap test against a bare position/radius pair (collectibles).
    pub fn collides_with_point(&self, position: Vec2, radius: f32) -> bool {
        let radii = self.collide_radius + radius;
        (self.position - position).length_squared() <= radii * radii
    }
}
