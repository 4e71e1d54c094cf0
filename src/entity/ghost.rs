//! Ghost agents: per-personality pursuit goals, greedy goal-seeking
//! steering, and the frightened/spawn overrides.

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use smallvec::SmallVec;
use tracing::debug;

use crate::constants::{
    BOARD_PIXEL_SIZE, FREIGHT_SPEED, GHOST_COLLIDE_RADIUS, GHOST_POINTS, GHOST_SPEED, SPAWN_SPEED, TILE_SIZE,
};
use crate::direction::{Direction, PRIORITY};
use crate::entity::body::Body;
use crate::entity::modes::{Mode, ModeController, ModeTimings};
use crate::maze::builder::Maze;
use crate::maze::graph::{NodeGroup, NodeId};

/// Handle of a ghost within its [`GhostGroup`] registry.
pub type GhostId = usize;

/// The four pursuit strategies, one per ghost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Personality {
    /// Chases the player's current position.
    Direct,
    /// Aims four tiles ahead of the player's facing.
    Ambush,
    /// Reflects a point two tiles ahead of the player through a partner ghost.
    Flank { partner: GhostId },
    /// Offset-chases until within eight tiles of the player, then retreats
    /// to its own scatter corner.
    ProximityGated,
}

/// Read-only world snapshot the steering policies consume each frame.
///
/// Ghost positions are captured before any ghost moves, so the flank
/// computation always reads the previous frame's partner position and the
/// in-frame update order does not matter.
pub struct SteerContext<'a> {
    pub player_position: Vec2,
    pub player_direction: Direction,
    pub ghost_positions: &'a [Vec2],
}

/// A pursuing agent with a mode state machine and a steering personality.
pub struct Ghost {
    pub body: Body,
    pub personality: Personality,
    pub mode: ModeController,
    /// The maze-space point the steering policy currently seeks. Distinct
    /// from the body's target, which is the next graph node.
    pub goal: Vec2,
    /// Fixed corner sought while scattering.
    pub scatter_corner: Vec2,
    /// Node sought while returning after being eaten.
    pub home_node: NodeId,
    /// Current reward for eating this ghost while frightened.
    pub points: u32,
    rng: SmallRng,
}

impl Ghost {
    pub fn new(nodes: &NodeGroup, start: NodeId, home_node: NodeId, personality: Personality, scatter_corner: Vec2) -> Self {
        Ghost {
            body: Body::new(nodes, start, GHOST_SPEED, GHOST_COLLIDE_RADIUS),
            personality,
            mode: ModeController::new(ModeTimings::default()),
            goal: scatter_corner,
            scatter_corner,
            home_node,
            points: GHOST_POINTS,
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Replaces the frightened-steering RNG with a seeded one, for
    /// deterministic runs.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = SmallRng::seed_from_u64(seed);
    }

    /// Runs one frame: mode clock, goal computation, motion, and (at node
    /// arrivals) the next steering choice.
    pub fn update(&mut self, nodes: &NodeGroup, dt: f32, ctx: &SteerContext) {
        self.mode.update(dt);
        self.goal = match self.mode.current() {
            Mode::Scatter => self.scatter_corner,
            Mode::Chase => self.chase_goal(ctx),
            Mode::Spawn => nodes.position(self.home_node),
            // Undirected while frightened; the goal is not consulted.
            Mode::Freight => self.goal,
        };

        self.body.advance(dt);
        if self.body.overshot_target(nodes) {
            self.body.land(nodes);
            let choice = match self.mode.current() {
                Mode::Freight => self.random_direction(nodes),
                _ => self.goal_direction(nodes),
            };
            self.body.depart(nodes, choice);
        }
    }

    /// The chase-mode goal for this ghost's personality.
    pub fn chase_goal(&self, ctx: &SteerContext) -> Vec2 {
        match self.personality {
            Personality::Direct => ctx.player_position,
            Personality::Ambush => ctx.player_position + ctx.player_direction.tiles(4.0),
            Personality::Flank { partner } => {
                let ahead = ctx.player_position + ctx.player_direction.tiles(2.0);
                // A partner missing from the snapshot degrades to reflecting
                // through our own position.
                let partner = ctx.ghost_positions.get(partner).copied().unwrap_or(self.body.position);
                partner + (ahead - partner) * 2.0
            }
            Personality::ProximityGated => {
                let gate = (TILE_SIZE * 8) as f32;
                let d2 = (ctx.player_position - self.body.position).length_squared();
                // Strictly inside the eight-tile circle retreats; the exact
                // boundary still chases.
                if d2 < gate * gate {
                    self.scatter_corner
                } else {
                    ctx.player_position + ctx.player_direction.tiles(4.0)
                }
            }
        }
    }

    /// Valid departure directions from the current node, excluding the
    /// immediate reverse unless reversing is the only option.
    fn candidate_directions(&self, nodes: &NodeGroup) -> SmallVec<[Direction; 4]> {
        let opposite = self.body.direction.opposite();
        let mut candidates: SmallVec<[Direction; 4]> = PRIORITY
            .into_iter()
            .filter(|&d| d != opposite && self.body.valid_direction(nodes, d))
            .collect();

        if candidates.is_empty() && self.body.valid_direction(nodes, opposite) {
            candidates.push(opposite);
        }
        candidates
    }

    /// Greedy goal-seeking choice: the candidate whose neighbor node lies
    /// closest (squared distance) to the goal. Candidates are evaluated in
    /// priority order, so ties resolve up, left, down, right.
    fn goal_direction(&self, nodes: &NodeGroup) -> Direction {
        let mut best = Direction::Stop;
        let mut best_d2 = f32::INFINITY;

        for direction in self.candidate_directions(nodes) {
            if let Some(neighbor) = nodes.neighbor(self.body.node, direction) {
                let d2 = (nodes.position(neighbor) - self.goal).length_squared();
                if d2 < best_d2 {
                    best_d2 = d2;
                    best = direction;
                }
            }
        }
        best
    }

    /// Undirected frightened steering: a uniform pick among the candidates.
    fn random_direction(&mut self, nodes: &NodeGroup) -> Direction {
        let candidates = self.candidate_directions(nodes);
        candidates.choose(&mut self.rng).copied().unwrap_or(Direction::Stop)
    }

    /// Enters the frightened state: reduced speed, undirected steering.
    pub fn start_freight(&mut self) {
        self.mode.set_freight();
        self.body.speed = FREIGHT_SPEED;
        debug!(mode = %self.mode.current(), "ghost frightened");
    }

    /// Enters the spawn state: raised speed, goal pinned to the home node.
    pub fn start_spawn(&mut self) {
        self.mode.set_spawn();
        self.body.speed = SPAWN_SPEED;
        debug!(mode = %self.mode.current(), "ghost returning home");
    }

    /// Restores normal speed and the interrupted scatter/chase phase.
    pub fn normal_mode(&mut self) {
        self.mode.set_normal();
        self.body.speed = GHOST_SPEED;
    }

    /// True once a spawning ghost is stopped on or moving out of its home node.
    pub fn reached_home(&self) -> bool {
        self.mode.current() == Mode::Spawn && self.body.node == self.home_node
    }
}

/// Externally-owned registry of the four ghosts; strategies reference each
/// other through [`GhostId`] handles rather than embedded references.
pub struct GhostGroup {
    ghosts: Vec<Ghost>,
}

impl GhostGroup {
    /// Creates the classic four: direct chaser, ambusher, flanker (partnered
    /// with the direct chaser), and the proximity-gated one, each with its
    /// own scatter corner.
    pub fn new(maze: &Maze) -> Self {
        let nodes = &maze.nodes;
        let start = maze.start;
        let board = BOARD_PIXEL_SIZE.as_vec2();
        let home = start.home_center;

        let ghosts = vec![
            Ghost::new(nodes, start.home_entrance, home, Personality::Direct, Vec2::ZERO),
            Ghost::new(nodes, start.home_center, home, Personality::Ambush, Vec2::new(board.x, 0.0)),
            Ghost::new(
                nodes,
                start.home_left,
                home,
                Personality::Flank { partner: 0 },
                Vec2::new(board.x, board.y),
            ),
            Ghost::new(
                nodes,
                start.home_right,
                home,
                Personality::ProximityGated,
                Vec2::new(0.0, board.y),
            ),
        ];

        GhostGroup { ghosts }
    }

    /// Updates every ghost in fixed order against a shared previous-frame
    /// position snapshot.
    pub fn update(&mut self, nodes: &NodeGroup, dt: f32, player_position: Vec2, player_direction: Direction) {
        let snapshot: SmallVec<[Vec2; 4]> = self.ghosts.iter().map(|g| g.body.position).collect();
        let ctx = SteerContext {
            player_position,
            player_direction,
            ghost_positions: &snapshot,
        };

        for ghost in &mut self.ghosts {
            ghost.update(nodes, dt, &ctx);
        }
    }

    /// Frightens every ghost and resets the point ladder.
    pub fn start_freight(&mut self) {
        for ghost in &mut self.ghosts {
            ghost.start_freight();
        }
        self.reset_points();
    }

    /// Doubles the reward of every ghost, called after one is eaten.
    pub fn update_points(&mut self) {
        for ghost in &mut self.ghosts {
            ghost.points *= 2;
        }
    }

    pub fn reset_points(&mut self) {
        for ghost in &mut self.ghosts {
            ghost.points = GHOST_POINTS;
        }
    }

    pub fn get(&self, id: GhostId) -> Option<&Ghost> {
        self.ghosts.get(id)
    }

    pub fn get_mut(&mut self, id: GhostId) -> Option<&mut Ghost> {
        self.ghosts.get_mut(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ghost> {
        self.ghosts.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Ghost> {
        self.ghosts.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.ghosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ghosts.is_empty()
    }
}
