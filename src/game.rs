//! Level orchestration: the fixed per-frame update order and the game rules
//! that consume the core's collision predicates.
//!
//! This is the simulation-context layer an outer loop drives once per frame;
//! it owns everything the frame touches and passes explicit references down,
//! never globals.

use tracing::debug;

use crate::constants::{BOARD, FREIGHT_TIME};
use crate::entity::ghost::GhostGroup;
use crate::entity::modes::Mode;
use crate::entity::pacman::{InputState, Pacman};
use crate::error::GameResult;
use crate::events::GameEvent;
use crate::maze::builder::Maze;
use crate::pellets::{PelletGroup, PelletKind};

/// One playable level: maze, collectibles, player, and ghosts.
pub struct Level {
    pub maze: Maze,
    pub pellets: PelletGroup,
    pub player: Pacman,
    pub ghosts: GhostGroup,
    pub score: u32,
    /// Remaining frightened time, when a power pellet is active.
    freight_timer: Option<f32>,
}

impl Level {
    /// Builds the standard level from [`BOARD`].
    pub fn new() -> GameResult<Self> {
        Self::from_board(&BOARD)
    }

    /// Builds a level from an arbitrary board layout.
    pub fn from_board(board: &[&str]) -> GameResult<Self> {
        let maze = Maze::new(board)?;
        let pellets = PelletGroup::from_tiles(maze.tiles());
        let player = Pacman::new(&maze.nodes, maze.start.player);
        let ghosts = GhostGroup::new(&maze);

        Ok(Level {
            maze,
            pellets,
            player,
            ghosts,
            score: 0,
            freight_timer: None,
        })
    }

    /// Advances the simulation by one fixed step.
    ///
    /// Update order is fixed: player, collectibles, ghosts, then the
    /// collision rules. Returned events are for the outer loop (score HUD,
    /// audio, life handling) to react to.
    pub fn step(&mut self, dt: f32, input: InputState) -> Vec<GameEvent> {
        let mut events = Vec::new();

        self.player.update(&self.maze.nodes, dt, input);
        self.pellets.update(dt);
        self.ghosts
            .update(&self.maze.nodes, dt, self.player.body.position, self.player.body.direction);

        self.update_freight_timer(dt);
        self.check_pellets(&mut events);
        self.check_ghosts(&mut events);

        events
    }

    /// Counts down the frightened window and restores normal mode on expiry.
    /// The mode controller never does this by itself; it is a game rule.
    fn update_freight_timer(&mut self, dt: f32) {
        let Some(remaining) = self.freight_timer else {
            return;
        };

        let remaining = remaining - dt;
        if remaining > 0.0 {
            self.freight_timer = Some(remaining);
            return;
        }

        self.freight_timer = None;
        for ghost in self.ghosts.iter_mut() {
            if ghost.mode.current() == Mode::Freight {
                ghost.normal_mode();
            }
        }
        debug!("freight window expired");
    }

    fn check_pellets(&mut self, events: &mut Vec<GameEvent>) {
        let Some(index) = self.player.eat_pellets(&self.pellets.pellets) else {
            return;
        };

        let pellet = self.pellets.eat(index);
        self.score += pellet.points;

        match pellet.kind {
            PelletKind::Pellet => events.push(GameEvent::PelletEaten { points: pellet.points }),
            PelletKind::PowerPellet => {
                self.ghosts.start_freight();
                self.freight_timer = Some(FREIGHT_TIME);
                events.push(GameEvent::PowerPelletEaten { points: pellet.points });
            }
        }

        if self.pellets.is_empty() {
            events.push(GameEvent::LevelCleared);
        }
    }

    fn check_ghosts(&mut self, events: &mut Vec<GameEvent>) {
        for id in 0..self.ghosts.len() {
            // Spawn ghosts that made it home become hostile again.
            if self.ghosts.get(id).is_some_and(|g| g.reached_home()) {
                if let Some(ghost) = self.ghosts.get_mut(id) {
                    ghost.normal_mode();
                }
            }

            let Some(ghost) = self.ghosts.get(id) else { continue };
            if !self.player.collides_with_ghost(ghost) {
                continue;
            }

            match ghost.mode.current() {
                Mode::Freight => {
                    let points = ghost.points;
                    self.score += points;
                    if let Some(ghost) = self.ghosts.get_mut(id) {
                        ghost.start_spawn();
                    }
                    self.ghosts.update_points();
                    events.push(GameEvent::GhostEaten { points });
                }
                // Eyes heading home pass straight through the player.
                Mode::Spawn => {}
                _ => events.push(GameEvent::PlayerCaught),
            }
        }
    }

    /// Puts the player and ghosts back on their start nodes after a death,
    /// keeping the score and remaining pellets.
    pub fn reset_positions(&mut self) {
        self.player = Pacman::new(&self.maze.nodes, self.maze.start.player);
        self.ghosts = GhostGroup::new(&self.maze);
        self.freight_timer = None;
    }
}
