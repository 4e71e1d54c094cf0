/// Events emitted by [`crate::game::Level::step`] for the outer game loop
/// (scoreboard, audio, life handling) to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A regular pellet was eaten.
    PelletEaten { points: u32 },
    /// A power pellet was eaten; all ghosts entered the frightened state.
    PowerPelletEaten { points: u32 },
    /// A frightened ghost was eaten and sent back to the home pocket.
    GhostEaten { points: u32 },
    /// The player collided with a hostile ghost.
    PlayerCaught,
    /// The last pellet was eaten.
    LevelCleared,
}
