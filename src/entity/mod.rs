//! Moving entities: the shared movement body, the player, and the ghosts.

pub mod body;
pub mod ghost;
pub mod modes;
pub mod pacman;

pub use body::Body;
pub use ghost::{Ghost, GhostGroup, GhostId, Personality, SteerContext};
pub use modes::{Mode, ModeController, ModeTimings};
pub use pacman::{InputState, Pacman};
