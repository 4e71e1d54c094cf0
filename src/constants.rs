//! This module contains all the constants used in the simulation.

use glam::UVec2;

/// The size of each board tile, in pixels.
pub const TILE_SIZE: u32 = 16;
/// The size of the game board, in tiles.
pub const BOARD_SIZE: UVec2 = UVec2::new(28, 31);
/// The size of the game board, in pixels.
pub const BOARD_PIXEL_SIZE: UVec2 = UVec2::new(BOARD_SIZE.x * TILE_SIZE, BOARD_SIZE.y * TILE_SIZE);

/// Player movement speed, in pixels per second.
pub const PLAYER_SPEED: f32 = 100.0;
/// Ghost movement speed in scatter/chase, in pixels per second.
pub const GHOST_SPEED: f32 = 80.0;
/// Ghost movement speed while frightened.
pub const FREIGHT_SPEED: f32 = 40.0;
/// Ghost movement speed while returning to the home pocket.
pub const SPAWN_SPEED: f32 = 120.0;

/// Collision radius of the player, in pixels.
pub const PLAYER_COLLIDE_RADIUS: f32 = 5.0;
/// Collision radius of a ghost, in pixels.
pub const GHOST_COLLIDE_RADIUS: f32 = 5.0;
/// Collision radius of a regular pellet.
pub const PELLET_COLLIDE_RADIUS: f32 = 2.0;
/// Collision radius of a power pellet.
pub const POWER_PELLET_COLLIDE_RADIUS: f32 = 6.0;

/// Seconds per scatter phase of the default mode oscillation.
pub const SCATTER_TIME: f32 = 7.0;
/// Seconds per chase phase of the default mode oscillation.
pub const CHASE_TIME: f32 = 20.0;
/// Seconds the frightened state lasts before the level restores normal mode.
pub const FREIGHT_TIME: f32 = 7.0;
/// Seconds between visibility toggles of a flashing power pellet.
pub const FLASH_TIME: f32 = 0.2;

/// Points for a regular pellet.
pub const PELLET_POINTS: u32 = 10;
/// Points for a power pellet.
pub const POWER_PELLET_POINTS: u32 = 50;
/// Base points for eating a frightened ghost; doubles per ghost eaten.
pub const GHOST_POINTS: u32 = 200;

/// An enum representing the different types of tiles on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeTile {
    /// A walkable tile with nothing on it.
    Empty,
    /// A wall tile.
    Wall,
    /// A walkable tile holding a regular pellet.
    Pellet,
    /// A walkable tile holding a power pellet.
    PowerPellet,
    /// The ghost-house door; blocks the sweep like a wall.
    Door,
}

impl MazeTile {
    /// Returns true if entities can occupy this tile.
    pub fn is_walkable(self) -> bool {
        matches!(self, MazeTile::Empty | MazeTile::Pellet | MazeTile::PowerPellet)
    }
}

/// The raw layout of the game board, as a 2D array of characters.
pub const BOARD: [&str; BOARD_SIZE.y as usize] = [
    "############################",
    "#............##............#",
    "#.####.#####.##.#####.####.#",
    "#o####.#####.##.#####.####o#",
    "#.####.#####.##.#####.####.#",
    "#..........................#",
    "#.####.##.########.##.####.#",
    "#.####.##.########.##.####.#",
    "#......##....##....##......#",
    "######.##### ## #####.######",
    "     #.##### ## #####.#     ",
    "     #.##    ==    ##.#     ",
    "     #.## ######## ##.#     ",
    "######.## ######## ##.######",
    "T     .   ########   .     T",
    "######.## ######## ##.######",
    "     #.## ######## ##.#     ",
    "     #.##          ##.#     ",
    "     #.## ######## ##.#     ",
    "######.## ######## ##.######",
    "#............##............#",
    "#.####.#####.##.#####.####.#",
    "#.####.#####.##.#####.####.#",
    "#o..##.......0 .......##..o#",
    "###.##.##.########.##.##.###",
    "###.##.##.########.##.##.###",
    "#......##....##....##......#",
    "#.##########.##.##########.#",
    "#.##########.##.##########.#",
    "#..........................#",
    "############################",
];

/// The home pocket micro-grid, built separately and spliced into the main
/// graph. `+` cells are walkable. The grid is positioned so that
/// [`HOME_ENTRANCE`] lands on the board's left door tile.
pub const HOME_BOARD: [&str; 5] = [
    "##+##",
    "##+##",
    "+++++",
    "+###+",
    "+###+",
];

/// Grid coordinates of the entrance cell within [`HOME_BOARD`].
pub const HOME_ENTRANCE: (i32, i32) = (2, 0);
