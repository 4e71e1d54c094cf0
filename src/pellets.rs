//! Collectibles: pellets and flashing power pellets.

use glam::Vec2;

use crate::constants::{
    MazeTile, FLASH_TIME, PELLET_COLLIDE_RADIUS, PELLET_POINTS, POWER_PELLET_COLLIDE_RADIUS, POWER_PELLET_POINTS,
};
use crate::maze::graph::tile_center;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PelletKind {
    Pellet,
    PowerPellet,
}

/// A static collectible at a tile center.
///
/// Pellets never remove themselves; the collection owner reacts to the
/// player's overlap query and performs the removal.
#[derive(Debug, Clone)]
pub struct Pellet {
    pub position: Vec2,
    pub kind: PelletKind,
    pub points: u32,
    pub collide_radius: f32,
    pub visible: bool,
    flash_timer: f32,
}

impl Pellet {
    pub fn new(col: i32, row: i32, kind: PelletKind) -> Self {
        let (points, collide_radius) = match kind {
            PelletKind::Pellet => (PELLET_POINTS, PELLET_COLLIDE_RADIUS),
            PelletKind::PowerPellet => (POWER_PELLET_POINTS, POWER_PELLET_COLLIDE_RADIUS),
        };

        Pellet {
            position: tile_center(col, row),
            kind,
            points,
            collide_radius,
            visible: true,
            flash_timer: 0.0,
        }
    }

    /// Accumulate-and-wrap flash timer; only power pellets blink.
    pub fn update(&mut self, dt: f32) {
        if self.kind != PelletKind::PowerPellet {
            return;
        }

        self.flash_timer += dt;
        if self.flash_timer >= FLASH_TIME {
            self.visible = !self.visible;
            self.flash_timer = 0.0;
        }
    }
}

/// Owns all uneaten pellets of a level.
#[derive(Debug, Default)]
pub struct PelletGroup {
    pub pellets: Vec<Pellet>,
    pub eaten: u32,
}

impl PelletGroup {
    /// Places a pellet at every pellet/power-pellet tile of the grid.
    pub fn from_tiles(tiles: &[Vec<MazeTile>]) -> Self {
        let mut pellets = Vec::new();
        for (row, line) in tiles.iter().enumerate() {
            for (col, tile) in line.iter().enumerate() {
                match tile {
                    MazeTile::Pellet => pellets.push(Pellet::new(col as i32, row as i32, PelletKind::Pellet)),
                    MazeTile::PowerPellet => pellets.push(Pellet::new(col as i32, row as i32, PelletKind::PowerPellet)),
                    _ => {}
                }
            }
        }

        PelletGroup { pellets, eaten: 0 }
    }

    /// Advances the flash timers.
    pub fn update(&mut self, dt: f32) {
        for pellet in &mut self.pellets {
            pellet.update(dt);
        }
    }

    /// Removes and returns the pellet at `index`, counting it as eaten.
    pub fn eat(&mut self, index: usize) -> Pellet {
        self.eaten += 1;
        self.pellets.remove(index)
    }

    pub fn is_empty(&self) -> bool {
        self.pellets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pellets.len()
    }
}
