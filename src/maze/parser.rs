//! Board parsing functionality for converting raw character layouts into structured data.

use glam::IVec2;
use smallvec::SmallVec;

use crate::constants::MazeTile;
use crate::error::ParseError;

/// Represents the parsed data from a raw board layout.
#[derive(Debug)]
pub struct ParsedBoard {
    /// The parsed tile layout, indexed as `tiles[row][col]`.
    pub tiles: Vec<Vec<MazeTile>>,
    /// The positions of the two house-door tiles.
    pub door: [IVec2; 2],
    /// The player's starting tile, if the board declares one.
    pub player_start: Option<IVec2>,
}

impl ParsedBoard {
    pub fn width(&self) -> usize {
        self.tiles.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.tiles.len()
    }
}

/// Parser for converting raw board layouts into structured tile data.
pub struct BoardParser;

impl BoardParser {
    /// Parses a single character into a maze tile.
    pub fn parse_character(c: char) -> Result<MazeTile, ParseError> {
        match c {
            '#' => Ok(MazeTile::Wall),
            '=' => Ok(MazeTile::Door),
            '.' => Ok(MazeTile::Pellet),
            'o' => Ok(MazeTile::PowerPellet),
            ' ' => Ok(MazeTile::Empty),
            'T' => Ok(MazeTile::Empty), // tunnel mouth, plain path to the core
            '0' => Ok(MazeTile::Empty), // player start, tracked separately
            '+' => Ok(MazeTile::Empty), // home micro-grid path
            _ => Err(ParseError::UnknownCharacter(c)),
        }
    }

    /// Parses a raw board layout into structured board data.
    ///
    /// # Errors
    ///
    /// Returns an error if the board contains unknown characters, if rows
    /// differ in width, or if the house door is not defined by exactly two
    /// `=` characters.
    pub fn parse_board(raw_board: &[&str]) -> Result<ParsedBoard, ParseError> {
        let mut tiles = Vec::with_capacity(raw_board.len());
        let mut door: SmallVec<[IVec2; 2]> = SmallVec::new();
        let mut player_start = None;

        let width = raw_board.first().map_or(0, |row| row.len());

        for (y, line) in raw_board.iter().enumerate() {
            if line.len() != width {
                return Err(ParseError::RaggedBoard(width, line.len()));
            }

            let mut row = Vec::with_capacity(width);
            for (x, character) in line.chars().enumerate() {
                let tile = Self::parse_character(character)?;

                match character {
                    '=' => door.push(IVec2::new(x as i32, y as i32)),
                    '0' => player_start = Some(IVec2::new(x as i32, y as i32)),
                    _ => {}
                }

                row.push(tile);
            }
            tiles.push(row);
        }

        if door.len() != 2 {
            return Err(ParseError::InvalidDoorCount(door.len()));
        }

        Ok(ParsedBoard {
            tiles,
            door: [door[0], door[1]],
            player_start,
        })
    }

    /// Parses a micro-grid (e.g. the home pocket) that carries no door or
    /// starting position, only walkable/blocked cells.
    pub fn parse_micro_grid(raw: &[&str]) -> Result<Vec<Vec<MazeTile>>, ParseError> {
        raw.iter()
            .map(|line| line.chars().map(Self::parse_character).collect())
            .collect()
    }
}
