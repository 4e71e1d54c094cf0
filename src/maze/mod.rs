//! Maze parsing and waypoint-graph construction.

pub mod builder;
pub mod graph;
pub mod parser;
