//! Headless maze-chase simulation core.
//!
//! The crate owns the waypoint graph, entity movement, ghost AI, and pellet
//! bookkeeping; rendering and input polling are external collaborators that
//! read position/direction/mode snapshots once per frame.

pub mod constants;
pub mod direction;
pub mod entity;
pub mod error;
pub mod events;
pub mod game;
pub mod maze;
pub mod pellets;
pub mod vector;
