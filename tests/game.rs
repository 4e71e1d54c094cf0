//! Level rules: eating, frightened windows, ghost contact, and clearing.

mod common;

use pretty_assertions::assert_eq;

use chomp::constants::{FREIGHT_SPEED, FREIGHT_TIME, GHOST_SPEED, SPAWN_SPEED};
use chomp::entity::{InputState, Mode};
use chomp::events::GameEvent;
use chomp::game::Level;

const STEP: f32 = 0.1;

fn hold_right() -> InputState {
    InputState {
        right: true,
        ..Default::default()
    }
}

/// Steps until an event matching `want` fires, or panics after `limit` frames.
fn step_until(level: &mut Level, input: InputState, limit: u32, want: fn(&GameEvent) -> bool) -> Vec<GameEvent> {
    for _ in 0..limit {
        let events = level.step(STEP, input);
        if events.iter().any(want) {
            return events;
        }
    }
    panic!("event did not fire within {limit} frames");
}

#[test]
fn standard_level_builds() {
    let level = Level::new().unwrap();

    assert_eq!(level.ghosts.len(), 4);
    assert_eq!(level.score, 0);
    assert!(!level.pellets.is_empty());
}

#[test]
fn walking_over_a_pellet_scores_it() {
    let mut level = Level::from_board(&common::TINY_BOARD).unwrap();

    let events = step_until(&mut level, hold_right(), 20, |e| {
        matches!(e, GameEvent::PelletEaten { .. })
    });

    assert!(events.contains(&GameEvent::PelletEaten { points: 10 }));
    assert_eq!(level.score, 10);
    assert_eq!(level.pellets.eaten, 1);
}

#[test]
fn power_pellet_frightens_the_ghosts() {
    let mut level = Level::from_board(&common::TINY_BOARD).unwrap();

    let events = step_until(&mut level, hold_right(), 20, |e| {
        matches!(e, GameEvent::PowerPelletEaten { .. })
    });

    assert!(events.contains(&GameEvent::PowerPelletEaten { points: 50 }));
    for ghost in level.ghosts.iter() {
        assert_eq!(ghost.mode.current(), Mode::Freight);
        assert_eq!(ghost.body.speed, FREIGHT_SPEED);
    }
}

#[test]
fn freight_expires_back_to_normal() {
    let mut level = Level::from_board(&common::TINY_BOARD).unwrap();
    step_until(&mut level, hold_right(), 20, |e| {
        matches!(e, GameEvent::PowerPelletEaten { .. })
    });

    // Run out the frightened window (plus one frame of slack).
    let frames = (FREIGHT_TIME / STEP) as u32 + 1;
    for _ in 0..frames {
        level.step(STEP, InputState::default());
    }

    for ghost in level.ghosts.iter() {
        assert_ne!(ghost.mode.current(), Mode::Freight);
    }
}

#[test]
fn frightened_ghost_is_eaten_on_contact() {
    let mut level = Level::from_board(&common::TINY_BOARD).unwrap();

    let player_node = level.player.body.node;
    {
        let ghost = level.ghosts.get_mut(0).unwrap();
        ghost.start_freight();
        ghost.body.node = player_node;
        ghost.body.target = player_node;
    }

    let events = level.step(0.0, InputState::default());

    assert!(events.contains(&GameEvent::GhostEaten { points: 200 }));
    assert_eq!(level.score, 200);

    let ghost = level.ghosts.get(0).unwrap();
    assert_eq!(ghost.mode.current(), Mode::Spawn);
    assert_eq!(ghost.body.speed, SPAWN_SPEED);
    // The reward ladder doubled for the rest of the window.
    assert_eq!(level.ghosts.get(1).unwrap().points, 400);
}

#[test]
fn spawn_ghosts_pass_through_the_player() {
    let mut level = Level::from_board(&common::TINY_BOARD).unwrap();

    let player_node = level.player.body.node;
    {
        let ghost = level.ghosts.get_mut(0).unwrap();
        ghost.start_spawn();
        ghost.body.node = player_node;
        ghost.body.target = player_node;
    }

    let events = level.step(0.0, InputState::default());
    assert!(events.is_empty());
}

#[test]
fn hostile_ghost_catches_the_player() {
    let mut level = Level::from_board(&common::TINY_BOARD).unwrap();

    let player_node = level.player.body.node;
    {
        let ghost = level.ghosts.get_mut(0).unwrap();
        ghost.body.node = player_node;
        ghost.body.target = player_node;
    }

    let events = level.step(0.0, InputState::default());
    assert!(events.contains(&GameEvent::PlayerCaught));
}

#[test]
fn ghost_arriving_home_turns_hostile_again() {
    let mut level = Level::from_board(&common::TINY_BOARD).unwrap();

    // Ghost 1 starts on the home node; spawning it is an immediate arrival.
    level.ghosts.get_mut(1).unwrap().start_spawn();
    level.step(0.0, InputState::default());

    let ghost = level.ghosts.get(1).unwrap();
    assert_ne!(ghost.mode.current(), Mode::Spawn);
    assert_eq!(ghost.body.speed, GHOST_SPEED);
}

#[test]
fn last_pellet_clears_the_level() {
    let mut level = Level::from_board(&common::ONE_PELLET_BOARD).unwrap();
    assert_eq!(level.pellets.len(), 1);

    let events = step_until(&mut level, hold_right(), 20, |e| {
        matches!(e, GameEvent::PelletEaten { .. })
    });

    assert!(events.contains(&GameEvent::LevelCleared));
    assert!(level.pellets.is_empty());
}

#[test]
fn reset_keeps_score_and_pellets() {
    let mut level = Level::from_board(&common::TINY_BOARD).unwrap();
    step_until(&mut level, hold_right(), 20, |e| {
        matches!(e, GameEvent::PelletEaten { .. })
    });

    let score = level.score;
    let remaining = level.pellets.len();
    level.reset_positions();

    assert_eq!(level.score, score);
    assert_eq!(level.pellets.len(), remaining);
    assert_eq!(level.player.body.node, level.maze.start.player);
    assert_eq!(level.player.body.position, level.maze.nodes.position(level.maze.start.player));
}
