use std::time::Duration;

use jewel_raid::host::{self, Host};
use jewel_raid::sim::{FrameInput, GameOverCause, GamePhase, SimulationState};
use jewel_raid::Tuning;
use jewel_raid::consts::FRAME_DT;

const CAP: Duration = Duration::from_secs(600);

#[test]
fn idle_run_ends_paused() {
    let mut game = Host::new(2024, Tuning::default()).expect("valid tuning");
    let summary = game.run_until_paused(CAP, host::idle);

    assert_eq!(summary.phase, GamePhase::Paused);
    assert!(summary.cause.is_some());
    assert_eq!(summary.score, summary.kills as u64 * 10);
    assert!(summary.waves >= 1);
    assert!(!game.state.player.visible);
}

#[test]
fn same_seed_same_run() {
    let run = || {
        Host::new(77, Tuning::default())
            .expect("valid tuning")
            .run_until_paused(CAP, host::sweep)
    };
    let (a, b) = (run(), run());
    assert_eq!(a, b);
}

#[test]
fn clock_expiry_ends_run() {
    let tuning = Tuning {
        game_seconds: 3,
        ..Tuning::default()
    };
    let mut game = Host::new(5, tuning).expect("valid tuning");
    // Parked at the left edge, clear of every formation slot
    let summary = game.run_until_paused(CAP, |_| FrameInput { drag_x: Some(0.0) });

    assert_eq!(summary.cause, Some(GameOverCause::ClockExpired));
    assert_eq!(summary.seconds_remaining, 0);
    assert_eq!(summary.phase, GamePhase::Paused);
    // 3 s countdown plus the explosion (which starts playing on the expiry frame)
    assert!(summary.elapsed_ms >= 3_400 && summary.elapsed_ms < 3_600);
}

#[test]
fn frozen_after_pause() {
    let tuning = Tuning {
        game_seconds: 2,
        ..Tuning::default()
    };
    let mut game = Host::new(5, tuning).expect("valid tuning");
    game.run_until_paused(CAP, host::idle);
    let frames = game.state.frames;
    let projectiles = game.state.projectiles.len();

    for _ in 0..120 {
        assert!(game.step(FRAME_DT, &FrameInput::default()).is_empty());
    }
    assert_eq!(game.state.frames, frames);
    assert_eq!(game.state.projectiles.len(), projectiles);
}

#[test]
fn enemy_collision_ends_run() {
    let tuning = Tuning {
        fire_chance: 0.0,
        boosted_fire_chance: 0.0,
        ..Tuning::default()
    };
    let mut game = Host::new(11, tuning).expect("valid tuning");
    let target_x = game.state.enemies[0].pos.x;
    let summary = game.run_until_paused(CAP, |_| FrameInput {
        drag_x: Some(target_x),
    });

    assert_eq!(summary.cause, Some(GameOverCause::EnemyCollision));
    assert_eq!(summary.score, 0);
    // Formation needs roughly 4 s to reach the ship
    assert!(summary.elapsed_ms < 6_000);
}

#[test]
fn chasing_treasures_grants_boost() {
    let tuning = Tuning {
        base_enemy_count: 0,
        game_seconds: 60,
        treasure_interval_ms: 500,
        ..Tuning::default()
    };
    let mut game = Host::new(3, tuning).expect("valid tuning");
    let chase = |state: &SimulationState| FrameInput {
        drag_x: state
            .treasures
            .iter()
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
            .map(|t| t.pos.x),
    };
    let summary = game.run_until_paused(CAP, chase);

    assert_eq!(summary.cause, Some(GameOverCause::ClockExpired));
    assert!(summary.treasures > 10);
    assert!(summary.boosted);
    assert_eq!(summary.kills, 0);
}

#[test]
fn steep_growth_run_completes() {
    let tuning = Tuning::from_json_str(r#"{ "enemy_growth": 2.0 }"#).expect("valid tuning");
    let mut game = Host::new(5, tuning).expect("valid tuning");
    let summary = game.run_until_paused(CAP, |_| FrameInput { drag_x: Some(0.0) });

    assert_eq!(summary.cause, Some(GameOverCause::ClockExpired));
    assert!(summary.waves >= 40);
    assert!(game.state.enemies.len() <= 2 * 10 * 8);
}
