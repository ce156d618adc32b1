use std::time::{Duration, Instant};

use mazerace::{GameState, Rules, Session};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn level_clear_grows_the_grid() {
    let mut rng = StdRng::seed_from_u64(1);
    let t0 = Instant::now();
    let mut session = Session::new(Rules::default(), t0, &mut rng).unwrap();

    assert_eq!(session.level, 1);
    assert_eq!((session.grid.rows, session.grid.cols), (3, 3));

    session.skip_level();
    session.tick(t0 + Duration::from_millis(16), &mut rng).unwrap();

    assert_eq!(session.level, 2);
    assert_eq!((session.grid.rows, session.grid.cols), (4, 4));
    assert_eq!(session.player_cell, 0);
    assert_eq!(session.agent_cell, 0);
    assert_eq!(session.state, GameState::Playing);
}

#[test]
fn clearing_every_level_wins_the_game() {
    let mut rng = StdRng::seed_from_u64(2);
    let t0 = Instant::now();
    let mut session = Session::new(Rules::default(), t0, &mut rng).unwrap();

    // 24 clears take level 1 to level 25; each skip+tick clears exactly once
    for i in 0..24u64 {
        session.skip_level();
        session.tick(t0 + Duration::from_millis(16 * (i + 1)), &mut rng).unwrap();
    }
    assert_eq!(session.level, 25);
    assert_eq!((session.grid.rows, session.grid.cols), (27, 27));
    assert_eq!(session.state, GameState::Playing);

    // Clearing the final level is the win
    session.skip_level();
    session.tick(t0 + Duration::from_secs(1), &mut rng).unwrap();
    assert_eq!(session.state, GameState::Won);
    assert_eq!(session.status_message(), Some("YOU WIN!"));

    // Terminal until restarted
    session.skip_level();
    session.tick(t0 + Duration::from_secs(2), &mut rng).unwrap();
    assert_eq!(session.state, GameState::Won);

    session.restart(t0 + Duration::from_secs(3), &mut rng).unwrap();
    assert_eq!(session.level, 1);
    assert_eq!((session.grid.rows, session.grid.cols), (3, 3));
    assert_eq!(session.player_cell, 0);
    assert_eq!(session.state, GameState::Playing);
}

#[test]
fn short_run_with_custom_rules() {
    let rules = Rules {
        levels_to_win: 2,
        ..Rules::default()
    };
    let mut rng = StdRng::seed_from_u64(5);
    let t0 = Instant::now();
    let mut session = Session::new(rules, t0, &mut rng).unwrap();

    session.skip_level();
    session.tick(t0 + Duration::from_millis(16), &mut rng).unwrap();
    assert_eq!(session.level, 2);

    session.skip_level();
    session.tick(t0 + Duration::from_millis(32), &mut rng).unwrap();
    assert_eq!(session.state, GameState::Won);
}

#[test]
fn idle_player_loses_the_race() {
    let mut rng = StdRng::seed_from_u64(123);
    let t0 = Instant::now();
    let mut session = Session::new(Rules::default(), t0, &mut rng).unwrap();

    // Never move the player; step the clock past the maximum agent delay
    // every tick so the agent walks its whole path to the exit. Levels where
    // the exit lands on cell 0 clear instantly and just advance the run.
    let mut now = t0;
    let mut guard = 0;
    while session.state == GameState::Playing {
        now += Duration::from_millis(300);
        session.tick(now, &mut rng).unwrap();
        guard += 1;
        assert!(guard < 50_000, "race never terminated");
    }

    assert_eq!(session.state, GameState::GameOver);
    assert_eq!(session.status_message(), Some("GAME OVER!"));
    assert_eq!(session.agent_cell, session.exit_cell);
    assert_eq!(session.agent_steps_remaining(), 0);

    session.restart(now, &mut rng).unwrap();
    assert_eq!(session.state, GameState::Playing);
    assert_eq!(session.level, 1);
    assert_eq!(session.agent_cell, 0);
}
