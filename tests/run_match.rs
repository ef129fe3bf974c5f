use itertools::Itertools;
use log::LevelFilter;

use basketball_game::game::algebra_2d::intersection_test_aabb_aabb;
use basketball_game::game::mechanics::{
    BasketballMechanics, GameControl, GameInput, GameState,
};

#[ctor::ctor]
fn init() {
    env_logger::builder()
        .format_timestamp_secs()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init()
}

fn assert_no_player_overlap(state: &GameState) {
    let overlapping = state
        .players()
        .map(|(id, player)| (id, player.rect()))
        .tuple_combinations()
        .find(|((_, a), (_, b))| intersection_test_aabb_aabb(a, b));
    if let Some(((a, _), (b, _))) = overlapping {
        panic!("players {a:?} and {b:?} overlap");
    }
}

#[test]
fn random_kickoff_ends_in_possession() {
    let mut mechanics = BasketballMechanics::from_state(GameState::default());

    let mut steps = 0;
    let state = loop {
        let state = mechanics.time_step(GameInput::none());
        steps += 1;
        if state.ball.is_in_possession() {
            break state;
        }
        assert!(steps < 5_000, "no possession after {steps} steps");
    };

    let holder = state.ball.possession.unwrap();
    assert_eq!(state.ball.position, state.player(holder).position);
    log::info!(
        "{} gains possession after {} steps",
        state.player(holder).profile.name,
        steps
    );
}

#[test]
fn players_never_overlap_during_a_chase() {
    let mut mechanics = BasketballMechanics::from_state(GameState::default());
    assert_no_player_overlap(mechanics.state());

    for step in 0..1_000 {
        let state = mechanics.time_step(GameInput::none());
        if step % 50 == 0 {
            assert_no_player_overlap(&state);
        }
    }
    assert_no_player_overlap(mechanics.state());
}

#[test]
fn scripted_resets_restart_the_chase() {
    let mut mechanics = BasketballMechanics::from_state(GameState::default());

    let mut held_for = 0_usize;
    let mut possession_seen = 0_usize;
    for _ in 0..6_000 {
        let control = if held_for >= 100 {
            held_for = 0;
            GameControl::ResetBall
        } else {
            GameControl::None
        };
        let state = mechanics.time_step(GameInput::action(control));
        if state.ball.is_in_possession() {
            if held_for == 0 {
                possession_seen += 1;
            }
            held_for += 1;
            // a held ball travels with its holder
            let holder = state.ball.possession.unwrap();
            assert_eq!(state.ball.position, state.player(holder).position);
        } else {
            held_for = 0;
        }
    }

    assert!(
        possession_seen >= 2,
        "expected repeated chases, saw {possession_seen} possession phases"
    );
}
