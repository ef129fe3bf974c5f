use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use itertools::Itertools;
use num_format::ToFormattedString;

use basketball_game::game::mechanics::{BasketballMechanics, GameControl, GameInput};
use basketball_game::game::roster::{self, Team};
use basketball_game::render::GameDrawer;
use basketball_game::util::{init_logging, number_format};

/// demo length in time steps
const DEMO_STEPS: usize = 3_000;
/// steps the ball stays held before it is thrown back to the center
const POSSESSION_HOLD_STEPS: usize = 150;

const FRAME_SIZE_X: usize = 960;
const FRAME_SIZE_Y: usize = 540;
const FINAL_FRAME_FILE: &str = "final_frame.png";

fn main() -> Result<()> {
    init_logging();

    let (home, away) = rosters_from_args()?;
    log::info!(
        "{}: {}",
        home.name,
        home.players.iter().map(|p| p.name.as_str()).join(", ")
    );
    log::info!(
        "{}: {}",
        away.name,
        away.players.iter().map(|p| p.name.as_str()).join(", ")
    );

    let mut mechanics = BasketballMechanics::new(home, away);

    let mut resets = 0_usize;
    let mut held_for = 0_usize;
    let mut state = mechanics.state().clone();
    for _ in 0..DEMO_STEPS {
        let control = if held_for >= POSSESSION_HOLD_STEPS {
            held_for = 0;
            resets += 1;
            GameControl::ResetBall
        } else {
            GameControl::None
        };
        state = mechanics.time_step(GameInput::action(control));
        held_for = match state.ball.is_in_possession() {
            true => held_for + 1,
            false => 0,
        };
    }

    let format = number_format();
    log::info!(
        "simulated {} steps with {} ball resets",
        DEMO_STEPS.to_formatted_string(&format),
        resets.to_formatted_string(&format)
    );
    match state.ball.possession {
        Some(id) => log::info!(
            "ball is held by {} ({})",
            state.player(id).profile.name,
            state.team(id.side).name
        ),
        None => log::info!("ball is loose"),
    }

    let frame = GameDrawer::new(FRAME_SIZE_X, FRAME_SIZE_Y).draw(&state)?;
    frame
        .save(FINAL_FRAME_FILE)
        .with_context(|| format!("cannot write {FINAL_FRAME_FILE}"))?;
    log::info!("final frame written to {FINAL_FRAME_FILE}");
    Ok(())
}

fn rosters_from_args() -> Result<(Team, Team)> {
    let paths = env::args().skip(1).map(PathBuf::from).collect_vec();
    match paths.as_slice() {
        [] => Ok((
            roster::DEFAULT_HOME_TEAM.clone(),
            roster::DEFAULT_AWAY_TEAM.clone(),
        )),
        [home, away] => Ok((roster::load_team(home)?, roster::load_team(away)?)),
        _ => bail!("usage: basketball-game [HOME_ROSTER.json AWAY_ROSTER.json]"),
    }
}
