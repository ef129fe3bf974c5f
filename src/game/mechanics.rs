//! Fixed-timestep basketball mechanics.
//!
//! One time step: apply the input control, resolve possession of a loose
//! ball, run the play selected from the ball situation and sync the ball to
//! its holder. Every step returns a cloneable state snapshot, ready for a
//! drawer or an inspector.

use std::time::Duration;

use crate::game::algebra_2d::intersection_test_aabb_aabb;
use crate::game::court::Court;
use crate::game::entities::{Ball, InGamePlayer, InGameTeam, PlayerId, TeamSide};
use crate::game::roster::{Team, DEFAULT_AWAY_TEAM, DEFAULT_HOME_TEAM};
use crate::game::strategy::{LooseBall, SimpleAttack, Strategy};

/// time granularity (TG)
pub const TIME_GRANULARITY: Duration = Duration::from_millis(20);

#[derive(Copy, Clone)]
pub struct GameInput {
    pub control: GameControl,
    pub exit: bool,
}

impl GameInput {
    pub fn none() -> Self {
        Self {
            control: GameControl::None,
            exit: false,
        }
    }

    pub fn action(control: GameControl) -> Self {
        Self {
            control,
            exit: false,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq)]
pub enum GameControl {
    None,
    ResetBall,
}

#[derive(Clone)]
pub struct GameState {
    pub court: Court,
    pub ball: Ball,
    pub teams: [InGameTeam; 2],
    pub finished: bool,
}

impl GameState {
    /// random kickoff: ball at the court center, both rosters spread over
    /// their defense halves
    pub fn new(home: Team, away: Team) -> Self {
        let court = Court::new();
        let ball = Ball::at_center(&court);
        let mut occupied = vec![ball.rect()];
        let home = InGameTeam::new(TeamSide::Home, home, &court, &mut occupied);
        let away = InGameTeam::new(TeamSide::Away, away, &court, &mut occupied);
        Self {
            court,
            ball,
            teams: [home, away],
            finished: false,
        }
    }

    pub fn team(&self, side: TeamSide) -> &InGameTeam {
        match side {
            TeamSide::Home => &self.teams[0],
            TeamSide::Away => &self.teams[1],
        }
    }

    pub fn player(&self, id: PlayerId) -> &InGamePlayer {
        &self.team(id.side).players[id.idx]
    }

    /// all players of both teams, home roster first
    pub fn players(&self) -> impl Iterator<Item = (PlayerId, &InGamePlayer)> + Clone {
        self.teams.iter().flat_map(|team| {
            team.players
                .iter()
                .enumerate()
                .map(move |(idx, player)| (PlayerId::new(team.side, idx), player))
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(DEFAULT_HOME_TEAM.clone(), DEFAULT_AWAY_TEAM.clone())
    }
}

pub struct BasketballMechanics {
    mechanic_state: GameState,
}

impl BasketballMechanics {
    pub fn new(home: Team, away: Team) -> Self {
        Self {
            mechanic_state: GameState::new(home, away),
        }
    }

    /// start from a prepared state (scripted scenarios, tests)
    pub fn from_state(state: GameState) -> Self {
        Self {
            mechanic_state: state,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.mechanic_state
    }

    /// move the game one time step forward
    pub fn time_step(&mut self, input: GameInput) -> GameState {
        if input.control == GameControl::ResetBall {
            self.mechanic_state.ball.reset(&self.mechanic_state.court);
            log::debug!("ball reset to the court center");
        }

        self.update_possession();

        let strategy: &dyn Strategy = match self.mechanic_state.ball.is_in_possession() {
            true => &SimpleAttack,
            false => &LooseBall,
        };
        let GameState { ball, teams, .. } = &mut self.mechanic_state;
        strategy.execute(ball, teams);

        self.sync_ball_to_holder();

        if input.exit {
            self.mechanic_state.finished = true;
        }
        self.mechanic_state.clone()
    }

    /// A loose ball goes to the first player whose rectangle overlaps it,
    /// home roster first. Once held it stays held until a reset.
    fn update_possession(&mut self) {
        if self.mechanic_state.ball.is_in_possession() {
            return;
        }
        let ball_rect = self.mechanic_state.ball.rect();
        let winner = self
            .mechanic_state
            .players()
            .find(|(_, player)| intersection_test_aabb_aabb(&player.rect(), &ball_rect))
            .map(|(id, _)| id);
        if let Some(id) = winner {
            self.mechanic_state.ball.set_possession(id);
            log::debug!(
                "{} ({}) gains possession",
                self.mechanic_state.player(id).profile.name,
                self.mechanic_state.team(id.side).name
            );
        }
    }

    /// a held ball travels with its holder
    fn sync_ball_to_holder(&mut self) {
        if let Some(id) = self.mechanic_state.ball.possession {
            self.mechanic_state.ball.position = self.mechanic_state.player(id).position;
        }
    }
}
