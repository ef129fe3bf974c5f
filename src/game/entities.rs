//! Live match state: the ball, in-game players and in-game teams.
//!
//! The static roster data stays untouched in [`crate::game::roster`]; the
//! types here carry what changes during a match: positions, the possession
//! reference and per-match stamina. Positions are TOP/LEFT corners of the
//! entity rectangle, in model grid units.

use nalgebra::{Point2, Vector2};

use crate::game::algebra_2d::AaBB;
use crate::game::court::{Court, CourtArea};
use crate::game::roster::{Player, Team};

pub const PLAYER_LEN_X: f32 = 75.0;
pub const PLAYER_LEN_Y: f32 = 75.0;
pub const BALL_LEN: f32 = 30.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TeamSide {
    Home,
    Away,
}

impl TeamSide {
    pub fn opponent(&self) -> TeamSide {
        match self {
            TeamSide::Home => TeamSide::Away,
            TeamSide::Away => TeamSide::Home,
        }
    }
}

/// Identity of an in-game player: team side plus roster index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerId {
    pub side: TeamSide,
    pub idx: usize,
}

impl PlayerId {
    pub fn new(side: TeamSide, idx: usize) -> Self {
        Self { side, idx }
    }
}

#[derive(Clone, Debug)]
pub struct Ball {
    pub position: Point2<f32>,
    pub size: Vector2<f32>,
    /// player currently holding the ball; at most one
    pub possession: Option<PlayerId>,
}

impl Ball {
    pub fn at_center(court: &Court) -> Self {
        Self {
            position: court.center(),
            size: Vector2::new(BALL_LEN, BALL_LEN),
            possession: None,
        }
    }

    pub fn rect(&self) -> AaBB {
        AaBB::from_pos_size(self.position, self.size)
    }

    pub fn is_in_possession(&self) -> bool {
        self.possession.is_some()
    }

    pub fn set_possession(&mut self, id: PlayerId) {
        self.possession = Some(id);
    }

    pub fn unset_possession(&mut self) {
        self.possession = None;
    }

    /// back to the court center, loose
    pub fn reset(&mut self, court: &Court) {
        self.unset_possession();
        self.position = court.center();
    }
}

#[derive(Clone, Debug)]
pub struct InGamePlayer {
    pub profile: Player,
    pub position: Point2<f32>,
    pub size: Vector2<f32>,
    pub stamina: u8,
}

impl InGamePlayer {
    fn new(profile: Player, position: Point2<f32>) -> Self {
        let stamina = profile.stamina;
        Self {
            profile,
            position,
            size: Vector2::new(PLAYER_LEN_X, PLAYER_LEN_Y),
            stamina,
        }
    }

    pub fn rect(&self) -> AaBB {
        self.rect_at(None, None)
    }

    /// bounding rectangle with an optionally overridden coordinate; probes a
    /// candidate move on one axis without committing it
    pub fn rect_at(&self, x: Option<f32>, y: Option<f32>) -> AaBB {
        let pos = Point2::new(
            x.unwrap_or(self.position.x),
            y.unwrap_or(self.position.y),
        );
        AaBB::from_pos_size(pos, self.size)
    }
}

#[derive(Clone, Debug)]
pub struct InGameTeam {
    pub side: TeamSide,
    pub name: String,
    pub players: Vec<InGamePlayer>,
    pub attack_area: CourtArea,
    pub defense_area: CourtArea,
}

impl InGameTeam {
    /// Place the roster at random spots in the team's defense half, clear of
    /// every rectangle already occupied. Each placed player extends the
    /// occupied list.
    pub fn new(side: TeamSide, team: Team, court: &Court, occupied: &mut Vec<AaBB>) -> Self {
        let (defense_area, attack_area) = Self::halves(side, court);
        let size = Vector2::new(PLAYER_LEN_X, PLAYER_LEN_Y);
        let Team { name, players: profiles } = team;

        let mut players = Vec::with_capacity(profiles.len());
        for profile in profiles {
            let position = defense_area.starting_position(size, occupied);
            let player = InGamePlayer::new(profile, position);
            occupied.push(player.rect());
            players.push(player);
        }
        Self {
            side,
            name,
            players,
            attack_area,
            defense_area,
        }
    }

    /// deterministic placement for scripted scenarios and tests
    pub fn with_positions(
        side: TeamSide,
        team: Team,
        court: &Court,
        positions: &[Point2<f32>],
    ) -> Self {
        assert_eq!(team.players.len(), positions.len());
        let (defense_area, attack_area) = Self::halves(side, court);
        let Team { name, players: profiles } = team;
        let players = profiles
            .into_iter()
            .zip(positions)
            .map(|(profile, &position)| InGamePlayer::new(profile, position))
            .collect();
        Self {
            side,
            name,
            players,
            attack_area,
            defense_area,
        }
    }

    fn halves(side: TeamSide, court: &Court) -> (CourtArea, CourtArea) {
        match side {
            TeamSide::Home => (court.home_half(), court.away_half()),
            TeamSide::Away => (court.away_half(), court.home_half()),
        }
    }
}
