//! Static roster data: player profiles and teams.
//!
//! Apart from `speed`, the rating fields are carried roster data and not yet
//! consulted by any decision logic. Rosters are plain JSON documents; absent
//! rating fields fall back to a common default profile.

use std::fs;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// movement speed in model units per second
const DEFAULT_SPEED: f32 = 90.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerPosition {
    Guard,
    Forward,
    Center,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotRating {
    pub long: u8,
    pub three: u8,
    pub mid: u8,
    pub post: u8,
    pub drive: u8,
}

impl Default for ShotRating {
    fn default() -> Self {
        Self {
            long: 5,
            three: 40,
            mid: 50,
            post: 40,
            drive: 50,
        }
    }
}

/// rating per court distance zone; used for both passing and blocking
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneRating {
    pub short: u8,
    pub mid: u8,
    pub long: u8,
    pub half: u8,
}

impl ZoneRating {
    fn default_passing() -> Self {
        Self {
            short: 80,
            mid: 75,
            long: 40,
            half: 20,
        }
    }

    fn default_blocking() -> Self {
        Self {
            short: 40,
            mid: 30,
            long: 20,
            half: 5,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackPreference {
    pub long: u8,
    pub three: u8,
    pub mid: u8,
    pub post: u8,
    pub drive: u8,
    pub passing: u8,
}

impl Default for AttackPreference {
    fn default() -> Self {
        Self {
            long: 3,
            three: 18,
            mid: 30,
            post: 19,
            drive: 30,
            passing: 60,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StealRating {
    pub on_pass: u8,
    pub on_ball: u8,
}

impl Default for StealRating {
    fn default() -> Self {
        Self {
            on_pass: 30,
            on_ball: 40,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub position: PlayerPosition,
    #[serde(default = "default_speed")]
    pub speed: f32,
    #[serde(default)]
    pub shooting: ShotRating,
    #[serde(default = "ZoneRating::default_passing")]
    pub passing: ZoneRating,
    #[serde(default)]
    pub attack_pref: AttackPreference,
    #[serde(default)]
    pub stealing: StealRating,
    #[serde(default = "ZoneRating::default_blocking")]
    pub blocking: ZoneRating,
    #[serde(default = "default_stamina")]
    pub stamina: u8,
    #[serde(default = "default_risky")]
    pub risky: u8,
}

fn default_speed() -> f32 {
    DEFAULT_SPEED
}

fn default_stamina() -> u8 {
    80
}

fn default_risky() -> u8 {
    40
}

impl Player {
    pub fn new(name: &str, position: PlayerPosition) -> Self {
        Self {
            name: name.to_string(),
            position,
            speed: default_speed(),
            shooting: ShotRating::default(),
            passing: ZoneRating::default_passing(),
            attack_pref: AttackPreference::default(),
            stealing: StealRating::default(),
            blocking: ZoneRating::default_blocking(),
            stamina: default_stamina(),
            risky: default_risky(),
        }
    }

    /// speed along one axis for a movement trend of -1, 0 or +1
    pub fn trend_speed(&self, trend: f32) -> f32 {
        self.speed * trend
    }

    /// same, away from the target
    pub fn inverse_trend_speed(&self, trend: f32) -> f32 {
        -self.trend_speed(trend)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub players: Vec<Player>,
}

pub fn load_team(path: &Path) -> Result<Team> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("cannot read roster file {}", path.display()))?;
    let team: Team = serde_json::from_str(&data)
        .with_context(|| format!("malformed roster file {}", path.display()))?;
    ensure!(
        !team.players.is_empty(),
        "roster '{}' has no players",
        team.name
    );
    Ok(team)
}

lazy_static! {
    pub static ref DEFAULT_HOME_TEAM: Team = Team {
        name: "Harbor City Hoops".to_string(),
        players: vec![
            Player::new("Ellis", PlayerPosition::Guard),
            Player::new("Marsh", PlayerPosition::Guard),
            Player::new("Okafor", PlayerPosition::Forward),
            Player::new("Reyes", PlayerPosition::Forward),
            Player::new("Bogdan", PlayerPosition::Center),
        ],
    };
    pub static ref DEFAULT_AWAY_TEAM: Team = Team {
        name: "Eastside Arrows".to_string(),
        players: vec![
            Player::new("Silva", PlayerPosition::Guard),
            Player::new("Tanaka", PlayerPosition::Guard),
            Player::new("Webb", PlayerPosition::Forward),
            Player::new("Moreau", PlayerPosition::Forward),
            Player::new("Koch", PlayerPosition::Center),
        ],
    };
}
