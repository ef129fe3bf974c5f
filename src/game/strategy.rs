use crate::game::algebra_2d::{intersection_test_aabb_aabb, trend, AaBB};
use crate::game::entities::{Ball, InGameTeam, PlayerId};
use crate::game::mechanics::TIME_GRANULARITY;

/// A movement play applied to both teams for one time step. The mechanics
/// select one implementation per step from the ball situation (loose or
/// held); there is no state kept between steps.
pub trait Strategy {
    fn execute(&self, ball: &Ball, teams: &mut [InGameTeam; 2]);
}

/// Nobody owns the ball: every player of both teams chases it.
///
/// Movement is one step per axis towards the ball, x first, then y with the
/// committed x. A step on an axis is skipped when the probed rectangle would
/// overlap any other player's current rectangle.
pub struct LooseBall;

impl Strategy for LooseBall {
    fn execute(&self, ball: &Ball, teams: &mut [InGameTeam; 2]) {
        let step_secs = TIME_GRANULARITY.as_secs_f32();
        for team_idx in 0..teams.len() {
            for player_idx in 0..teams[team_idx].players.len() {
                let me = PlayerId::new(teams[team_idx].side, player_idx);

                let (x, probe) = {
                    let player = &teams[team_idx].players[player_idx];
                    let trend_x = trend(ball.position.x - player.position.x);
                    let x = player.position.x + player.profile.trend_speed(trend_x) * step_secs;
                    (x, player.rect_at(Some(x), None))
                };
                if !overlaps_other_player(teams, me, &probe) {
                    teams[team_idx].players[player_idx].position.x = x;
                }

                let (y, probe) = {
                    let player = &teams[team_idx].players[player_idx];
                    let trend_y = trend(ball.position.y - player.position.y);
                    let y = player.position.y + player.profile.trend_speed(trend_y) * step_secs;
                    (y, player.rect_at(None, Some(y)))
                };
                if !overlaps_other_player(teams, me, &probe) {
                    teams[team_idx].players[player_idx].position.y = y;
                }
            }
        }
    }
}

/// Somebody holds the ball. Placeholder play: the holder keeps the ball and
/// everybody else stays put.
pub struct SimpleAttack;

impl Strategy for SimpleAttack {
    fn execute(&self, ball: &Ball, teams: &mut [InGameTeam; 2]) {
        let Some(holder) = ball.possession else {
            return;
        };
        for team in teams.iter() {
            for (idx, player) in team.players.iter().enumerate() {
                if PlayerId::new(team.side, idx) == holder {
                    log::trace!("{} keeps the ball", player.profile.name);
                } else {
                    // TODO spread off-ball players into the attack half
                }
            }
        }
    }
}

fn overlaps_other_player(teams: &[InGameTeam; 2], me: PlayerId, probe: &AaBB) -> bool {
    teams
        .iter()
        .flat_map(|team| {
            team.players
                .iter()
                .enumerate()
                .map(move |(idx, player)| (PlayerId::new(team.side, idx), player))
        })
        .filter(|(id, _)| *id != me)
        .any(|(_, player)| intersection_test_aabb_aabb(probe, &player.rect()))
}

#[cfg(test)]
mod tests {
    use nalgebra::Point2;

    use super::*;
    use crate::game::court::Court;
    use crate::game::entities::{Ball, InGameTeam, TeamSide, PLAYER_LEN_X};
    use crate::game::roster::{Player, PlayerPosition, Team};

    fn one_player_team(side: TeamSide, name: &str, position: Point2<f32>) -> InGameTeam {
        let team = Team {
            name: name.to_string(),
            players: vec![Player::new(name, PlayerPosition::Guard)],
        };
        InGameTeam::with_positions(side, team, &Court::new(), &[position])
    }

    fn two_player_team(side: TeamSide, name: &str, positions: [Point2<f32>; 2]) -> InGameTeam {
        let team = Team {
            name: name.to_string(),
            players: vec![
                Player::new("First", PlayerPosition::Guard),
                Player::new("Second", PlayerPosition::Forward),
            ],
        };
        InGameTeam::with_positions(side, team, &Court::new(), &positions)
    }

    #[test]
    fn loose_ball_pulls_players_towards_it() {
        let ball = Ball::at_center(&Court::new());
        let start_home = Point2::new(ball.position.x - 300.0, ball.position.y - 200.0);
        let start_away = Point2::new(ball.position.x + 300.0, ball.position.y + 200.0);
        let mut teams = [
            one_player_team(TeamSide::Home, "Home", start_home),
            one_player_team(TeamSide::Away, "Away", start_away),
        ];

        LooseBall.execute(&ball, &mut teams);

        let step = 90.0 * TIME_GRANULARITY.as_secs_f32();
        assert_eq!(
            teams[0].players[0].position,
            Point2::new(start_home.x + step, start_home.y + step)
        );
        assert_eq!(
            teams[1].players[0].position,
            Point2::new(start_away.x - step, start_away.y - step)
        );
    }

    #[test]
    fn aligned_axis_does_not_move() {
        let ball = Ball::at_center(&Court::new());
        let start = Point2::new(ball.position.x, ball.position.y - 200.0);
        let mut teams = [
            one_player_team(TeamSide::Home, "Home", start),
            one_player_team(TeamSide::Away, "Away", Point2::new(ball.position.x + 400.0, ball.position.y + 300.0)),
        ];

        LooseBall.execute(&ball, &mut teams);

        let chaser = &teams[0].players[0];
        assert_eq!(chaser.position.x, start.x);
        assert!(chaser.position.y > start.y);
    }

    #[test]
    fn blocked_axis_is_skipped() {
        let ball = Ball::at_center(&Court::new());
        // teammate parked directly between the chaser and the ball on the x axis
        let chaser = Point2::new(ball.position.x - 300.0, ball.position.y);
        let blocker = Point2::new(chaser.x + PLAYER_LEN_X + 0.5, chaser.y);
        let mut teams = [
            two_player_team(TeamSide::Home, "Home", [chaser, blocker]),
            one_player_team(TeamSide::Away, "Away", Point2::new(ball.position.x + 500.0, ball.position.y + 300.0)),
        ];

        LooseBall.execute(&ball, &mut teams);

        // x blocked, y aligned: the chaser stays put
        assert_eq!(teams[0].players[0].position, chaser);
    }

    #[test]
    fn simple_attack_changes_nothing() {
        let mut ball = Ball::at_center(&Court::new());
        let home_pos = Point2::new(ball.position.x - 100.0, ball.position.y);
        let away_pos = Point2::new(ball.position.x + 100.0, ball.position.y);
        let mut teams = [
            one_player_team(TeamSide::Home, "Home", home_pos),
            one_player_team(TeamSide::Away, "Away", away_pos),
        ];
        ball.set_possession(PlayerId::new(TeamSide::Home, 0));

        SimpleAttack.execute(&ball, &mut teams);

        assert_eq!(teams[0].players[0].position, home_pos);
        assert_eq!(teams[1].players[0].position, away_pos);
    }
}
