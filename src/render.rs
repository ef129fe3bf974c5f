//! Window-independent frame rendering of a game state.
//!
//! Draws into an in-memory RGB bitmap so callers can feed frames to a file,
//! an encoder or an analysis pipeline without any GUI event loop.

use anyhow::{anyhow, Context, Result};
use image::{ImageBuffer, Rgb};
use plotters::prelude::*;

use crate::game::court::{MODEL_GRID_LEN_X, MODEL_GRID_LEN_Y};
use crate::game::entities::TeamSide;
use crate::game::mechanics::GameState;

// demo palette
const COLOR_BACKGROUND: RGBColor = RGBColor(25, 25, 25);
const COLOR_COURT: RGBColor = RGBColor(241, 208, 159);
const COLOR_MARKING: RGBColor = RGBColor(75, 75, 75);
const COLOR_HOME: RGBColor = RGBColor(92, 144, 189);
const COLOR_AWAY: RGBColor = RGBColor(227, 112, 112);
const COLOR_BALL: RGBColor = RGBColor(204, 154, 84);

/// center circle radius relative to the court width
const CENTER_CIRCLE_PER_COURT_WIDTH: f32 = 6.0 / 50.0;

pub struct GameDrawer {
    frame_size_x: usize,
    frame_size_y: usize,
}

impl GameDrawer {
    pub fn new(frame_size_x: usize, frame_size_y: usize) -> Self {
        Self {
            frame_size_x,
            frame_size_y,
        }
    }

    /// pos / MODEL_LEN = result / frame_size
    fn scale(&self, x: f32, y: f32) -> (i32, i32) {
        (
            (x * self.frame_size_x as f32 / MODEL_GRID_LEN_X) as i32,
            (y * self.frame_size_y as f32 / MODEL_GRID_LEN_Y) as i32,
        )
    }

    fn scale_x(&self, len_x: f32) -> i32 {
        (len_x * self.frame_size_x as f32 / MODEL_GRID_LEN_X) as i32
    }

    pub fn draw(&self, game_state: &GameState) -> Result<ImageBuffer<Rgb<u8>, Vec<u8>>> {
        let (w, h) = (self.frame_size_x as u32, self.frame_size_y as u32);
        let mut buffer = vec![0u8; self.frame_size_x * self.frame_size_y * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (w, h)).into_drawing_area();
            root.fill(&COLOR_BACKGROUND)
                .map_err(|e| anyhow!("frame fill failed: {e}"))?;

            let court = &game_state.court;
            root.draw(&Rectangle::new(
                [
                    self.scale(court.left, court.top),
                    self.scale(court.right, court.bottom),
                ],
                COLOR_COURT.filled(),
            ))
            .map_err(|e| anyhow!("court draw failed: {e}"))?;

            let mid_y = court.top + court.height() / 2.0;
            root.draw(&PathElement::new(
                vec![self.scale(court.left, mid_y), self.scale(court.right, mid_y)],
                COLOR_MARKING.stroke_width(2),
            ))
            .map_err(|e| anyhow!("mid line draw failed: {e}"))?;

            let center = court.center();
            root.draw(&Circle::new(
                self.scale(center.x, center.y),
                self.scale_x(court.width() * CENTER_CIRCLE_PER_COURT_WIDTH),
                COLOR_MARKING.stroke_width(2),
            ))
            .map_err(|e| anyhow!("center circle draw failed: {e}"))?;

            for team in &game_state.teams {
                let color = match team.side {
                    TeamSide::Home => COLOR_HOME,
                    TeamSide::Away => COLOR_AWAY,
                };
                for player in &team.players {
                    let rect = player.rect();
                    root.draw(&Rectangle::new(
                        [
                            self.scale(rect.min.x, rect.min.y),
                            self.scale(rect.max.x, rect.max.y),
                        ],
                        color.filled(),
                    ))
                    .map_err(|e| anyhow!("player draw failed: {e}"))?;
                }
            }

            let ball = game_state.ball.rect();
            let ball_center = ball.center();
            root.draw(&Circle::new(
                self.scale(ball_center.x, ball_center.y),
                self.scale_x(ball.size().x / 2.0),
                COLOR_BALL.filled(),
            ))
            .map_err(|e| anyhow!("ball draw failed: {e}"))?;

            root.present()
                .map_err(|e| anyhow!("frame present failed: {e}"))?;
        }
        ImageBuffer::from_raw(w, h, buffer).context("frame buffer size mismatch")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_color(frame: &ImageBuffer<Rgb<u8>, Vec<u8>>, color: RGBColor) -> bool {
        frame.pixels().any(|p| p.0 == [color.0, color.1, color.2])
    }

    #[test]
    fn frame_shows_court_teams_and_ball() {
        let state = GameState::default();
        let frame = GameDrawer::new(480, 270).draw(&state).unwrap();

        assert_eq!(frame.dimensions(), (480, 270));
        assert!(has_color(&frame, COLOR_COURT));
        assert!(has_color(&frame, COLOR_HOME));
        assert!(has_color(&frame, COLOR_AWAY));
        assert!(has_color(&frame, COLOR_BALL));
    }
}
