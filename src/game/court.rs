use nalgebra::{Point2, Vector2};
use rand::Rng;

use crate::game::algebra_2d::{intersection_test_aabb_aabb, AaBB};

/// TOP / LEFT corner is 0/0
pub const MODEL_GRID_LEN_X: f32 = 1920.0;
pub const MODEL_GRID_LEN_Y: f32 = 1080.0;

/// free space above and below the court
const COURT_VERTICAL_MARGIN: f32 = 1.0 / 29.0;
/// court width relative to its height
const COURT_WIDTH_PER_HEIGHT: f32 = 0.631914893617;

/// Playing area, proportional to the model grid and horizontally centered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Court {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Court {
    pub fn new() -> Self {
        let top = MODEL_GRID_LEN_Y * COURT_VERTICAL_MARGIN;
        let bottom = MODEL_GRID_LEN_Y * (1.0 - COURT_VERTICAL_MARGIN);
        let width = (bottom - top) * COURT_WIDTH_PER_HEIGHT;
        let left = MODEL_GRID_LEN_X / 2.0 - width / 2.0;
        let right = MODEL_GRID_LEN_X / 2.0 + width / 2.0;
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Point2<f32> {
        Point2::new(
            self.left + self.width() / 2.0,
            self.top + self.height() / 2.0,
        )
    }

    pub fn bounds(&self) -> AaBB {
        AaBB {
            min: Point2::new(self.left, self.top),
            max: Point2::new(self.right, self.bottom),
        }
    }

    /// upper half
    pub fn home_half(&self) -> CourtArea {
        CourtArea {
            bounds: AaBB {
                min: Point2::new(self.left, self.top),
                max: Point2::new(self.right, self.top + self.height() / 2.0),
            },
        }
    }

    /// lower half
    pub fn away_half(&self) -> CourtArea {
        CourtArea {
            bounds: AaBB {
                min: Point2::new(self.left, self.top + self.height() / 2.0),
                max: Point2::new(self.right, self.bottom),
            },
        }
    }
}

impl Default for Court {
    fn default() -> Self {
        Self::new()
    }
}

/// Rectangular part of the court, e.g. one team's half.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CourtArea {
    pub bounds: AaBB,
}

impl CourtArea {
    /// Random TOP/LEFT position for an entity of the given size, fully inside
    /// the area and clear of every occupied rectangle.
    pub fn starting_position(&self, entity_size: Vector2<f32>, occupied: &[AaBB]) -> Point2<f32> {
        let mut rng = rand::thread_rng();
        loop {
            let x = rng.gen_range(self.bounds.min.x..self.bounds.max.x - entity_size.x);
            let y = rng.gen_range(self.bounds.min.y..self.bounds.max.y - entity_size.y);
            let candidate = AaBB::from_pos_size(Point2::new(x, y), entity_size);
            if !occupied
                .iter()
                .any(|o| intersection_test_aabb_aabb(&candidate, o))
            {
                break Point2::new(x, y);
            }
        }
    }

    pub fn contains(&self, rect: &AaBB) -> bool {
        rect.min.x >= self.bounds.min.x
            && rect.min.y >= self.bounds.min.y
            && rect.max.x <= self.bounds.max.x
            && rect.max.y <= self.bounds.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn court_is_proportional_to_the_grid() {
        let court = Court::new();
        assert_eq!(court.top, MODEL_GRID_LEN_Y * COURT_VERTICAL_MARGIN);
        assert_eq!(court.bottom, MODEL_GRID_LEN_Y * (1.0 - COURT_VERTICAL_MARGIN));
        assert!(court.top < court.bottom);
        assert!((court.width() - court.height() * COURT_WIDTH_PER_HEIGHT).abs() < 0.001);
        // horizontally centered
        assert!((court.left + court.right - MODEL_GRID_LEN_X).abs() < 0.001);
    }

    #[test]
    fn halves_tile_the_court() {
        let court = Court::new();
        let home = court.home_half();
        let away = court.away_half();
        assert_eq!(home.bounds.min, court.bounds().min);
        assert_eq!(away.bounds.max, court.bounds().max);
        assert_eq!(home.bounds.max.y, away.bounds.min.y);
        assert_eq!(home.bounds.max.x, court.right);
        assert_eq!(court.center().y, home.bounds.max.y);
    }

    #[test]
    fn starting_position_stays_inside_and_clear() {
        let court = Court::new();
        let area = court.home_half();
        let size = Vector2::new(75.0, 75.0);

        let mut occupied: Vec<AaBB> = vec![];
        for _ in 0..10 {
            let pos = area.starting_position(size, &occupied);
            let rect = AaBB::from_pos_size(pos, size);
            assert!(area.contains(&rect));
            assert!(!occupied
                .iter()
                .any(|o| intersection_test_aabb_aabb(&rect, o)));
            occupied.push(rect);
        }
    }
}
