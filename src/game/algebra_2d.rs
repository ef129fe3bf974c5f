use parry2d::na::{Isometry2, Point2, Vector2};
use parry2d::query;
use parry2d::shape::Cuboid;

/// Axis-aligned Bounding Box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AaBB {
    pub min: Point2<f32>,
    pub max: Point2<f32>,
}

impl AaBB {
    /// box spanned by a TOP/LEFT position and a size
    pub fn from_pos_size(pos: Point2<f32>, size: Vector2<f32>) -> Self {
        AaBB {
            min: pos,
            max: pos + size,
        }
    }

    pub fn center(&self) -> Point2<f32> {
        Point2::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    pub fn size(&self) -> Vector2<f32> {
        self.max - self.min
    }

    pub fn translate(&self, value: Vector2<f32>) -> Self {
        AaBB {
            min: self.min + value,
            max: self.max + value,
        }
    }
}

/// direction of a 1D distance: -1, 0 or +1
pub fn trend(delta: f32) -> f32 {
    if delta > 0.0 {
        1.0
    } else if delta < 0.0 {
        -1.0
    } else {
        0.0
    }
}

pub fn intersection_test_aabb_aabb(a: &AaBB, b: &AaBB) -> bool {
    let a_center = a.center();
    let b_center = b.center();
    query::intersection_test(
        &Isometry2::translation(a_center.x, a_center.y),
        &Cuboid::new(a.size() / 2.0),
        &Isometry2::translation(b_center.x, b_center.y),
        &Cuboid::new(b.size() / 2.0),
    )
    .expect("intersection test failed")
}
