use glam::{Mat4, Vec3};

/// Axis-aligned bounds of a mesh or scene object.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AABB {
    pub min: Vec3,
    pub max: Vec3,
}

impl AABB {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Bounds of a point cloud, `None` when there are no points.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a [f32; 3]>) -> Option<Self> {
        points.into_iter().fold(None, |acc, p| {
            let p = Vec3::from_array(*p);
            Some(match acc {
                None => AABB::new(p, p),
                Some(b) => AABB::new(b.min.min(p), b.max.max(p)),
            })
        })
    }

    pub fn union(&self, other: &AABB) -> AABB {
        AABB {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn extent(&self) -> Vec3 {
        self.max - self.min
    }

    /// Bounds of the eight transformed corners.
    pub fn transformed(&self, matrix: &Mat4) -> AABB {
        let corners = [
            Vec3::new(self.min.x, self.min.y, self.min.z),
            Vec3::new(self.max.x, self.min.y, self.min.z),
            Vec3::new(self.min.x, self.max.y, self.min.z),
            Vec3::new(self.max.x, self.max.y, self.min.z),
            Vec3::new(self.min.x, self.min.y, self.max.z),
            Vec3::new(self.max.x, self.min.y, self.max.z),
            Vec3::new(self.min.x, self.max.y, self.max.z),
            Vec3::new(self.max.x, self.max.y, self.max.z),
        ];
        let first = matrix.transform_point3(corners[0]);
        corners[1..].iter().fold(AABB::new(first, first), |acc, c| {
            let p = matrix.transform_point3(*c);
            AABB::new(acc.min.min(p), acc.max.max(p))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_from_points() {
        let points = [[0.0, -1.0, 2.0], [3.0, 1.0, -2.0], [1.0, 0.0, 0.0]];
        let aabb = AABB::from_points(points.iter()).unwrap();
        assert_eq!(aabb.min, Vec3::new(0.0, -1.0, -2.0));
        assert_eq!(aabb.max, Vec3::new(3.0, 1.0, 2.0));
    }

    #[test]
    fn test_aabb_from_no_points() {
        let points: [[f32; 3]; 0] = [];
        assert!(AABB::from_points(points.iter()).is_none());
    }

    #[test]
    fn test_aabb_center_negative() {
        let aabb = AABB::new(Vec3::new(-2.0, -4.0, -6.0), Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(aabb.center(), Vec3::ZERO);
        assert_eq!(aabb.extent(), Vec3::new(4.0, 8.0, 12.0));
    }

    #[test]
    fn test_aabb_union_non_overlapping() {
        let aabb1 = AABB::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0));
        let aabb2 = AABB::new(Vec3::new(2.0, 2.0, 2.0), Vec3::new(3.0, 3.0, 3.0));
        let union = aabb1.union(&aabb2);
        assert_eq!(union.min, Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(union.max, Vec3::new(3.0, 3.0, 3.0));
    }

    #[test]
    fn test_aabb_transformed_by_scale_and_translation() {
        let aabb = AABB::new(Vec3::splat(-0.5), Vec3::splat(0.5));
        let matrix = Mat4::from_translation(Vec3::new(1.5, 0.0, 0.0)) * Mat4::from_scale(Vec3::splat(2.0));
        let moved = aabb.transformed(&matrix);
        assert!((moved.min - Vec3::new(0.5, -1.0, -1.0)).length() < 1e-5);
        assert!((moved.max - Vec3::new(2.5, 1.0, 1.0)).length() < 1e-5);
    }
}
