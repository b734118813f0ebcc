use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Point on (or in) the box closest to `point`
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        point.clamp(self.min, self.max)
    }

    /// Check if circle intersects AABB
    pub fn intersects_circle(&self, center: Vec2, radius: f32) -> bool {
        (center - self.closest_point(center)).length_squared() <= radius * radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paddle_box() -> Aabb {
        Aabb::new(Vec2::new(12.0, 100.0), Vec2::new(24.0, 210.0))
    }

    #[test]
    fn test_circle_touching_face_intersects() {
        let rect = paddle_box();
        assert!(rect.intersects_circle(Vec2::new(33.0, 150.0), 9.0));
        assert!(!rect.intersects_circle(Vec2::new(33.5, 150.0), 9.0));
    }

    #[test]
    fn test_circle_near_corner() {
        let rect = paddle_box();
        // 6-8-10 triangle from the bottom-right corner
        assert!(!rect.intersects_circle(Vec2::new(30.0, 218.0), 9.0));
        assert!(rect.intersects_circle(Vec2::new(30.0, 218.0), 10.0));
    }

    #[test]
    fn test_center_inside_box() {
        let rect = paddle_box();
        assert!(rect.intersects_circle(Vec2::new(18.0, 150.0), 1.0));
        assert_eq!(rect.closest_point(Vec2::new(18.0, 150.0)), Vec2::new(18.0, 150.0));
    }

    #[test]
    fn test_center() {
        let rect = paddle_box();
        assert_eq!(rect.center(), Vec2::new(18.0, 155.0));
    }
}
