use glam::Vec2;

/// Rotates `point` around `pivot` by `angle_deg` degrees,
/// counter-clockwise positive.
pub fn rotated(point: Vec2, pivot: Vec2, angle_deg: f32) -> Vec2 {
    let rot = Vec2::from_angle(angle_deg.to_radians());
    rot.rotate(point - pivot) + pivot
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Vec2, b: Vec2) {
        assert!((a - b).length() < 1e-4, "{a} != {b}");
    }

    #[test]
    fn zero_angle_is_identity() {
        let p = Vec2::new(3.5, -2.0);
        assert_eq!(rotated(p, Vec2::new(1.0, 1.0), 0.0), p);
    }

    #[test]
    fn quarter_turn_about_origin() {
        // (1, 0) rotated 90° CCW lands on (0, 1).
        assert_close(
            rotated(Vec2::new(1.0, 0.0), Vec2::ZERO, 90.0),
            Vec2::new(0.0, 1.0),
        );
    }

    #[test]
    fn rotation_preserves_distance_to_pivot() {
        let pivot = Vec2::new(2.0, -7.0);
        let p = Vec2::new(5.0, 1.0);
        let r = rotated(p, pivot, 123.4);
        assert!(((r - pivot).length() - (p - pivot).length()).abs() < 1e-4);
    }

    #[test]
    fn pivot_is_a_fixed_point() {
        let pivot = Vec2::new(-4.0, 9.0);
        assert_close(rotated(pivot, pivot, 77.0), pivot);
    }

    #[test]
    fn full_turn_returns_to_start() {
        let p = Vec2::new(10.0, 4.0);
        assert_close(rotated(p, Vec2::new(1.0, 2.0), 360.0), p);
    }
}
