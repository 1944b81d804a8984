//! Pointer-driven joystick indicator on the left joy-con.
//!
//! The pointer's bearing from the stick, measured clockwise from straight
//! up, picks one of four offsets. Diagonals sit exactly between two
//! positions and go to the clockwise-next one: 45° is Right, 135° Down,
//! 225° Left and 315° Up.

/// Displayed position of the stick head
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StickPosition {
    #[default]
    Center,
    Up,
    Right,
    Down,
    Left,
}

impl StickPosition {
    /// Cell offset of the stick head from the centre of its well
    #[must_use]
    pub fn offset(self) -> (i16, i16) {
        match self {
            StickPosition::Center => (0, 0),
            StickPosition::Up => (0, -1),
            StickPosition::Right => (1, 0),
            StickPosition::Down => (0, 1),
            StickPosition::Left => (-1, 0),
        }
    }
}

/// Quantizes a pointer offset from the stick origin.
///
/// `dy` grows downwards, as in screen coordinates. The nearest position by
/// angle is the one along the dominant axis, so the comparison is done on
/// the components directly and diagonals resolve exactly.
#[must_use]
pub fn quantize(dx: f64, dy: f64) -> StickPosition {
    let (horizontal, vertical) = (dx.abs(), dy.abs());
    if horizontal == 0.0 && vertical == 0.0 {
        return StickPosition::Center;
    }

    if horizontal == vertical {
        return match (dx > 0.0, dy > 0.0) {
            (true, false) => StickPosition::Right,
            (true, true) => StickPosition::Down,
            (false, true) => StickPosition::Left,
            (false, false) => StickPosition::Up,
        };
    }

    if horizontal > vertical {
        if dx > 0.0 {
            StickPosition::Right
        } else {
            StickPosition::Left
        }
    } else if dy > 0.0 {
        StickPosition::Down
    } else {
        StickPosition::Up
    }
}

/// Bearing of the pointer in degrees, clockwise from up, in `[0, 360)`
#[must_use]
pub fn bearing(dx: f64, dy: f64) -> f64 {
    (180.0 - dx.atan2(dy).to_degrees()).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardinal_directions() {
        assert_eq!(quantize(0.0, -5.0), StickPosition::Up);
        assert_eq!(quantize(5.0, 0.0), StickPosition::Right);
        assert_eq!(quantize(0.0, 5.0), StickPosition::Down);
        assert_eq!(quantize(-5.0, 0.0), StickPosition::Left);
    }

    #[test]
    fn test_nearest_by_angle() {
        // 30° from up, towards the right
        assert_eq!(quantize(1.0, -1.8), StickPosition::Up);
        // 60° from up
        assert_eq!(quantize(1.8, -1.0), StickPosition::Right);
        assert_eq!(quantize(-3.0, 2.0), StickPosition::Left);
        assert_eq!(quantize(-2.0, 3.0), StickPosition::Down);
    }

    #[test]
    fn test_diagonal_ties_go_clockwise() {
        assert_eq!(quantize(4.0, -4.0), StickPosition::Right);
        assert_eq!(quantize(4.0, 4.0), StickPosition::Down);
        assert_eq!(quantize(-4.0, 4.0), StickPosition::Left);
        assert_eq!(quantize(-4.0, -4.0), StickPosition::Up);
    }

    #[test]
    fn test_origin_is_center() {
        assert_eq!(quantize(0.0, 0.0), StickPosition::Center);
    }

    #[test]
    fn test_bearing_is_clockwise_from_up() {
        assert!((bearing(0.0, -1.0) - 0.0).abs() < 1e-9);
        assert!((bearing(1.0, 0.0) - 90.0).abs() < 1e-9);
        assert!((bearing(0.0, 1.0) - 180.0).abs() < 1e-9);
        assert!((bearing(-1.0, 0.0) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_quantize_agrees_with_bearing_away_from_ties() {
        for step in 0..36 {
            let degrees = f64::from(step) * 10.0 + 5.0;
            let radians = degrees.to_radians();
            let (dx, dy) = (radians.sin(), -radians.cos());
            let expected = match degrees {
                d if (45.0..135.0).contains(&d) => StickPosition::Right,
                d if (135.0..225.0).contains(&d) => StickPosition::Down,
                d if (225.0..315.0).contains(&d) => StickPosition::Left,
                _ => StickPosition::Up,
            };
            assert!((bearing(dx, dy) - degrees).abs() < 1e-6);
            assert_eq!(quantize(dx, dy), expected, "{degrees}°");
        }
    }
}
