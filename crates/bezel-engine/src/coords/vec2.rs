use core::ops::{Add, Div, Mul, Sub};

/// 2D vector in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Unit vector at `angle` radians.
    ///
    /// With +Y down, angle 0 points right and increasing angles turn
    /// clockwise on screen; `-PI/2` points toward the top of the window.
    #[inline]
    pub fn from_angle(angle: f32) -> Self {
        Self { x: angle.cos(), y: angle.sin() }
    }

    /// Point at distance `r` from `self` along `angle` radians.
    #[inline]
    pub fn polar_offset(self, angle: f32, r: f32) -> Self {
        self + Vec2::from_angle(angle) * r
    }

    #[inline]
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use core::f32::consts::FRAC_PI_2;

    fn approx(a: Vec2, b: Vec2) {
        assert!((a.x - b.x).abs() < 1e-5, "x: {} vs {}", a.x, b.x);
        assert!((a.y - b.y).abs() < 1e-5, "y: {} vs {}", a.y, b.y);
    }

    // ── from_angle ────────────────────────────────────────────────────────

    #[test]
    fn angle_zero_points_right() {
        approx(Vec2::from_angle(0.0), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn negative_quarter_turn_points_up() {
        // Screen coordinates: up is -Y.
        approx(Vec2::from_angle(-FRAC_PI_2), Vec2::new(0.0, -1.0));
    }

    #[test]
    fn positive_quarter_turn_points_down() {
        approx(Vec2::from_angle(FRAC_PI_2), Vec2::new(0.0, 1.0));
    }

    // ── polar_offset ──────────────────────────────────────────────────────

    #[test]
    fn polar_offset_moves_by_radius() {
        let c = Vec2::new(150.0, 150.0);
        let p = c.polar_offset(-FRAC_PI_2, 100.0);
        approx(p, Vec2::new(150.0, 50.0));
    }

    #[test]
    fn polar_offset_zero_radius_is_identity() {
        let c = Vec2::new(3.0, 4.0);
        approx(c.polar_offset(1.234, 0.0), c);
    }
}
