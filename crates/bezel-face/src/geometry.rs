use bezel_engine::coords::Vec2;

/// Degrees between adjacent tick slots (60 slots on the ring).
pub(crate) const DEG_PER_SLOT: f64 = 6.0;

/// The square drawing area the face is painted into.
///
/// Constant for the process lifetime in practice; cheap enough to
/// recompute from the window's logical size every frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FaceGeometry {
    pub center: Vec2,
    /// Half the side length of the square face.
    pub radius: f32,
}

impl FaceGeometry {
    /// A square face of the given side length, anchored at the origin.
    pub fn square(side: f32) -> Self {
        Self {
            center: Vec2::new(side / 2.0, side / 2.0),
            radius: side / 2.0,
        }
    }

    /// Centers the largest square face that fits a `width` × `height`
    /// viewport.
    pub fn fit(width: f32, height: f32) -> Self {
        Self {
            center: Vec2::new(width / 2.0, height / 2.0),
            radius: width.min(height) / 2.0,
        }
    }

    /// Point at `inset` logical pixels inward from the rim, along `angle`
    /// radians from the center.
    #[inline]
    pub fn rim_point(&self, angle: f32, inset: f32) -> Vec2 {
        self.center.polar_offset(angle, self.radius - inset)
    }
}

/// Angle in radians for tick slot `slot` with the ring rotated by
/// `base_rotation_deg`.
///
/// The −90° offset places slot 0 at the top of the face; the whole ring
/// sweeps clockwise as the rotation grows.
pub(crate) fn slot_angle(base_rotation_deg: f64, slot: usize) -> f32 {
    let deg = base_rotation_deg + slot as f64 * DEG_PER_SLOT - 90.0;
    deg.to_radians() as f32
}

/// Two-digit numeral shown at tick slot `slot`.
///
/// Numerals count down clockwise from the top: slot 0 shows "00"
/// (i.e. 60), slot 5 shows "55", slot 55 shows "05". Observed behavior
/// of the face, kept as-is.
pub(crate) fn slot_numeral(slot: usize) -> String {
    format!("{:02}", (60 - slot) % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    use core::f32::consts::PI;

    // ── numerals ──────────────────────────────────────────────────────────

    #[test]
    fn numeral_at_top_is_zero_padded_sixty() {
        assert_eq!(slot_numeral(0), "00");
    }

    #[test]
    fn numerals_count_down_clockwise() {
        assert_eq!(slot_numeral(5), "55");
        assert_eq!(slot_numeral(30), "30");
        assert_eq!(slot_numeral(55), "05");
    }

    #[test]
    fn every_slot_numeral_matches_formula() {
        for i in 0..60 {
            let expect = format!("{:02}", (60 - i) % 60);
            assert_eq!(slot_numeral(i), expect, "slot {i}");
        }
    }

    // ── angles ────────────────────────────────────────────────────────────

    #[test]
    fn slot_zero_unrotated_points_up() {
        let a = slot_angle(0.0, 0);
        assert!((a - (-PI / 2.0)).abs() < 1e-6);
    }

    #[test]
    fn slots_are_six_degrees_apart() {
        let step = slot_angle(0.0, 1) - slot_angle(0.0, 0);
        assert!((step - 6.0f32.to_radians()).abs() < 1e-6);
    }

    #[test]
    fn rotation_shifts_every_slot_equally() {
        for slot in [0, 17, 59] {
            let shift = slot_angle(90.0, slot) - slot_angle(0.0, slot);
            assert!((shift - (PI / 2.0)).abs() < 1e-5, "slot {slot}");
        }
    }

    // ── geometry ──────────────────────────────────────────────────────────

    #[test]
    fn square_face_is_centered() {
        let g = FaceGeometry::square(300.0);
        assert_eq!(g.center, Vec2::new(150.0, 150.0));
        assert_eq!(g.radius, 150.0);
    }

    #[test]
    fn fit_uses_smaller_dimension() {
        let g = FaceGeometry::fit(400.0, 300.0);
        assert_eq!(g.center, Vec2::new(200.0, 150.0));
        assert_eq!(g.radius, 150.0);
    }

    #[test]
    fn rim_point_at_zero_inset_touches_rim() {
        let g = FaceGeometry::square(300.0);
        let top = g.rim_point(-PI / 2.0, 0.0);
        assert!((top.x - 150.0).abs() < 1e-4);
        assert!(top.y.abs() < 1e-4);
    }
}
