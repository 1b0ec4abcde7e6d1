//! Run layout for the digital readout.
//!
//! The readout is drawn as five independently measured runs
//! (`HH`, `:`, `MM`, `:`, `SS`) so the math stays correct for
//! proportional fonts. Layout is a pure function of the measured sizes,
//! which keeps it testable without loading a font.

use bezel_engine::coords::Vec2;

/// Computed placement for a sequence of text runs.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RunLayout {
    /// Top-left origin per run, in input order.
    pub origins: Vec<Vec2>,
    /// X of the first run's origin.
    pub start_x: f32,
    /// Sum of all measured run widths.
    pub total_width: f32,
}

/// Centers `sizes` as one horizontal string on `center`.
///
/// Horizontal: the summed width is split evenly around `center.x`, so
/// `start_x + total_width / 2 == center.x`. Vertical: the whole string
/// sits on one baseline derived from the height of the *first* run.
pub(crate) fn layout_runs(center: Vec2, sizes: &[Vec2]) -> RunLayout {
    let total_width: f32 = sizes.iter().map(|s| s.x).sum();
    let start_x = center.x - total_width / 2.0;
    let y = center.y - sizes.first().map_or(0.0, |s| s.y) / 2.0;

    let mut x = start_x;
    let origins = sizes
        .iter()
        .map(|s| {
            let origin = Vec2::new(x, y);
            x += s.x;
            origin
        })
        .collect();

    RunLayout { origins, start_x, total_width }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sz(w: f32, h: f32) -> Vec2 {
        Vec2::new(w, h)
    }

    #[test]
    fn centering_round_trips() {
        let center = Vec2::new(150.0, 150.0);
        let sizes = [sz(30.0, 24.0), sz(8.0, 24.0), sz(30.0, 24.0), sz(8.0, 24.0), sz(30.0, 24.0)];
        let l = layout_runs(center, &sizes);

        assert_eq!(l.total_width, 106.0);
        assert!((l.start_x + l.total_width / 2.0 - center.x).abs() < 1e-4);
    }

    #[test]
    fn runs_advance_by_measured_width() {
        let l = layout_runs(Vec2::new(100.0, 100.0), &[sz(10.0, 20.0), sz(5.0, 20.0), sz(7.0, 20.0)]);
        assert_eq!(l.origins.len(), 3);
        assert!((l.origins[1].x - (l.origins[0].x + 10.0)).abs() < 1e-5);
        assert!((l.origins[2].x - (l.origins[1].x + 5.0)).abs() < 1e-5);
    }

    #[test]
    fn vertical_centering_uses_first_run_height() {
        let l = layout_runs(Vec2::new(100.0, 100.0), &[sz(10.0, 24.0), sz(5.0, 12.0)]);
        for origin in &l.origins {
            assert_eq!(origin.y, 100.0 - 12.0);
        }
    }

    #[test]
    fn empty_input_centers_on_x() {
        let l = layout_runs(Vec2::new(42.0, 0.0), &[]);
        assert_eq!(l.total_width, 0.0);
        assert_eq!(l.start_x, 42.0);
        assert!(l.origins.is_empty());
    }
}
