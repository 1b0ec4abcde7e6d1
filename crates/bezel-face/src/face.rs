use bezel_engine::coords::Vec2;
use bezel_engine::paint::Color;
use bezel_engine::scene::{DrawList, ZIndex};
use bezel_engine::text::{FontId, FontSystem};

use crate::geometry::{slot_angle, slot_numeral, FaceGeometry};
use crate::readout::layout_runs;
use crate::wall_time::WallTime;

// Paint layers, back to front.
const Z_RING: ZIndex = ZIndex::new(0);
const Z_GLOW: ZIndex = ZIndex::new(1);
const Z_INDICATOR: ZIndex = ZIndex::new(2);
const Z_READOUT: ZIndex = ZIndex::new(3);

/// Visual parameters of the face.
///
/// All distances are logical pixels; insets are measured inward from the
/// rim of the face square.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceStyle {
    /// Tick marks end this far in from the rim.
    pub tick_outer_inset: f32,
    /// Tick marks start this far in from the rim.
    pub tick_inner_inset: f32,
    /// Numeral centers sit this far in from the rim.
    pub numeral_inset: f32,

    pub tick_width: f32,
    /// Width of every fifth tick.
    pub emphasis_tick_width: f32,
    pub tick_color: Color,
    pub emphasis_tick_color: Color,

    pub numeral_size: f32,
    pub numeral_color: Color,

    /// Indicator apex, measured inward from the rim at twelve o'clock.
    /// The apex sits nearest the rim; the base sits further inward.
    pub indicator_apex_inset: f32,
    /// Height of the indicator triangle (apex to base).
    pub indicator_height: f32,
    pub indicator_half_width: f32,
    pub indicator_color: Color,
    pub glow_color: Color,
    /// Edge falloff of the glow pass; the crisp pass uses ~1 px.
    pub glow_feather: f32,

    pub readout_size: f32,
    pub readout_color: Color,
}

impl Default for FaceStyle {
    fn default() -> Self {
        Self {
            tick_outer_inset: 20.0,
            tick_inner_inset: 25.0,
            numeral_inset: 45.0,

            tick_width: 1.2,
            emphasis_tick_width: 2.5,
            tick_color: Color::from_srgb_u8(200, 210, 220, 110),
            emphasis_tick_color: Color::from_srgb_u8(235, 240, 245, 210),

            numeral_size: 13.0,
            numeral_color: Color::from_srgb_u8(235, 240, 245, 255),

            indicator_apex_inset: 6.0,
            indicator_height: 12.0,
            indicator_half_width: 7.0,
            indicator_color: Color::from_srgb_u8(255, 96, 64, 255),
            glow_color: Color::from_srgb_u8(255, 96, 64, 255).faded(0.45),
            glow_feather: 6.0,

            readout_size: 26.0,
            readout_color: Color::from_srgb_u8(245, 248, 250, 255),
        }
    }
}

/// The animated clock face.
///
/// `render` is a pure function of `(geometry, time)`: it holds no frame
/// state and records the same draw commands for the same inputs.
#[derive(Debug, Clone)]
pub struct ClockFace {
    pub style: FaceStyle,
    pub font: FontId,
}

impl ClockFace {
    pub fn new(font: FontId) -> Self {
        Self { style: FaceStyle::default(), font }
    }

    pub fn with_style(font: FontId, style: FaceStyle) -> Self {
        Self { style, font }
    }

    /// Records one frame of the face into `list`.
    ///
    /// Layers, back to front: rotating ring (ticks and numerals), indicator
    /// glow, crisp indicator, digital readout.
    pub fn render(
        &self,
        geometry: FaceGeometry,
        now: WallTime,
        fonts: &FontSystem,
        list: &mut DrawList,
    ) {
        self.paint_rotating_seconds(geometry, now, fonts, list);
        self.paint_fixed_indicator(geometry, list);
        self.paint_center_time(geometry, now, fonts, list);
    }

    /// The ring of 60 tick marks, rotated so the current second's slot sits
    /// under the top indicator. Every fifth tick is widened and labelled
    /// with its count-down numeral.
    fn paint_rotating_seconds(
        &self,
        geometry: FaceGeometry,
        now: WallTime,
        fonts: &FontSystem,
        list: &mut DrawList,
    ) {
        let s = &self.style;
        let base = now.base_rotation_deg();

        for slot in 0..60 {
            let angle = slot_angle(base, slot);
            let emphasized = slot % 5 == 0;

            let from = geometry.rim_point(angle, s.tick_inner_inset);
            let to = geometry.rim_point(angle, s.tick_outer_inset);
            let (width, color) = if emphasized {
                (s.emphasis_tick_width, s.emphasis_tick_color)
            } else {
                (s.tick_width, s.tick_color)
            };
            list.push_line(Z_RING, from, to, width, color);

            if emphasized {
                let numeral = slot_numeral(slot);
                let measured = fonts.measure_text(&numeral, self.font, s.numeral_size);
                let anchor = geometry.rim_point(angle, s.numeral_inset);
                let origin = anchor - measured / 2.0;
                list.push_text(Z_RING, numeral, self.font, s.numeral_size, s.numeral_color, origin);
            }
        }
    }

    /// The fixed triangle at twelve o'clock, drawn twice: a wide-feather
    /// glow pass underneath a crisp pass. Depends only on geometry.
    fn paint_fixed_indicator(&self, geometry: FaceGeometry, list: &mut DrawList) {
        let s = &self.style;

        let apex = Vec2::new(
            geometry.center.x,
            geometry.center.y - (geometry.radius - s.indicator_apex_inset),
        );
        let base_y = apex.y + s.indicator_height;
        let vertices = [
            apex,
            Vec2::new(apex.x - s.indicator_half_width, base_y),
            Vec2::new(apex.x + s.indicator_half_width, base_y),
        ];

        list.push_triangle(Z_GLOW, vertices, s.glow_color, s.glow_feather);
        list.push_triangle(Z_INDICATOR, vertices, s.indicator_color, 1.0);
    }

    /// The `HH:MM:SS` readout, centered on the face as five measured runs.
    fn paint_center_time(
        &self,
        geometry: FaceGeometry,
        now: WallTime,
        fonts: &FontSystem,
        list: &mut DrawList,
    ) {
        let s = &self.style;

        let runs = [
            format!("{:02}", now.hour),
            ":".to_string(),
            format!("{:02}", now.minute),
            ":".to_string(),
            format!("{:02}", now.second),
        ];
        let sizes: Vec<Vec2> = runs
            .iter()
            .map(|r| fonts.measure_text(r, self.font, s.readout_size))
            .collect();

        let layout = layout_runs(geometry.center, &sizes);
        for (run, origin) in runs.into_iter().zip(layout.origins) {
            list.push_text(Z_READOUT, run, self.font, s.readout_size, s.readout_color, origin);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bezel_engine::scene::shapes::{LineCmd, TextCmd, TriangleCmd};
    use bezel_engine::scene::DrawCmd;

    fn render_at(h: u32, m: u32, sec: u32, micros: u32) -> DrawList {
        let fonts = FontSystem::new();
        let face = ClockFace::new(FontId(0));
        let mut list = DrawList::new();
        face.render(
            FaceGeometry::square(300.0),
            WallTime::from_hms_micros(h, m, sec, micros),
            &fonts,
            &mut list,
        );
        list
    }

    fn lines(list: &DrawList) -> Vec<&LineCmd> {
        list.items()
            .iter()
            .filter_map(|i| match &i.cmd {
                DrawCmd::Line(l) => Some(l),
                _ => None,
            })
            .collect()
    }

    fn triangles(list: &DrawList) -> Vec<&TriangleCmd> {
        list.items()
            .iter()
            .filter_map(|i| match &i.cmd {
                DrawCmd::Triangle(t) => Some(t),
                _ => None,
            })
            .collect()
    }

    fn texts_at(list: &DrawList, z: ZIndex) -> Vec<&TextCmd> {
        list.items()
            .iter()
            .filter(|i| i.key.z == z)
            .filter_map(|i| match &i.cmd {
                DrawCmd::Text(t) => Some(t),
                _ => None,
            })
            .collect()
    }

    // ── frame shape ───────────────────────────────────────────────────────

    #[test]
    fn one_frame_has_the_expected_command_counts() {
        let list = render_at(10, 20, 30, 0);
        // 60 ticks, 2 indicator passes, 12 numerals + 5 readout runs.
        assert_eq!(lines(&list).len(), 60);
        assert_eq!(triangles(&list).len(), 2);
        assert_eq!(texts_at(&list, Z_RING).len(), 12);
        assert_eq!(texts_at(&list, Z_READOUT).len(), 5);
    }

    #[test]
    fn rendering_is_deterministic() {
        let a = render_at(7, 8, 9, 123_456);
        let b = render_at(7, 8, 9, 123_456);
        assert_eq!(a.items(), b.items());
    }

    // ── rotating ring ─────────────────────────────────────────────────────

    #[test]
    fn every_fifth_tick_is_emphasized_and_labelled() {
        let list = render_at(0, 0, 0, 0);
        let style = FaceStyle::default();

        let wide: Vec<_> = lines(&list)
            .into_iter()
            .filter(|l| l.width == style.emphasis_tick_width)
            .collect();
        assert_eq!(wide.len(), 12);

        let numerals: Vec<String> = texts_at(&list, Z_RING)
            .iter()
            .map(|t| t.text.clone())
            .collect();
        let expected: Vec<String> = (0..12)
            .map(|k| format!("{:02}", (60 - k * 5) % 60))
            .collect();
        assert_eq!(numerals, expected);
    }

    #[test]
    fn ring_rotates_clockwise_with_seconds() {
        // At :00 slot 0 sits at the top; at :15 the ring has turned 90°
        // clockwise, putting slot 0 on the right side of the face.
        let at_zero = render_at(0, 0, 0, 0);
        let at_fifteen = render_at(0, 0, 15, 0);

        let top_tick = lines(&at_zero)[0];
        assert!((top_tick.to.x - 150.0).abs() < 1e-3);
        assert!(top_tick.to.y < 150.0);

        let right_tick = lines(&at_fifteen)[0];
        assert!((right_tick.to.y - 150.0).abs() < 1e-3);
        assert!(right_tick.to.x > 150.0);
    }

    #[test]
    fn ticks_span_the_configured_insets() {
        let list = render_at(0, 0, 0, 0);
        let style = FaceStyle::default();
        let center = Vec2::new(150.0, 150.0);

        for l in lines(&list) {
            let inner = (l.from - center).length();
            let outer = (l.to - center).length();
            assert!((inner - (150.0 - style.tick_inner_inset)).abs() < 1e-3);
            assert!((outer - (150.0 - style.tick_outer_inset)).abs() < 1e-3);
        }
    }

    // ── indicator ─────────────────────────────────────────────────────────

    #[test]
    fn indicator_does_not_move_with_time() {
        let a = render_at(0, 0, 0, 0);
        let b = render_at(23, 59, 59, 999_999);
        assert_eq!(
            triangles(&a).iter().map(|t| t.vertices).collect::<Vec<_>>(),
            triangles(&b).iter().map(|t| t.vertices).collect::<Vec<_>>(),
        );
    }

    #[test]
    fn indicator_glow_is_painted_under_the_crisp_pass() {
        let list = render_at(0, 0, 0, 0);
        let tris = triangles(&list);
        assert!(tris[0].feather > tris[1].feather);
        assert_eq!(tris[0].vertices, tris[1].vertices);
    }

    #[test]
    fn indicator_apex_sits_nearest_the_rim() {
        let list = render_at(0, 0, 0, 0);
        let style = FaceStyle::default();
        let apex = triangles(&list)[0].vertices[0];
        assert_eq!(apex.x, 150.0);
        assert!((apex.y - style.indicator_apex_inset).abs() < 1e-3);
        // Base vertices sit further inward (larger y at twelve o'clock).
        for v in &triangles(&list)[0].vertices[1..] {
            assert!(v.y > apex.y);
        }
    }

    // ── readout ───────────────────────────────────────────────────────────

    #[test]
    fn readout_spells_the_time_in_five_runs() {
        let list = render_at(12, 34, 56, 0);
        let runs: Vec<String> = texts_at(&list, Z_READOUT)
            .iter()
            .map(|t| t.text.clone())
            .collect();
        assert_eq!(runs, vec!["12", ":", "34", ":", "56"]);
    }

    #[test]
    fn readout_is_centered_on_the_face() {
        // With no font loaded every run measures zero width, so the whole
        // string collapses onto the face center.
        let list = render_at(1, 2, 3, 0);
        for t in texts_at(&list, Z_READOUT) {
            assert_eq!(t.origin.x, 150.0);
        }
    }
}
