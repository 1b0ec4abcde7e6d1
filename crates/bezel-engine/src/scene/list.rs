use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for a frame.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-frame
///   allocation once warmed
///
/// The face repopulates one `DrawList` per frame via `clear()` + pushes;
/// identical pushes produce identical item slices, which is what the
/// determinism tests compare.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    /// Pushes a draw command with the given z-index.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
        });

        self.sorted_dirty = true;
    }

    /// Iterates items in paint order (back-to-front) without cloning commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Stable ordering is ensured by SortKey including insertion order.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    fn probe(list: &mut DrawList, z: i32, x: f32) {
        // A line whose start x identifies the push site.
        list.push_line(
            ZIndex::new(z),
            Vec2::new(x, 0.0),
            Vec2::new(x, 1.0),
            1.0,
            Color::from_straight(1.0, 1.0, 1.0, 1.0),
        );
    }

    fn start_x(item: &DrawItem) -> f32 {
        match &item.cmd {
            DrawCmd::Line(l) => l.from.x,
            other => panic!("expected line, got {other:?}"),
        }
    }

    // ── ordering ──────────────────────────────────────────────────────────

    #[test]
    fn paint_order_sorts_by_z_then_insertion() {
        let mut list = DrawList::new();
        probe(&mut list, 1, 10.0);
        probe(&mut list, 0, 20.0);
        probe(&mut list, 1, 30.0);

        let xs: Vec<f32> = list.iter_in_paint_order().map(start_x).collect();
        assert_eq!(xs, vec![20.0, 10.0, 30.0]);
    }

    #[test]
    fn insertion_order_is_stable_within_a_layer() {
        let mut list = DrawList::new();
        for i in 0..8 {
            probe(&mut list, 0, i as f32);
        }
        let xs: Vec<f32> = list.iter_in_paint_order().map(start_x).collect();
        assert_eq!(xs, (0..8).map(|i| i as f32).collect::<Vec<_>>());
    }

    // ── clear ─────────────────────────────────────────────────────────────

    #[test]
    fn clear_resets_items_and_order() {
        let mut list = DrawList::new();
        probe(&mut list, 3, 1.0);
        list.clear();
        assert!(list.is_empty());

        probe(&mut list, 0, 2.0);
        assert_eq!(list.items()[0].key.order, 0);
    }

    #[test]
    fn identical_pushes_produce_identical_items() {
        let mut a = DrawList::new();
        let mut b = DrawList::new();
        probe(&mut a, 2, 5.0);
        probe(&mut b, 2, 5.0);
        assert_eq!(a.items(), b.items());
    }
}
