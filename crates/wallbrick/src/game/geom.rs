/// Axis-aligned rectangle in window pixels (top-left origin, +Y down).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub const fn right(self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub const fn bottom(self) -> i32 {
        self.y + self.h
    }

    /// Separating-axis AABB overlap test, edge-inclusive: rectangles that
    /// merely touch count as overlapping.
    #[inline]
    pub fn overlaps(self, other: Rect) -> bool {
        !(self.right() < other.x
            || self.x > other.right()
            || self.bottom() < other.y
            || self.y > other.bottom())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: i32, y: i32, w: i32, h: i32) -> Rect {
        Rect::new(x, y, w, h)
    }

    // ── overlaps ──────────────────────────────────────────────────────────

    #[test]
    fn overlaps_is_symmetric() {
        let pairs = [
            (r(0, 0, 10, 10), r(5, 5, 10, 10)),
            (r(0, 0, 10, 10), r(10, 0, 10, 10)),
            (r(0, 0, 10, 10), r(20, 20, 10, 10)),
            (r(3, 7, 1, 1), r(0, 0, 100, 100)),
        ];
        for (a, b) in pairs {
            assert_eq!(a.overlaps(b), b.overlaps(a), "{a:?} vs {b:?}");
        }
    }

    #[test]
    fn disjoint_rects_do_not_overlap() {
        let a = r(0, 0, 10, 10);
        let b = r(20, 20, 10, 10);
        assert!(!a.overlaps(b));
    }

    #[test]
    fn touching_edges_overlap() {
        // Edge-inclusive: sharing a border counts as a collision.
        let a = r(0, 0, 10, 10);
        assert!(a.overlaps(r(10, 0, 10, 10)));
        assert!(a.overlaps(r(0, 10, 10, 10)));
    }

    #[test]
    fn touching_corner_overlaps() {
        let a = r(0, 0, 10, 10);
        let b = r(10, 10, 10, 10);
        assert!(a.overlaps(b));
    }

    #[test]
    fn contained_rect_overlaps() {
        let outer = r(0, 0, 100, 100);
        let inner = r(40, 40, 10, 10);
        assert!(outer.overlaps(inner));
    }

    #[test]
    fn separated_on_one_axis_only_does_not_overlap() {
        let a = r(0, 0, 10, 10);
        assert!(!a.overlaps(r(11, 0, 10, 10)));
        assert!(!a.overlaps(r(0, 11, 10, 10)));
    }

    // ── extents ───────────────────────────────────────────────────────────

    #[test]
    fn right_and_bottom() {
        let rect = r(5, 7, 10, 20);
        assert_eq!(rect.right(), 15);
        assert_eq!(rect.bottom(), 27);
    }
}
