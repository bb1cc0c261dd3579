/// Axis-aligned rectangle in integer pixel space.
///
/// `right()` and `bottom()` are exclusive: a rect at x=0 with w=10 covers
/// pixel columns 0..10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Shrink by `d` on every side.  Width/height may go non-positive;
    /// callers check [`is_empty`](Self::is_empty).
    #[must_use]
    pub const fn inset(&self, d: i32) -> Self {
        Self {
            x: self.x + d,
            y: self.y + d,
            w: self.w - 2 * d,
            h: self.h - 2 * d,
        }
    }

    /// Shrink by `dx` horizontally and `dy` vertically.
    #[must_use]
    pub const fn inset_xy(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            w: self.w - 2 * dx,
            h: self.h - 2 * dy,
        }
    }

    /// Grow by `d` on every side.
    #[must_use]
    pub const fn expand(&self, d: i32) -> Self {
        self.inset(-d)
    }

    /// Whether `other` shares any pixel with `self`.
    pub fn intersects(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// A disk, used for status-badge geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    pub cx: i32,
    pub cy: i32,
    pub r: i32,
}

impl Circle {
    pub const fn new(cx: i32, cy: i32, r: i32) -> Self {
        Self { cx, cy, r }
    }

    /// Disk inscribed in `rect` (radius = half the shorter side).
    pub fn inscribed(rect: Rect) -> Self {
        let r = rect.w.min(rect.h) / 2;
        Self {
            cx: rect.x + rect.w / 2,
            cy: rect.y + rect.h / 2,
            r,
        }
    }
}

/// Anchor corner for corner-positioned badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    #[inline]
    pub const fn is_bottom(&self) -> bool {
        matches!(self, Corner::BottomLeft | Corner::BottomRight)
    }

    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Corner::TopLeft | Corner::BottomLeft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inset_then_expand_round_trips() {
        let r = Rect::new(10, 10, 100, 50);
        assert_eq!(r.inset(3).expand(3), r);
    }

    #[test]
    fn empty_after_over_inset() {
        assert!(Rect::new(0, 0, 4, 4).inset(3).is_empty());
    }

    #[test]
    fn intersection_is_edge_exclusive() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(10, 0, 10, 10);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&Rect::new(9, 0, 10, 10)));
    }

    #[test]
    fn inscribed_disk_centers() {
        let c = Circle::inscribed(Rect::new(0, 0, 16, 16));
        assert_eq!(c, Circle::new(8, 8, 8));
    }
}
