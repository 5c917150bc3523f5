//! Screen-space geometry for the sidebar
//!
//! All coordinates are physical pixels in the global desktop space, the same
//! space the windowing system uses for window positions.

/// A point in global screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Sum of the absolute components (taxicab distance from the origin)
    #[inline]
    pub fn manhattan_length(&self) -> i32 {
        self.x.abs() + self.y.abs()
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Width and height of a widget in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle (x/y is the top-left corner, right/bottom exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    #[inline]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Overlapping region of two rectangles (empty rect at the origin if disjoint)
    pub fn intersection(&self, other: &Rect) -> Rect {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());

        if x1 <= x0 || y1 <= y0 {
            return Rect::default();
        }
        Rect::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// Smallest rectangle containing both (empty rects are ignored)
    pub fn union(&self, other: &Rect) -> Rect {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }

        let x0 = self.x.min(other.x);
        let y0 = self.y.min(other.y);
        let x1 = self.right().max(other.right());
        let y1 = self.bottom().max(other.bottom());
        Rect::new(x0, y0, x1 - x0, y1 - y0)
    }
}

/// Screen edge a panel or indicator is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Left, Side::Right];

    pub fn opposite(&self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Snapshot of the usable screen area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Usable rectangle of the primary screen (placement and edge snapping)
    pub primary: Rect,
    /// Union of every connected screen (off-screen checks)
    pub combined: Rect,
}

impl ScreenLayout {
    /// Layout for a single screen
    pub fn single(primary: Rect) -> Self {
        Self {
            primary,
            combined: primary,
        }
    }

    /// Layout from a primary screen plus every screen (primary included)
    pub fn from_screens(primary: Rect, screens: impl IntoIterator<Item = Rect>) -> Self {
        let combined = screens
            .into_iter()
            .fold(Rect::default(), |acc, r| acc.union(&r));
        Self {
            primary,
            combined: combined.union(&primary),
        }
    }
}

impl Default for ScreenLayout {
    fn default() -> Self {
        Self::single(Rect::new(0, 0, 1920, 1080))
    }
}

/// Read-only provider of the current screen geometry
pub trait ScreenGeometry {
    /// Current screen layout; must be side-effect free
    fn layout(&self) -> ScreenLayout;
}

impl ScreenGeometry for ScreenLayout {
    fn layout(&self) -> ScreenLayout {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersection_partial_overlap() {
        let screen = Rect::new(0, 0, 1920, 1080);
        let panel = Rect::new(-30, 100, 50, 120);
        let overlap = screen.intersection(&panel);
        assert_eq!(overlap, Rect::new(0, 100, 20, 120));
    }

    #[test]
    fn test_intersection_disjoint_is_empty() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(20, 20, 10, 10);
        assert!(a.intersection(&b).is_empty());
        assert_eq!(a.intersection(&b).width, 0);
    }

    #[test]
    fn test_union_spans_side_by_side_screens() {
        let left = Rect::new(0, 0, 1920, 1080);
        let right = Rect::new(1920, 0, 2560, 1440);
        assert_eq!(left.union(&right), Rect::new(0, 0, 4480, 1440));
    }

    #[test]
    fn test_union_ignores_empty() {
        let r = Rect::new(5, 5, 10, 10);
        assert_eq!(Rect::default().union(&r), r);
        assert_eq!(r.union(&Rect::default()), r);
    }

    #[test]
    fn test_layout_from_screens_includes_primary() {
        let primary = Rect::new(0, 0, 1920, 1080);
        let layout = ScreenLayout::from_screens(primary, [Rect::new(-1280, 0, 1280, 1024)]);
        assert_eq!(layout.primary, primary);
        assert_eq!(layout.combined, Rect::new(-1280, 0, 3200, 1080));
    }

    #[test]
    fn test_manhattan_length() {
        assert_eq!(Point::new(3, -4).manhattan_length(), 7);
        assert_eq!((Point::new(10, 10) - Point::new(12, 7)).manhattan_length(), 5);
    }

    #[test]
    fn test_contains_is_right_exclusive() {
        let r = Rect::new(0, 0, 50, 120);
        assert!(r.contains(Point::new(0, 0)));
        assert!(r.contains(Point::new(49, 119)));
        assert!(!r.contains(Point::new(50, 10)));
    }
}
