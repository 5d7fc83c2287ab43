use super::Vec2;

/// Axis-aligned rectangle in surface pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Smallest rectangle containing every point, or `None` for an empty slice.
    pub fn bounding(points: &[Vec2]) -> Option<Rect> {
        let (first, rest) = points.split_first()?;
        let (lo, hi) = rest
            .iter()
            .fold((*first, *first), |(lo, hi), &p| (lo.min(p), hi.max(p)));
        Some(Rect::from_origin_size(lo, hi - lo))
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let lo = self.origin.min(self.max());
        let hi = self.origin.max(self.max());
        Rect::from_origin_size(lo, hi - lo)
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let r = self.normalized();
        let max = r.max();
        p.x >= r.origin.x && p.y >= r.origin.y && p.x < max.x && p.y < max.y
    }

    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let a = self.normalized();
        let b = other.normalized();

        let lo = a.origin.max(b.origin);
        let hi = a.max().min(b.max());
        let size = hi - lo;

        if size.x <= 0.0 || size.y <= 0.0 {
            None
        } else {
            Some(Rect::from_origin_size(lo, size))
        }
    }
}
