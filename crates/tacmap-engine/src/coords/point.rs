use core::ops::{Add, Sub};

use super::Vec2;

/// Integer pixel position on a drawing surface (top-left origin).
///
/// Layout math that must be reproducible across platforms stays in this type
/// and is only converted to [`Vec2`] at the moment a draw command is recorded.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    pub const ORIGIN: PixelPoint = PixelPoint::new(0, 0);

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this point shifted by `(dx, dy)`.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }

    #[inline]
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }
}

impl From<PixelPoint> for Vec2 {
    #[inline]
    fn from(p: PixelPoint) -> Vec2 {
        p.to_vec2()
    }
}

impl From<(i32, i32)> for PixelPoint {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl Add for PixelPoint {
    type Output = PixelPoint;
    #[inline]
    fn add(self, rhs: PixelPoint) -> PixelPoint {
        PixelPoint::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for PixelPoint {
    type Output = PixelPoint;
    #[inline]
    fn sub(self, rhs: PixelPoint) -> PixelPoint {
        PixelPoint::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_moves_both_axes() {
        assert_eq!(PixelPoint::new(10, 20).offset(-5, -5), PixelPoint::new(5, 15));
    }

    #[test]
    fn converts_to_vec2_exactly() {
        let v: Vec2 = PixelPoint::new(-3, 1000).into();
        assert_eq!(v, Vec2::new(-3.0, 1000.0));
    }

    #[test]
    fn sub_is_inverse_of_add() {
        let a = PixelPoint::new(7, -2);
        let b = PixelPoint::new(1, 9);
        assert_eq!((a + b) - b, a);
    }
}
