/// Premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are already multiplied by `a`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Color = Color::from_premul(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Color = Color::from_premul(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::from_premul(1.0, 1.0, 1.0, 1.0);

    /// Creates a premultiplied color from straight 8-bit RGBA, the same
    /// `(alpha, r, g, b)` bytes a host toolkit would hand to a brush.
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Creates a premultiplied color from premultiplied components.
    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: r.clamp(0.0, 1.0) * a,
            g: g.clamp(0.0, 1.0) * a,
            b: b.clamp(0.0, 1.0) * a,
            a,
        }
    }

    /// Returns a straight-alpha representation.
    ///
    /// For `a == 0`, RGB is returned as 0.
    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        if self.a <= 0.0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let inv = 1.0 / self.a;
            (self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }

    /// Straight-alpha 8-bit channels, rounded. Inverse of [`from_srgb_u8`](Self::from_srgb_u8).
    pub fn to_srgb_u8(self) -> [u8; 4] {
        let (r, g, b, a) = self.to_straight();
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(r), q(g), q(b), q(a)]
    }

    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a >= 1.0
    }
}
