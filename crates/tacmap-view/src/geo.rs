//! Geographic values and the linear geo-to-pixel projection.
//!
//! All arithmetic is done in [`Decimal`]. Floating point is never involved
//! between the provider's coordinates and the integer pixel result, so the
//! same inputs land on the same pixel on every platform and every frame.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use tacmap_engine::coords::{PixelPoint, SurfaceSize};
use thiserror::Error;

/// Latitude/longitude in signed decimal degrees.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub latitude: Decimal,
    pub longitude: Decimal,
}

impl Position {
    #[inline]
    pub const fn new(latitude: Decimal, longitude: Decimal) -> Self {
        Self { latitude, longitude }
    }
}

/// Geographic extent of the drawing surface.
///
/// `*_start` maps to pixel 0 and `*_end` maps to the surface's full width or
/// height. Either axis may run "backwards" (e.g. latitude decreasing down the
/// screen); only a zero span is invalid.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct GeoBox {
    pub latitude_start: Decimal,
    pub latitude_end: Decimal,
    pub longitude_start: Decimal,
    pub longitude_end: Decimal,
}

impl GeoBox {
    #[inline]
    pub const fn new(
        latitude_start: Decimal,
        latitude_end: Decimal,
        longitude_start: Decimal,
        longitude_end: Decimal,
    ) -> Self {
        Self { latitude_start, latitude_end, longitude_start, longitude_end }
    }

    /// Position mapped to pixel `(0, 0)`.
    #[inline]
    pub fn start(&self) -> Position {
        Position::new(self.latitude_start, self.longitude_start)
    }

    /// Position mapped to pixel `(width, height)`.
    #[inline]
    pub fn end(&self) -> Position {
        Position::new(self.latitude_end, self.longitude_end)
    }

    /// Checks the non-zero-span invariant.
    pub fn validate(&self) -> Result<(), ProjectionError> {
        if self.latitude_start == self.latitude_end {
            return Err(ProjectionError::DegenerateBounds { axis: Axis::Latitude });
        }
        if self.longitude_start == self.longitude_end {
            return Err(ProjectionError::DegenerateBounds { axis: Axis::Longitude });
        }
        Ok(())
    }

    /// Inclusive containment on both axes, independent of axis direction.
    pub fn contains(&self, p: Position) -> bool {
        fn within(v: Decimal, a: Decimal, b: Decimal) -> bool {
            v >= a.min(b) && v <= a.max(b)
        }
        within(p.latitude, self.latitude_start, self.latitude_end)
            && within(p.longitude, self.longitude_start, self.longitude_end)
    }
}

/// Geographic axis, used to locate projection failures.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::Latitude => "latitude",
            Axis::Longitude => "longitude",
        })
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
pub enum ProjectionError {
    /// Start and end of an axis coincide; the projection would divide by zero.
    #[error("degenerate map bounds: zero {axis} span")]
    DegenerateBounds { axis: Axis },
    /// The decimal computation or its integer result does not fit.
    #[error("{axis} projection overflowed the pixel range")]
    Overflow { axis: Axis },
}

/// Projects `pos` into pixel space of a `surface`-sized target covering `bounds`.
///
/// `x` follows longitude, `y` follows latitude; both are truncated toward
/// zero. Positions outside `bounds` land outside the surface: nothing is
/// clamped.
pub fn project(
    pos: Position,
    bounds: &GeoBox,
    surface: SurfaceSize,
) -> Result<PixelPoint, ProjectionError> {
    let x = project_axis(
        pos.longitude,
        bounds.longitude_start,
        bounds.longitude_end,
        surface.width,
        Axis::Longitude,
    )?;
    let y = project_axis(
        pos.latitude,
        bounds.latitude_start,
        bounds.latitude_end,
        surface.height,
        Axis::Latitude,
    )?;
    Ok(PixelPoint::new(x, y))
}

fn project_axis(
    value: Decimal,
    start: Decimal,
    end: Decimal,
    extent: u32,
    axis: Axis,
) -> Result<i32, ProjectionError> {
    let overflow = ProjectionError::Overflow { axis };

    let span = end.checked_sub(start).ok_or(overflow)?;
    if span.is_zero() {
        return Err(ProjectionError::DegenerateBounds { axis });
    }

    // Divide first, then scale: same operation order as the fraction is defined.
    value
        .checked_sub(start)
        .and_then(|offset| offset.checked_div(span))
        .and_then(|fraction| fraction.checked_mul(Decimal::from(extent)))
        .and_then(|px| px.trunc().to_i32())
        .ok_or(overflow)
}
