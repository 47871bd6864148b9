#![forbid(unsafe_code)]

//! Geometric primitives in logical units.
//!
//! Hosts measure in density-independent logical units, so everything here is
//! `f64`. Coordinates have their origin at the top-left of the screen and grow
//! downward.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Check if either side is zero or negative.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// A rectangle used for layout bounds and hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: f64,
    /// Top edge (inclusive).
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (exclusive).
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Shrink horizontally by `margin` on both sides.
    ///
    /// The width never goes below zero.
    #[must_use]
    pub fn inset_x(&self, margin: f64) -> Self {
        let width = (self.width - 2.0 * margin).max(0.0);
        Self::new(self.x + margin, self.y, width, self.height)
    }
}

/// Raw dimensions as a host reports them.
///
/// `screen` is the physical display; `window` is the area the app draws
/// into. Hosts without a separate notion of screen report the same size
/// twice.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dimensions {
    pub screen: Size,
    pub window: Size,
}

impl Dimensions {
    /// Create dimensions from separate screen and window sizes.
    pub const fn new(screen: Size, window: Size) -> Self {
        Self { screen, window }
    }

    /// Dimensions where screen and window coincide.
    pub const fn uniform(width: f64, height: f64) -> Self {
        let size = Size::new(width, height);
        Self {
            screen: size,
            window: size,
        }
    }
}

/// The two measurements the sheet actually consumes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScreenMetrics {
    pub screen_height: f64,
    pub window_width: f64,
}

impl ScreenMetrics {
    pub const fn new(screen_height: f64, window_width: f64) -> Self {
        Self {
            screen_height,
            window_width,
        }
    }
}

impl From<Dimensions> for ScreenMetrics {
    fn from(dims: Dimensions) -> Self {
        Self::new(dims.screen.height, dims.window.width)
    }
}

impl From<&Dimensions> for ScreenMetrics {
    fn from(dims: &Dimensions) -> Self {
        Self::from(*dims)
    }
}
