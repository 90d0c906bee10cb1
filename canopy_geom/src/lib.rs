// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Geom: Kurbo-native rect arithmetic for panel positioning.
//!
//! ## Overview
//!
//! This crate is the leaf of the Canopy stack. It measures how a candidate
//! panel box relates to a bounding rect (typically a margin-narrowed
//! viewport): how far it overflows each edge, how much of it remains
//! visible, and whether it is clipped or entirely off screen. It also snaps
//! rects to the pixel grid so that fit comparisons tolerate sub-pixel
//! layout noise.
//!
//! All types are [`kurbo`] types; there is no wrapper geometry here.
//!
//! ## Example
//!
//! ```
//! use canopy_geom::{visible_area, Overflow};
//! use kurbo::Rect;
//!
//! let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
//! let panel = Rect::new(80.0, 10.0, 110.0, 40.0);
//!
//! let overflow = Overflow::between(panel, bounds);
//! assert_eq!(overflow.right, 10.0);
//! assert_eq!(overflow.left, 0.0);
//!
//! // 20 of 30 horizontal pixels remain visible.
//! assert_eq!(visible_area(panel, bounds), 20.0 * 30.0);
//! ```
//!
//! This crate is `no_std`; enable the `libm` feature for float math without
//! `std`.

#![no_std]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("canopy_geom requires either the `std` or `libm` feature.");

use kurbo::{Rect, Size};

/// Floor, routed through `std` or `libm` depending on the build.
#[inline]
pub fn floor(v: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        v.floor()
    }
    #[cfg(all(not(feature = "std"), feature = "libm"))]
    {
        libm::floor(v)
    }
}

/// Per-edge overflow of one rect past a bounding rect.
///
/// Each field is the distance the rect extends past the corresponding edge
/// of the bounds, floored at zero. A rect fully inside the bounds has zero
/// overflow on all four edges.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Overflow {
    /// Distance past the left edge of the bounds.
    pub left: f64,
    /// Distance past the top edge of the bounds.
    pub top: f64,
    /// Distance past the right edge of the bounds.
    pub right: f64,
    /// Distance past the bottom edge of the bounds.
    pub bottom: f64,
}

impl Overflow {
    /// Measure how far `rect` extends past each edge of `bounds`.
    pub fn between(rect: Rect, bounds: Rect) -> Self {
        Self {
            left: (bounds.x0 - rect.x0).max(0.0),
            top: (bounds.y0 - rect.y0).max(0.0),
            right: (rect.x1 - bounds.x1).max(0.0),
            bottom: (rect.y1 - bounds.y1).max(0.0),
        }
    }

    /// True if the rect lies entirely within the bounds.
    pub fn is_none(&self) -> bool {
        self.left == 0.0 && self.top == 0.0 && self.right == 0.0 && self.bottom == 0.0
    }
}

/// The portion of `rect`'s extent that remains inside `bounds`, per axis.
///
/// Opposing-edge overflows are subtracted from the full extent and the
/// result is floored at zero, so a rect past both edges of an axis reports
/// zero rather than a negative width.
pub fn visible_size(rect: Rect, bounds: Rect) -> Size {
    let ov = Overflow::between(rect, bounds);
    Size::new(
        (rect.width() - ov.left - ov.right).max(0.0),
        (rect.height() - ov.top - ov.bottom).max(0.0),
    )
}

/// Visible width times visible height of `rect` within `bounds`.
pub fn visible_area(rect: Rect, bounds: Rect) -> f64 {
    visible_size(rect, bounds).area()
}

/// Snap a rect to the pixel grid: floor its origin and its extents.
///
/// Flooring both the origin and the width/height (rather than each corner
/// independently) matches how measured element rects are compared against a
/// pixel-aligned viewport; the result never grows past the input.
pub fn round_down(rect: Rect) -> Rect {
    let x0 = floor(rect.x0);
    let y0 = floor(rect.y0);
    Rect::new(x0, y0, x0 + floor(rect.width()), y0 + floor(rect.height()))
}

/// True if `rect` lies entirely outside `bounds` (no overlap at all).
pub fn is_outside(rect: Rect, bounds: Rect) -> bool {
    rect.x1 < bounds.x0 || rect.x0 > bounds.x1 || rect.y1 < bounds.y0 || rect.y0 > bounds.y1
}

/// True if `rect` extends past at least one edge of `bounds`.
///
/// A fully outside rect is also clipped; callers that want "partially
/// visible" combine this with [`is_outside`].
pub fn is_clipped(rect: Rect, bounds: Rect) -> bool {
    !Overflow::between(rect, bounds).is_none()
}
