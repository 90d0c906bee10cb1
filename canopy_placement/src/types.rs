// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for placement: anchors, candidate positions, fits, and size
//! limits.
//!
//! ## Overview
//!
//! These types describe the placement vocabulary. A
//! [`ConnectedPosition`] names one way of gluing a panel corner to an anchor
//! corner; the [selector](crate::select) consumes an ordered list of them.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::Vec2;

/// Horizontal layout direction.
///
/// `Start`/`End` anchors resolve against this: under [`Rtl`](Direction::Rtl)
/// a `Start` anchor is the right edge. Direction is an explicit input to the
/// resolver functions rather than ambient state, so the same candidate list
/// can be evaluated under either direction.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Left-to-right. `Start` is the left edge.
    #[default]
    Ltr,
    /// Right-to-left. `Start` is the right edge.
    Rtl,
}

impl Direction {
    /// True for right-to-left layouts.
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }
}

/// Horizontal anchor on a rect, resolved relative to [`Direction`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum HorizontalAnchor {
    /// The leading edge: left under LTR, right under RTL.
    #[default]
    Start,
    /// The horizontal midpoint.
    Center,
    /// The trailing edge: right under LTR, left under RTL.
    End,
}

/// Vertical anchor on a rect. Not direction-sensitive.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum VerticalAnchor {
    /// The top edge.
    #[default]
    Top,
    /// The vertical midpoint.
    Center,
    /// The bottom edge.
    Bottom,
}

/// One candidate connection geometry between an anchor and a panel.
///
/// The anchor's `(origin_x, origin_y)` corner is glued to the panel's
/// `(panel_x, panel_y)` corner, optionally displaced by per-candidate
/// offsets. Offsets participate in fit evaluation, not just final
/// rendering: an offset can move an otherwise-fitting box out of bounds.
///
/// List position is priority: the selector walks candidates in the order
/// given, and the first-listed candidate wins all ties.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConnectedPosition {
    /// Horizontal anchor on the origin rect.
    pub origin_x: HorizontalAnchor,
    /// Vertical anchor on the origin rect.
    pub origin_y: VerticalAnchor,
    /// Horizontal anchor on the panel; this corner lands on the origin point.
    pub panel_x: HorizontalAnchor,
    /// Vertical anchor on the panel.
    pub panel_y: VerticalAnchor,
    /// Multiplier applied to this candidate's flexible-fit score. `None`
    /// means 1.
    pub weight: Option<f64>,
    /// Horizontal displacement, overriding the strategy default when set.
    pub offset_x: Option<f64>,
    /// Vertical displacement, overriding the strategy default when set.
    pub offset_y: Option<f64>,
    /// Style classes the renderer applies while this candidate is active.
    pub panel_classes: Vec<String>,
}

impl ConnectedPosition {
    /// A candidate connecting the given anchor corners with no offsets,
    /// weight, or classes.
    pub const fn new(
        origin_x: HorizontalAnchor,
        origin_y: VerticalAnchor,
        panel_x: HorizontalAnchor,
        panel_y: VerticalAnchor,
    ) -> Self {
        Self {
            origin_x,
            origin_y,
            panel_x,
            panel_y,
            weight: None,
            offset_x: None,
            offset_y: None,
            panel_classes: Vec::new(),
        }
    }

    /// Set both offsets.
    pub fn with_offset(mut self, x: f64, y: f64) -> Self {
        self.offset_x = Some(x);
        self.offset_y = Some(y);
        self
    }

    /// Set the flexible-fit weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Add a style class applied while this candidate is active.
    pub fn with_panel_class(mut self, class: impl Into<String>) -> Self {
        self.panel_classes.push(class.into());
        self
    }

    /// The effective displacement for this candidate: its own offsets where
    /// set, else the supplied defaults.
    pub fn offset(&self, defaults: Vec2) -> Vec2 {
        Vec2::new(
            self.offset_x.unwrap_or(defaults.x),
            self.offset_y.unwrap_or(defaults.y),
        )
    }
}

/// How well one candidate's panel box fits the viewport.
///
/// Produced per candidate by [`fit::evaluate`](crate::fit::evaluate) and
/// consumed by the [selector](crate::select::select); transient.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PanelFit {
    /// Visible width × visible height within the viewport.
    pub visible_area: f64,
    /// True when the whole panel lies inside the viewport. Compared on the
    /// pixel grid so sub-pixel layout noise does not flip it.
    pub is_complete: bool,
    /// True when the full panel height is visible.
    pub fits_vertically: bool,
    /// True when the full panel width is visible.
    pub fits_horizontally: bool,
}

/// A CSS-style length: a pixel value, or a raw string to interpret.
///
/// Only pixel values constrain placement. A string in any other unit is
/// treated as unconstrained rather than an error, since the engine cannot
/// resolve relative units without a layout pass.
#[derive(Clone, Debug, PartialEq)]
pub enum Length {
    /// A resolved pixel value.
    Px(f64),
    /// An unresolved CSS length, e.g. `"24px"` or `"50%"`.
    Css(String),
}

impl Length {
    /// The pixel value, if this length resolves to one.
    ///
    /// `"24px"` and bare numeric strings resolve; `"50%"` and friends do
    /// not.
    pub fn pixels(&self) -> Option<f64> {
        match self {
            Self::Px(v) => Some(*v),
            Self::Css(s) => {
                let s = s.trim();
                let s = s.strip_suffix("px").unwrap_or(s);
                s.trim().parse().ok()
            }
        }
    }
}

/// Optional min/max size constraints read from the panel's own
/// configuration.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SizeLimits {
    /// Minimum width the panel may shrink to.
    pub min_width: Option<Length>,
    /// Minimum height the panel may shrink to.
    pub min_height: Option<Length>,
    /// Maximum width the panel may grow to.
    pub max_width: Option<Length>,
    /// Maximum height the panel may grow to.
    pub max_height: Option<Length>,
}
