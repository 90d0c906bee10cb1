// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ports and protocol types: rulers, anchors, panels, sinks, and the
//! configuration error taxonomy.
//!
//! ## Overview
//!
//! The strategy talks to its environment exclusively through the traits
//! here. Implementations for a real render target live outside this crate;
//! [`adapters::headless`](crate::adapters::headless) provides in-memory
//! ones for tests, demos, and environments without a render target.

use kurbo::{Point, Rect, Size, Vec2};

use canopy_geom::{is_clipped, is_outside};
use canopy_placement::types::{ConnectedPosition, SizeLimits};

/// Source of viewport measurements.
///
/// The change stream of a real environment maps onto
/// [`FlexiblePositionStrategy::viewport_changed`](crate::strategy::FlexiblePositionStrategy::viewport_changed):
/// subscribe outside, and on each resize notify the strategy and call
/// `apply()` again. Coalescing/debouncing is the subscriber's business.
pub trait ViewportRuler {
    /// Current viewport size, excluding scrollbars.
    fn viewport_size(&self) -> Size;

    /// Current scroll offset of the viewport.
    fn scroll_offset(&self) -> Vec2;

    /// False when no viewport exists to measure (e.g. a pre-render
    /// context). [`apply`](crate::strategy::FlexiblePositionStrategy::apply)
    /// is a benign no-op then, not an error.
    fn is_available(&self) -> bool {
        true
    }
}

/// A live rect for an anchor element.
///
/// Implementations must return current geometry on every call; the strategy
/// never caches it, since layout may have changed between calls.
pub trait AnchorRect {
    /// The anchor's current bounding rect.
    fn bounding_rect(&self) -> Rect;
}

/// A no-op anchor used as the default type parameter when the origin is a
/// plain point. Its rect is zero-area at the coordinate origin.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoAnchor;

impl AnchorRect for NoAnchor {
    #[inline]
    fn bounding_rect(&self) -> Rect {
        Rect::ZERO
    }
}

/// What the panel is positioned relative to.
#[derive(Copy, Clone, Debug)]
pub enum Origin<A> {
    /// A live anchor element, measured through [`AnchorRect`] on each pass.
    Anchor(A),
    /// A fixed point with no extent; resolves to a zero-area rect.
    Point(Point),
    /// A fixed point with an explicit size.
    Sized(Point, Size),
}

impl<A: AnchorRect> Origin<A> {
    /// The origin's current rect. Always fresh; a point origin yields a
    /// valid zero-area rect rather than failing.
    pub fn resolve(&self) -> Rect {
        match self {
            Self::Anchor(a) => a.bounding_rect(),
            Self::Point(p) => Rect::from_origin_size(*p, Size::ZERO),
            Self::Sized(p, s) => Rect::from_origin_size(*p, *s),
        }
    }
}

/// The rect placements are evaluated against: the viewport shrunk by
/// `margin` on all four sides, in the same space anchors are measured in.
pub fn narrowed_viewport(size: Size, margin: f64) -> Rect {
    Rect::new(margin, margin, size.width - margin, size.height - margin)
}

/// The attached panel, as the strategy sees it.
pub trait OverlayRef {
    /// The panel's current measured rect. Only its extent matters to
    /// placement; the location is wherever the environment last put it.
    fn panel_rect(&self) -> Rect;

    /// Size constraints declared on the panel. Non-pixel lengths are
    /// carried through but do not constrain placement.
    fn size_limits(&self) -> SizeLimits {
        SizeLimits::default()
    }
}

/// Receiver for synthesized placement output.
///
/// A real implementation writes styles to a render target; the strategy
/// itself never does. All methods other than
/// [`apply_styles`](RenderSink::apply_styles) default to no-ops so minimal
/// sinks stay minimal.
pub trait RenderSink {
    /// Apply a freshly synthesized style set.
    fn apply_styles(&mut self, styles: &crate::style::PlacementStyles);

    /// Add style classes for the newly active candidate.
    fn add_panel_classes(&mut self, _classes: &[alloc::string::String]) {}

    /// Remove style classes belonging to a no-longer-active candidate.
    fn remove_panel_classes(&mut self, _classes: &[alloc::string::String]) {}

    /// A new placement was applied. Not called on a pure locked reapply.
    fn position_changed(&mut self, _change: &PositionChange) {}
}

bitflags::bitflags! {
    /// How the origin and panel relate to the viewport after a placement.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ScrollVisibility: u8 {
        /// The origin extends past at least one viewport edge.
        const ORIGIN_CLIPPED    = 0b0000_0001;
        /// The origin is entirely outside the viewport.
        const ORIGIN_OFFSCREEN  = 0b0000_0010;
        /// The panel extends past at least one viewport edge.
        const PANEL_CLIPPED     = 0b0000_0100;
        /// The panel is entirely outside the viewport.
        const PANEL_OFFSCREEN   = 0b0000_1000;
    }
}

impl ScrollVisibility {
    /// Classify `origin` and `panel` against the full (unnarrowed)
    /// viewport. An off-screen rect is also reported as clipped.
    pub fn compute(origin: Rect, panel: Rect, viewport: Rect) -> Self {
        let mut v = Self::empty();
        if is_clipped(origin, viewport) {
            v |= Self::ORIGIN_CLIPPED;
        }
        if is_outside(origin, viewport) {
            v |= Self::ORIGIN_OFFSCREEN;
        }
        if is_clipped(panel, viewport) {
            v |= Self::PANEL_CLIPPED;
        }
        if is_outside(panel, viewport) {
            v |= Self::PANEL_OFFSCREEN;
        }
        v
    }
}

/// Payload of a [`RenderSink::position_changed`] notification.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionChange {
    /// The candidate that was applied.
    pub position: ConnectedPosition,
    /// Where the origin and panel ended up relative to the viewport.
    pub visibility: ScrollVisibility,
}

/// Configuration mistakes, surfaced synchronously and never deferred.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The candidate list is empty; at least one position is required.
    #[error("at least one connected position must be supplied")]
    EmptyPositions,
    /// The strategy is already attached to a live panel.
    #[error("strategy is already attached to a panel")]
    AlreadyAttached,
    /// The strategy was disposed; disposal is terminal.
    #[error("strategy has been disposed")]
    Disposed,
}
