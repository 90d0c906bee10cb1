// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sizing boxes for flexible placements.
//!
//! ## Overview
//!
//! A flexible placement does not pin the panel to a fixed rect; it gives the
//! panel a sizing box to grow and shrink within. On each axis the box runs
//! from the anchored edge to the opposite edge of the (margin-narrowed)
//! viewport; a centered axis gets a box symmetric around the anchor, sized
//! to twice the smaller distance to the viewport edges.
//!
//! ## Growth stability
//!
//! Reflowing an open panel larger on scroll reads as a visible jump, so
//! once a panel has rendered, its sizing box never exceeds the last applied
//! size on either axis unless growing after open was requested. Shrinking
//! is always allowed. The anchored edge stays pinned when the clamp
//! shortens a box; a centered box re-centers around its anchor.

use kurbo::{Point, Rect, Size};

use crate::types::{ConnectedPosition, Direction, HorizontalAnchor, VerticalAnchor};

/// Growth-limiting state carried across repositioning calls.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GrowthPolicy {
    /// Whether the box may exceed the last applied size.
    pub grow_after_open: bool,
    /// True on the first render after attach or a viewport change; the
    /// clamp never applies to an initial render.
    pub initial_render: bool,
    /// The box size applied on the previous render.
    pub last_size: Size,
}

impl GrowthPolicy {
    /// Policy for an initial render: nothing to clamp against.
    pub const fn initial() -> Self {
        Self {
            grow_after_open: false,
            initial_render: true,
            last_size: Size::ZERO,
        }
    }

    const fn clamps(&self) -> bool {
        !self.grow_after_open && !self.initial_render
    }
}

/// True when the panel's anchored horizontal corner is the trailing one
/// (its right under LTR, its left under RTL), so boxes extend toward the
/// leading viewport edge and exact placements pin to the trailing offset.
pub fn anchored_at_trailing_x(position: &ConnectedPosition, direction: Direction) -> bool {
    match position.panel_x {
        HorizontalAnchor::End => !direction.is_rtl(),
        HorizontalAnchor::Start => direction.is_rtl(),
        HorizontalAnchor::Center => false,
    }
}

/// The box a flexible placement may occupy, in the same space as `viewport`.
///
/// `origin` is the candidate's anchor point on the origin rect (offsets do
/// not move the sizing box). Extents are floored at zero so an anchor
/// outside the viewport yields a degenerate box rather than an inverted
/// one.
pub fn sizing_box(
    origin: Point,
    position: &ConnectedPosition,
    viewport: Rect,
    direction: Direction,
    growth: GrowthPolicy,
) -> Rect {
    let (top, height) = match position.panel_y {
        // Anchored at its top edge: the box grows downward from the anchor.
        VerticalAnchor::Top => {
            let mut height = (viewport.y1 - origin.y).max(0.0);
            if growth.clamps() {
                height = height.min(growth.last_size.height);
            }
            (origin.y, height)
        }
        // Anchored at its bottom edge: the box grows upward, bottom pinned.
        VerticalAnchor::Bottom => {
            let mut height = (origin.y - viewport.y0).max(0.0);
            if growth.clamps() {
                height = height.min(growth.last_size.height);
            }
            (origin.y - height, height)
        }
        VerticalAnchor::Center => {
            let reach = (viewport.y1 - origin.y).min(origin.y - viewport.y0).max(0.0);
            let mut height = reach * 2.0;
            if growth.clamps() {
                height = height.min(growth.last_size.height);
            }
            (origin.y - height / 2.0, height)
        }
    };

    let trailing = anchored_at_trailing_x(position, direction);
    let (left, width) = if trailing {
        // Trailing corner pinned: the box grows toward the leading edge.
        let mut width = (origin.x - viewport.x0).max(0.0);
        if growth.clamps() {
            width = width.min(growth.last_size.width);
        }
        (origin.x - width, width)
    } else {
        match position.panel_x {
            HorizontalAnchor::Center => {
                let reach = (viewport.x1 - origin.x).min(origin.x - viewport.x0).max(0.0);
                let mut width = reach * 2.0;
                if growth.clamps() {
                    width = width.min(growth.last_size.width);
                }
                (origin.x - width / 2.0, width)
            }
            // Leading corner pinned: the box grows toward the trailing edge.
            _ => {
                let mut width = (viewport.x1 - origin.x).max(0.0);
                if growth.clamps() {
                    width = width.min(growth.last_size.width);
                }
                (origin.x, width)
            }
        }
    };

    Rect::new(left, top, left + width, top + height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{HorizontalAnchor, HorizontalAnchor::*, VerticalAnchor, VerticalAnchor::*};

    const VIEWPORT: Rect = Rect::new(10.0, 10.0, 110.0, 110.0);

    fn pos(px: HorizontalAnchor, py: VerticalAnchor) -> ConnectedPosition {
        ConnectedPosition::new(Start, Top, px, py)
    }

    #[test]
    fn top_anchored_box_extends_to_bottom_edge() {
        let b = sizing_box(
            Point::new(40.0, 30.0),
            &pos(Start, Top),
            VIEWPORT,
            Direction::Ltr,
            GrowthPolicy::initial(),
        );
        assert_eq!(b, Rect::new(40.0, 30.0, 110.0, 110.0));
    }

    #[test]
    fn bottom_anchored_box_extends_to_top_edge() {
        let b = sizing_box(
            Point::new(40.0, 90.0),
            &pos(Start, Bottom),
            VIEWPORT,
            Direction::Ltr,
            GrowthPolicy::initial(),
        );
        // Bottom edge pinned at the anchor, top at the viewport margin.
        assert_eq!(b, Rect::new(40.0, 10.0, 110.0, 90.0));
    }

    #[test]
    fn centered_box_doubles_smaller_reach() {
        let b = sizing_box(
            Point::new(40.0, 40.0),
            &pos(HorizontalAnchor::Center, VerticalAnchor::Center),
            VIEWPORT,
            Direction::Ltr,
            GrowthPolicy::initial(),
        );
        // 30 to the top/left edges vs 70 to the bottom/right: 60 on each
        // axis, symmetric around the anchor.
        assert_eq!(b, Rect::new(10.0, 10.0, 70.0, 70.0));
    }

    #[test]
    fn trailing_anchor_grows_toward_leading_edge() {
        let b = sizing_box(
            Point::new(80.0, 30.0),
            &pos(End, Top),
            VIEWPORT,
            Direction::Ltr,
            GrowthPolicy::initial(),
        );
        assert_eq!(b, Rect::new(10.0, 30.0, 80.0, 110.0));

        // Under RTL a Start panel anchor is the trailing corner.
        let b = sizing_box(
            Point::new(80.0, 30.0),
            &pos(Start, Top),
            VIEWPORT,
            Direction::Rtl,
            GrowthPolicy::initial(),
        );
        assert_eq!(b, Rect::new(10.0, 30.0, 80.0, 110.0));
    }

    #[test]
    fn growth_clamp_keeps_anchored_edge_pinned() {
        let grown = GrowthPolicy {
            grow_after_open: false,
            initial_render: false,
            last_size: Size::new(50.0, 40.0),
        };

        // Top anchored: top pinned, height capped.
        let b = sizing_box(
            Point::new(40.0, 30.0),
            &pos(Start, Top),
            VIEWPORT,
            Direction::Ltr,
            grown,
        );
        assert_eq!(b, Rect::new(40.0, 30.0, 90.0, 70.0));

        // Bottom anchored: bottom pinned, box shortens from the top.
        let b = sizing_box(
            Point::new(40.0, 90.0),
            &pos(Start, Bottom),
            VIEWPORT,
            Direction::Ltr,
            grown,
        );
        assert_eq!(b, Rect::new(40.0, 50.0, 90.0, 90.0));
    }

    #[test]
    fn growth_clamp_recenters_centered_box() {
        let grown = GrowthPolicy {
            grow_after_open: false,
            initial_render: false,
            last_size: Size::new(20.0, 20.0),
        };
        let b = sizing_box(
            Point::new(60.0, 60.0),
            &pos(HorizontalAnchor::Center, VerticalAnchor::Center),
            VIEWPORT,
            Direction::Ltr,
            grown,
        );
        assert_eq!(b, Rect::new(50.0, 50.0, 70.0, 70.0));
    }

    #[test]
    fn shrinking_below_last_size_is_allowed() {
        // Anchor near the bottom: only 20px available, less than the last
        // applied 60px. The box shrinks.
        let grown = GrowthPolicy {
            grow_after_open: false,
            initial_render: false,
            last_size: Size::new(60.0, 60.0),
        };
        let b = sizing_box(
            Point::new(40.0, 90.0),
            &pos(Start, Top),
            VIEWPORT,
            Direction::Ltr,
            grown,
        );
        assert_eq!(b.height(), 20.0);
    }

    #[test]
    fn grow_after_open_disables_clamp() {
        let policy = GrowthPolicy {
            grow_after_open: true,
            initial_render: false,
            last_size: Size::new(10.0, 10.0),
        };
        let b = sizing_box(
            Point::new(40.0, 30.0),
            &pos(Start, Top),
            VIEWPORT,
            Direction::Ltr,
            policy,
        );
        assert_eq!(b.height(), 80.0);
    }

    #[test]
    fn anchor_outside_viewport_yields_degenerate_box() {
        let b = sizing_box(
            Point::new(40.0, 150.0),
            &pos(Start, Top),
            VIEWPORT,
            Direction::Ltr,
            GrowthPolicy::initial(),
        );
        assert_eq!(b.height(), 0.0);
        assert!(b.area() == 0.0);
    }
}
