// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Push resolution: translate an off-screen panel back into view.
//!
//! ## Overview
//!
//! Pushing moves the panel without resizing it. Per axis:
//!
//! - If the panel's extent fits within the viewport's extent, the overflow
//!   on whichever edge is overflowing is corrected; leading-edge overflow
//!   wins when both compete. The opposite edge's slack is left untouched —
//!   the panel moves the minimal distance, it is not centered.
//! - If the panel is larger than the viewport, only its leading edge is
//!   pulled back to the viewport edge (when it starts before it); the
//!   trailing edge is allowed to overflow.
//!
//! ## Stability under locking
//!
//! The resulting delta is returned so a position-locked caller can record
//! it and hand it back on the next call; a supplied previous delta is
//! reapplied exactly, with no recomputation, to guarantee the panel does
//! not creep as the surrounding geometry drifts.

use canopy_geom::round_down;
use kurbo::{Point, Rect, Vec2};

/// A pushed point and the delta that produced it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PushResult {
    /// The panel's top-left corner after the push.
    pub point: Point,
    /// The translation applied; record it for reuse under position locking.
    pub delta: Vec2,
}

/// Push a panel starting at `start` back inside `viewport`.
///
/// `previous` is the delta recorded by an earlier push under position
/// locking; when present it is reapplied verbatim.
pub fn push_on_screen(
    start: Point,
    panel: Rect,
    viewport: Rect,
    previous: Option<Vec2>,
) -> PushResult {
    if let Some(delta) = previous {
        return PushResult {
            point: start + delta,
            delta,
        };
    }

    let snapped = round_down(panel);
    let overflow_left = (viewport.x0 - start.x).max(0.0);
    let overflow_top = (viewport.y0 - start.y).max(0.0);
    let overflow_right = (start.x + snapped.width() - viewport.x1).max(0.0);
    let overflow_bottom = (start.y + snapped.height() - viewport.y1).max(0.0);

    let push_x = if snapped.width() <= viewport.width() {
        if overflow_left > 0.0 {
            overflow_left
        } else {
            -overflow_right
        }
    } else if start.x < viewport.x0 {
        viewport.x0 - start.x
    } else {
        0.0
    };

    let push_y = if snapped.height() <= viewport.height() {
        if overflow_top > 0.0 {
            overflow_top
        } else {
            -overflow_bottom
        }
    } else if start.y < viewport.y0 {
        viewport.y0 - start.y
    } else {
        0.0
    };

    let delta = Vec2::new(push_x, push_y);
    PushResult {
        point: start + delta,
        delta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 100.0, 100.0);

    fn panel(w: f64, h: f64) -> Rect {
        Rect::new(0.0, 0.0, w, h)
    }

    #[test]
    fn already_on_screen_is_untouched() {
        let r = push_on_screen(Point::new(30.0, 30.0), panel(30.0, 30.0), VIEWPORT, None);
        assert_eq!(r.point, Point::new(30.0, 30.0));
        assert_eq!(r.delta, Vec2::ZERO);
    }

    #[test]
    fn trailing_overflow_pushes_back() {
        // 90×90 at (30, 30): 20px past the right and bottom edges.
        let r = push_on_screen(Point::new(30.0, 30.0), panel(90.0, 90.0), VIEWPORT, None);
        assert_eq!(r.delta, Vec2::new(-20.0, -20.0));
        assert_eq!(r.point, Point::new(10.0, 10.0));
    }

    #[test]
    fn leading_overflow_pushes_forward() {
        let r = push_on_screen(Point::new(-15.0, -5.0), panel(30.0, 30.0), VIEWPORT, None);
        assert_eq!(r.delta, Vec2::new(15.0, 5.0));
        assert_eq!(r.point, Point::new(0.0, 0.0));
    }

    #[test]
    fn axes_are_corrected_independently() {
        // x hangs past the left edge, y past the bottom edge.
        let r = push_on_screen(Point::new(-10.0, 90.0), panel(30.0, 30.0), VIEWPORT, None);
        assert_eq!(r.delta, Vec2::new(10.0, -20.0));
        assert_eq!(r.point, Point::new(0.0, 70.0));
    }

    #[test]
    fn oversize_panel_only_corrects_leading_edge() {
        // 140px wide in a 100px viewport. Starting before the left edge it
        // is pulled to it; the right edge keeps overflowing.
        let r = push_on_screen(Point::new(-30.0, 10.0), panel(140.0, 30.0), VIEWPORT, None);
        assert_eq!(r.delta.x, 30.0);
        assert_eq!(r.point.x, 0.0);

        // Starting inside, an oversize panel is left alone.
        let r = push_on_screen(Point::new(10.0, 10.0), panel(140.0, 30.0), VIEWPORT, None);
        assert_eq!(r.delta.x, 0.0);
    }

    #[test]
    fn margins_in_viewport_edges_are_respected() {
        // A narrowed viewport encodes its margin in the rect edges.
        let narrowed = Rect::new(10.0, 10.0, 90.0, 90.0);
        let r = push_on_screen(Point::new(0.0, 0.0), panel(30.0, 30.0), narrowed, None);
        assert_eq!(r.point, Point::new(10.0, 10.0));
    }

    #[test]
    fn previous_delta_is_reapplied_verbatim() {
        let recorded = Vec2::new(-7.0, 3.0);
        // Geometry that would compute a different push entirely.
        let r = push_on_screen(
            Point::new(95.0, -20.0),
            panel(30.0, 30.0),
            VIEWPORT,
            Some(recorded),
        );
        assert_eq!(r.delta, recorded);
        assert_eq!(r.point, Point::new(88.0, -17.0));
    }

    #[test]
    fn zero_delta_previous_still_short_circuits() {
        // A recorded no-op push is still a recorded push.
        let r = push_on_screen(
            Point::new(150.0, 150.0),
            panel(30.0, 30.0),
            VIEWPORT,
            Some(Vec2::ZERO),
        );
        assert_eq!(r.point, Point::new(150.0, 150.0));
    }
}
