// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fit evaluation: anchor points and per-candidate viewport fit.
//!
//! ## Overview
//!
//! For one candidate, this module computes where the panel's top-left corner
//! lands and how much of the panel stays inside the viewport there. The
//! panel rect is snapped to the pixel grid before comparison so a measured
//! 30.4×30.2 panel against a pixel-aligned viewport still reports a
//! complete fit.

use canopy_geom::{round_down, visible_size};
use kurbo::{Point, Rect, Vec2};

use crate::types::{ConnectedPosition, Direction, HorizontalAnchor, PanelFit, VerticalAnchor};

/// The point on the origin rect that the candidate anchors to.
///
/// `Start`/`End` resolve against `direction`; `Center` is the midpoint.
pub fn origin_anchor(origin: Rect, position: &ConnectedPosition, direction: Direction) -> Point {
    let x = match position.origin_x {
        HorizontalAnchor::Center => origin.x0 + origin.width() / 2.0,
        HorizontalAnchor::Start => {
            if direction.is_rtl() {
                origin.x1
            } else {
                origin.x0
            }
        }
        HorizontalAnchor::End => {
            if direction.is_rtl() {
                origin.x0
            } else {
                origin.x1
            }
        }
    };
    let y = match position.origin_y {
        VerticalAnchor::Top => origin.y0,
        VerticalAnchor::Center => origin.y0 + origin.height() / 2.0,
        VerticalAnchor::Bottom => origin.y1,
    };
    Point::new(x, y)
}

/// The panel's top-left corner such that its anchored corner lands on
/// `origin_point`.
///
/// A `Center` anchor subtracts half the panel extent; `Start`/`End` resolve
/// against `direction`. Offsets are not applied here — the caller adds them
/// so they can participate in fit evaluation and in the final placement
/// alike.
pub fn panel_anchor(
    origin_point: Point,
    panel: Rect,
    position: &ConnectedPosition,
    direction: Direction,
) -> Point {
    let dx = match position.panel_x {
        HorizontalAnchor::Center => -panel.width() / 2.0,
        HorizontalAnchor::Start => {
            if direction.is_rtl() {
                -panel.width()
            } else {
                0.0
            }
        }
        HorizontalAnchor::End => {
            if direction.is_rtl() {
                0.0
            } else {
                -panel.width()
            }
        }
    };
    let dy = match position.panel_y {
        VerticalAnchor::Top => 0.0,
        VerticalAnchor::Center => -panel.height() / 2.0,
        VerticalAnchor::Bottom => -panel.height(),
    };
    Point::new(origin_point.x + dx, origin_point.y + dy)
}

/// How well the panel fits the viewport with its top-left corner at
/// `point + offset`.
///
/// The comparison runs on the pixel-snapped panel extent, so `is_complete`
/// is exact: it holds iff no edge overflows at all.
pub fn evaluate(point: Point, panel: Rect, viewport: Rect, offset: Vec2) -> PanelFit {
    let snapped = round_down(panel);
    let placed = Rect::from_origin_size(point + offset, snapped.size());
    let visible = visible_size(placed, viewport);
    let visible_area = visible.area();
    PanelFit {
        visible_area,
        is_complete: visible_area == snapped.area(),
        fits_vertically: visible.height == snapped.height(),
        fits_horizontally: visible.width == snapped.width(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{HorizontalAnchor, HorizontalAnchor::*, VerticalAnchor, VerticalAnchor::*};

    const ORIGIN: Rect = Rect::new(10.0, 10.0, 30.0, 30.0);
    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 100.0, 100.0);

    fn pos(
        ox: HorizontalAnchor,
        oy: VerticalAnchor,
        px: HorizontalAnchor,
        py: VerticalAnchor,
    ) -> ConnectedPosition {
        ConnectedPosition::new(ox, oy, px, py)
    }

    #[test]
    fn origin_anchor_corners_ltr() {
        assert_eq!(
            origin_anchor(ORIGIN, &pos(Start, Top, Start, Top), Direction::Ltr),
            Point::new(10.0, 10.0)
        );
        assert_eq!(
            origin_anchor(ORIGIN, &pos(End, Bottom, Start, Top), Direction::Ltr),
            Point::new(30.0, 30.0)
        );
        assert_eq!(
            origin_anchor(
                ORIGIN,
                &pos(
                    HorizontalAnchor::Center,
                    VerticalAnchor::Center,
                    Start,
                    Top
                ),
                Direction::Ltr
            ),
            Point::new(20.0, 20.0)
        );
    }

    #[test]
    fn origin_anchor_flips_under_rtl() {
        // Start means the right edge under RTL; the vertical axis is
        // unaffected.
        assert_eq!(
            origin_anchor(ORIGIN, &pos(Start, Top, Start, Top), Direction::Rtl),
            Point::new(30.0, 10.0)
        );
        assert_eq!(
            origin_anchor(ORIGIN, &pos(End, Bottom, Start, Top), Direction::Rtl),
            Point::new(10.0, 30.0)
        );
    }

    #[test]
    fn panel_anchor_lands_chosen_corner_on_origin_point() {
        let panel = Rect::new(0.0, 0.0, 40.0, 20.0);
        let at = Point::new(50.0, 50.0);

        // Panel start/top corner on the point: no displacement.
        assert_eq!(
            panel_anchor(at, panel, &pos(Start, Top, Start, Top), Direction::Ltr),
            at
        );
        // Panel end/bottom corner on the point: displaced by the full extent.
        assert_eq!(
            panel_anchor(at, panel, &pos(Start, Top, End, Bottom), Direction::Ltr),
            Point::new(10.0, 30.0)
        );
        // Centered: displaced by half.
        assert_eq!(
            panel_anchor(
                at,
                panel,
                &pos(
                    Start,
                    Top,
                    HorizontalAnchor::Center,
                    VerticalAnchor::Center
                ),
                Direction::Ltr
            ),
            Point::new(30.0, 40.0)
        );
    }

    #[test]
    fn panel_anchor_flips_under_rtl() {
        let panel = Rect::new(0.0, 0.0, 40.0, 20.0);
        let at = Point::new(50.0, 50.0);
        // Under RTL the panel's Start corner is its right edge, so the box
        // extends leftward from the point.
        assert_eq!(
            panel_anchor(at, panel, &pos(Start, Top, Start, Top), Direction::Rtl),
            Point::new(10.0, 50.0)
        );
        assert_eq!(
            panel_anchor(at, panel, &pos(Start, Top, End, Top), Direction::Rtl),
            at
        );
    }

    #[test]
    fn evaluate_complete_fit() {
        let panel = Rect::new(0.0, 0.0, 30.0, 30.0);
        let fit = evaluate(Point::new(30.0, 30.0), panel, VIEWPORT, Vec2::ZERO);
        assert!(fit.is_complete);
        assert!(fit.fits_vertically);
        assert!(fit.fits_horizontally);
        assert_eq!(fit.visible_area, 900.0);
    }

    #[test]
    fn evaluate_partial_fit_reports_axes() {
        let panel = Rect::new(0.0, 0.0, 90.0, 30.0);
        let fit = evaluate(Point::new(30.0, 30.0), panel, VIEWPORT, Vec2::ZERO);
        assert!(!fit.is_complete);
        assert!(!fit.fits_horizontally, "20px hang off the right edge");
        assert!(fit.fits_vertically);
        assert_eq!(fit.visible_area, 70.0 * 30.0);
    }

    #[test]
    fn offsets_participate_in_fit() {
        // The panel fits at its anchor point, but a 20px offset pushes it
        // past the right edge.
        let panel = Rect::new(0.0, 0.0, 30.0, 30.0);
        let snug = evaluate(Point::new(70.0, 30.0), panel, VIEWPORT, Vec2::ZERO);
        assert!(snug.is_complete);
        let shoved = evaluate(Point::new(70.0, 30.0), panel, VIEWPORT, Vec2::new(20.0, 0.0));
        assert!(!shoved.is_complete);
        assert!(!shoved.fits_horizontally);
    }

    #[test]
    fn subpixel_panel_still_fits_completely() {
        // A measured 30.4×30.6 panel flush against the bottom-right margin
        // snaps to 30×30 and fits.
        let panel = Rect::new(0.0, 0.0, 30.4, 30.6);
        let fit = evaluate(Point::new(70.0, 70.0), panel, VIEWPORT, Vec2::ZERO);
        assert!(fit.is_complete);
    }

    #[test]
    fn zero_size_panel_is_degenerate_but_valid() {
        let fit = evaluate(
            Point::new(50.0, 50.0),
            Rect::ZERO,
            VIEWPORT,
            Vec2::ZERO,
        );
        assert!(fit.is_complete);
        assert_eq!(fit.visible_area, 0.0);
    }
}
