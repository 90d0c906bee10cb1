// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style synthesis: turn a selected placement into a pure style value.
//!
//! ## Overview
//!
//! A placement renders through two boxes:
//!
//! - the **container** box the panel sits in. For flexible placements this
//!   is the sizing box the panel may grow and shrink within, with flex
//!   alignment hints pushing the content toward the anchored corner. For
//!   exact placements it simply fills its positioning context.
//! - the **panel** box, present only for exact placements: concrete offsets
//!   and the panel's natural size. The offsets anchor to the trailing edge
//!   (`bottom`/`right`) when the panel's anchored corner is the trailing
//!   one, so a panel that later resizes stays pinned to its connection
//!   point instead of sliding.
//!
//! The output is a plain value; a sink applies it however its environment
//! requires. Sinks that position within a document-spanning container add
//! the carried scroll offset to the box offsets.

use alloc::format;
use alloc::string::String;

use kurbo::{Point, Rect, Size, Vec2};

use canopy_placement::bbox::anchored_at_trailing_x;
use canopy_placement::types::{
    ConnectedPosition, Direction, HorizontalAnchor, SizeLimits, VerticalAnchor,
};

/// Flex alignment hint for one axis of the container box.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum FlexAlign {
    /// Pack content toward the start of the axis.
    #[default]
    Start,
    /// Center content on the axis.
    Center,
    /// Pack content toward the end of the axis.
    End,
}

/// Concrete offsets and extents for one box. Unset fields are left to the
/// environment.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SizedBox {
    /// Offset from the viewport top.
    pub top: Option<f64>,
    /// Offset from the viewport left.
    pub left: Option<f64>,
    /// Offset from the viewport bottom.
    pub bottom: Option<f64>,
    /// Offset from the viewport right.
    pub right: Option<f64>,
    /// Explicit width.
    pub width: Option<f64>,
    /// Explicit height.
    pub height: Option<f64>,
}

impl SizedBox {
    /// Render as a CSS declaration list, e.g.
    /// `"top: 30px; left: 30px; width: 30px; height: 30px;"`.
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        let mut push = |name: &str, value: Option<f64>| {
            if let Some(v) = value {
                out.push_str(&format!("{name}: {v}px; "));
            }
        };
        push("top", self.top);
        push("left", self.left);
        push("bottom", self.bottom);
        push("right", self.right);
        push("width", self.width);
        push("height", self.height);
        out.trim_end().into()
    }
}

/// The container box: a concrete sizing box, or a full fill of the
/// positioning context.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum BoxStyle {
    /// Fill the positioning context entirely (exact placements).
    Fill,
    /// A concrete box (flexible placements).
    Sized(SizedBox),
}

/// Everything a sink needs to render one placement.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacementStyles {
    /// Styles for the container the panel sits in.
    pub container: BoxStyle,
    /// Exact offsets for the panel itself; `None` for flexible placements,
    /// where the container drives the geometry.
    pub panel: Option<SizedBox>,
    /// Horizontal packing of the panel within the container.
    pub align_items: FlexAlign,
    /// Vertical packing of the panel within the container.
    pub justify_content: FlexAlign,
    /// Maximum width carried down from the panel's declared limits.
    pub max_width: Option<f64>,
    /// Maximum height carried down from the panel's declared limits.
    pub max_height: Option<f64>,
    /// Viewport scroll offset at synthesis time, for sinks that position
    /// within a document-spanning container.
    pub scroll_offset: Vec2,
}

/// Synthesize the style set for a selected placement.
///
/// `final_point` is the panel's top-left corner with offsets and any push
/// applied. `exact` selects the exact-placement form (used when flexible
/// dimensions are off, or the panel was pushed — a pushed panel must not
/// also reflow).
pub fn synthesize(
    position: &ConnectedPosition,
    final_point: Point,
    panel: Rect,
    bounding_box: Rect,
    viewport: Size,
    scroll_offset: Vec2,
    limits: &SizeLimits,
    direction: Direction,
    exact: bool,
) -> PlacementStyles {
    let align_items = match position.panel_x {
        HorizontalAnchor::Center => FlexAlign::Center,
        HorizontalAnchor::End => FlexAlign::End,
        HorizontalAnchor::Start => FlexAlign::Start,
    };
    let justify_content = match position.panel_y {
        VerticalAnchor::Center => FlexAlign::Center,
        VerticalAnchor::Bottom => FlexAlign::End,
        VerticalAnchor::Top => FlexAlign::Start,
    };

    if exact {
        let mut panel_box = SizedBox {
            width: Some(panel.width()),
            height: Some(panel.height()),
            ..Default::default()
        };
        if matches!(position.panel_y, VerticalAnchor::Bottom) {
            panel_box.bottom = Some(viewport.height - (final_point.y + panel.height()));
        } else {
            panel_box.top = Some(final_point.y);
        }
        if anchored_at_trailing_x(position, direction) {
            panel_box.right = Some(viewport.width - (final_point.x + panel.width()));
        } else {
            panel_box.left = Some(final_point.x);
        }
        return PlacementStyles {
            container: BoxStyle::Fill,
            panel: Some(panel_box),
            align_items,
            justify_content,
            max_width: None,
            max_height: None,
            scroll_offset,
        };
    }

    let container = SizedBox {
        top: Some(bounding_box.y0),
        left: Some(bounding_box.x0),
        bottom: Some(viewport.height - bounding_box.y1),
        right: Some(viewport.width - bounding_box.x1),
        width: Some(bounding_box.width()),
        height: Some(bounding_box.height()),
    };
    PlacementStyles {
        container: BoxStyle::Sized(container),
        panel: None,
        align_items,
        justify_content,
        max_width: limits.max_width.as_ref().and_then(|l| l.pixels()),
        max_height: limits.max_height.as_ref().and_then(|l| l.pixels()),
        scroll_offset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canopy_placement::types::{HorizontalAnchor::*, Length, VerticalAnchor::*};

    const VIEWPORT: Size = Size::new(100.0, 100.0);

    fn pos(px: HorizontalAnchor, py: VerticalAnchor) -> ConnectedPosition {
        ConnectedPosition::new(Start, Top, px, py)
    }

    #[test]
    fn exact_box_anchors_top_left_for_leading_corners() {
        let styles = synthesize(
            &pos(Start, Top),
            Point::new(30.0, 30.0),
            Rect::new(0.0, 0.0, 30.0, 30.0),
            Rect::ZERO,
            VIEWPORT,
            Vec2::ZERO,
            &SizeLimits::default(),
            Direction::Ltr,
            true,
        );
        assert_eq!(styles.container, BoxStyle::Fill);
        let b = styles.panel.unwrap();
        assert_eq!(b.top, Some(30.0));
        assert_eq!(b.left, Some(30.0));
        assert_eq!(b.bottom, None);
        assert_eq!(b.right, None);
        assert_eq!(b.width, Some(30.0));
        assert_eq!(b.height, Some(30.0));
    }

    #[test]
    fn exact_box_anchors_bottom_right_for_trailing_corners() {
        // Panel 30×20 at (40, 50): its bottom-right corner sits at (70, 70),
        // i.e. 30px off each far edge.
        let styles = synthesize(
            &pos(End, Bottom),
            Point::new(40.0, 50.0),
            Rect::new(0.0, 0.0, 30.0, 20.0),
            Rect::ZERO,
            VIEWPORT,
            Vec2::ZERO,
            &SizeLimits::default(),
            Direction::Ltr,
            true,
        );
        let b = styles.panel.unwrap();
        assert_eq!(b.bottom, Some(30.0));
        assert_eq!(b.right, Some(30.0));
        assert_eq!(b.top, None);
        assert_eq!(b.left, None);
    }

    #[test]
    fn rtl_swaps_the_trailing_horizontal_edge() {
        // Under RTL a Start panel anchor is the trailing corner.
        let styles = synthesize(
            &pos(Start, Top),
            Point::new(40.0, 50.0),
            Rect::new(0.0, 0.0, 30.0, 20.0),
            Rect::ZERO,
            VIEWPORT,
            Vec2::ZERO,
            &SizeLimits::default(),
            Direction::Rtl,
            true,
        );
        let b = styles.panel.unwrap();
        assert_eq!(b.right, Some(30.0));
        assert_eq!(b.left, None);
    }

    #[test]
    fn flexible_box_carries_container_and_hints() {
        let limits = SizeLimits {
            max_width: Some(Length::Px(240.0)),
            max_height: Some(Length::Css("50%".into())),
            ..Default::default()
        };
        let styles = synthesize(
            &pos(Center, Bottom),
            Point::new(0.0, 0.0),
            Rect::new(0.0, 0.0, 30.0, 20.0),
            Rect::new(10.0, 20.0, 90.0, 80.0),
            VIEWPORT,
            Vec2::new(0.0, 120.0),
            &limits,
            Direction::Ltr,
            false,
        );
        assert!(styles.panel.is_none());
        let BoxStyle::Sized(c) = styles.container else {
            panic!("expected a sized container");
        };
        assert_eq!(c.top, Some(20.0));
        assert_eq!(c.left, Some(10.0));
        assert_eq!(c.bottom, Some(20.0));
        assert_eq!(c.right, Some(10.0));
        assert_eq!(c.width, Some(80.0));
        assert_eq!(c.height, Some(60.0));

        assert_eq!(styles.align_items, FlexAlign::Center);
        assert_eq!(styles.justify_content, FlexAlign::End);
        assert_eq!(styles.max_width, Some(240.0));
        // Non-pixel limits do not constrain.
        assert_eq!(styles.max_height, None);
        assert_eq!(styles.scroll_offset, Vec2::new(0.0, 120.0));
    }

    #[test]
    fn css_rendering_lists_set_fields_in_order() {
        let b = SizedBox {
            top: Some(30.0),
            left: Some(30.0),
            width: Some(30.0),
            height: Some(30.0),
            ..Default::default()
        };
        assert_eq!(b.to_css(), "top: 30px; left: 30px; width: 30px; height: 30px;");
        assert_eq!(SizedBox::default().to_css(), "");
    }
}
