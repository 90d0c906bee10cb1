// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless adapters: in-memory ports for tests, demos, and environments
//! without a render target.
//!
//! [`StaticRuler`] and [`StaticAnchor`] report fixed geometry;
//! [`HeadlessPanel`] is a panel stand-in that records everything the
//! strategy emits, so a whole positioning pass can be asserted on as plain
//! values.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Rect, Size, Vec2};

use canopy_placement::types::SizeLimits;

use crate::style::PlacementStyles;
use crate::types::{AnchorRect, OverlayRef, PositionChange, RenderSink, ViewportRuler};

/// A viewport ruler with fixed size and scroll offset.
#[derive(Copy, Clone, Debug)]
pub struct StaticRuler {
    /// Reported viewport size.
    pub size: Size,
    /// Reported scroll offset.
    pub scroll: Vec2,
    /// Reported availability; set false to model a pre-render context.
    pub available: bool,
}

impl StaticRuler {
    /// A ruler for a viewport of the given size, unscrolled and available.
    pub const fn new(size: Size) -> Self {
        Self {
            size,
            scroll: Vec2::ZERO,
            available: true,
        }
    }
}

impl ViewportRuler for StaticRuler {
    fn viewport_size(&self) -> Size {
        self.size
    }

    fn scroll_offset(&self) -> Vec2 {
        self.scroll
    }

    fn is_available(&self) -> bool {
        self.available
    }
}

/// An anchor with a fixed rect.
#[derive(Copy, Clone, Debug)]
pub struct StaticAnchor(pub Rect);

impl AnchorRect for StaticAnchor {
    fn bounding_rect(&self) -> Rect {
        self.0
    }
}

/// A recording panel: fixed measured extent and limits, plus a log of
/// every style set, class change, and position change the strategy emits.
#[derive(Clone, Debug, Default)]
pub struct HeadlessPanel {
    /// The panel's measured rect; only its extent matters to placement.
    pub rect: Rect,
    /// Declared size constraints.
    pub limits: SizeLimits,
    /// Every style set applied, oldest first.
    pub styles: Vec<PlacementStyles>,
    /// Currently applied classes.
    pub classes: Vec<String>,
    /// Every position change notified, oldest first.
    pub changes: Vec<PositionChange>,
}

impl HeadlessPanel {
    /// A panel measuring `size`, with no limits and an empty log.
    pub fn new(size: Size) -> Self {
        Self {
            rect: Rect::from_origin_size((0.0, 0.0), size),
            ..Default::default()
        }
    }

    /// The most recently applied style set, if any.
    pub fn last_styles(&self) -> Option<&PlacementStyles> {
        self.styles.last()
    }
}

impl OverlayRef for HeadlessPanel {
    fn panel_rect(&self) -> Rect {
        self.rect
    }

    fn size_limits(&self) -> SizeLimits {
        self.limits.clone()
    }
}

impl RenderSink for HeadlessPanel {
    fn apply_styles(&mut self, styles: &PlacementStyles) {
        self.styles.push(styles.clone());
    }

    fn add_panel_classes(&mut self, classes: &[String]) {
        for class in classes {
            if !self.classes.contains(class) {
                self.classes.push(class.clone());
            }
        }
    }

    fn remove_panel_classes(&mut self, classes: &[String]) {
        self.classes.retain(|c| !classes.contains(c));
    }

    fn position_changed(&mut self, change: &PositionChange) {
        self.changes.push(change.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headless_panel_records_classes() {
        let mut panel = HeadlessPanel::new(Size::new(10.0, 10.0));
        panel.add_panel_classes(&["a".into(), "b".into()]);
        panel.add_panel_classes(&["a".into()]);
        assert_eq!(panel.classes, ["a", "b"]);
        panel.remove_panel_classes(&["a".into()]);
        assert_eq!(panel.classes, ["b"]);
    }

    #[test]
    fn unavailable_ruler_reports_it() {
        let mut ruler = StaticRuler::new(Size::new(100.0, 100.0));
        assert!(ruler.is_available());
        ruler.available = false;
        assert!(!ruler.is_available());
    }
}
