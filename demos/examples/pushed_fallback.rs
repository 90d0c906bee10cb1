// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Push behavior: a tooltip near the viewport corner that fits nowhere at
//! its natural size gets translated back on screen instead of clipped.
//!
//! Run:
//! - `cargo run -p canopy_demos --example pushed_fallback`

use canopy_overlay::adapters::headless::{HeadlessPanel, StaticAnchor, StaticRuler};
use canopy_overlay::strategy::FlexiblePositionStrategy;
use canopy_overlay::types::{Origin, ScrollVisibility};
use canopy_placement::types::{ConnectedPosition, HorizontalAnchor::*, VerticalAnchor::*};
use kurbo::{Rect, Size};

fn main() {
    let ruler = StaticRuler::new(Size::new(400.0, 300.0));

    // An anchor tucked into the bottom-right corner.
    let anchor = Rect::new(360.0, 260.0, 390.0, 290.0);
    let mut strategy = FlexiblePositionStrategy::new(ruler, Origin::Anchor(StaticAnchor(anchor)));
    strategy
        .with_positions(vec![ConnectedPosition::new(End, Bottom, Start, Top)])
        .unwrap()
        .with_flexible_dimensions(false)
        .with_viewport_margin(8.0);

    strategy
        .attach(HeadlessPanel::new(Size::new(160.0, 60.0)))
        .unwrap();
    strategy.apply();

    assert!(strategy.is_pushed());
    let panel = strategy.overlay().unwrap();
    let rendered = panel.last_styles().unwrap().panel.expect("exact placement");

    // The tooltip would start at (390, 290) and hang far off both edges;
    // the push brings its far corner to the 8px margin line.
    println!("== Pushed placement ==\n  {}", rendered.to_css());
    assert_eq!(rendered.top, Some(300.0 - 8.0 - 60.0));
    assert_eq!(rendered.left, Some(400.0 - 8.0 - 160.0));

    // The notification still reports the panel fully on screen.
    let change = panel.changes.last().unwrap();
    println!("  visibility: {:?}", change.visibility);
    assert!(!change.visibility.contains(ScrollVisibility::PANEL_CLIPPED));
}
