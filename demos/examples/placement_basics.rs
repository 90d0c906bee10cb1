// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic connected positioning: a dropdown below an anchor, falling back
//! above it when the anchor sits near the bottom of the viewport.
//!
//! Run:
//! - `cargo run -p canopy_demos --example placement_basics`

use canopy_overlay::adapters::headless::{HeadlessPanel, StaticAnchor, StaticRuler};
use canopy_overlay::strategy::FlexiblePositionStrategy;
use canopy_overlay::types::Origin;
use canopy_placement::types::{ConnectedPosition, HorizontalAnchor::*, VerticalAnchor::*};
use kurbo::{Rect, Size};

fn main() {
    let ruler = StaticRuler::new(Size::new(800.0, 600.0));

    // A trigger button somewhere in the page, and the menu's preferences:
    // below it, else above it.
    let button = Rect::new(120.0, 520.0, 280.0, 552.0);
    let mut strategy = FlexiblePositionStrategy::new(ruler, Origin::Anchor(StaticAnchor(button)));
    strategy
        .with_positions(vec![
            ConnectedPosition::new(Start, Bottom, Start, Top).with_panel_class("below"),
            ConnectedPosition::new(Start, Top, Start, Bottom).with_panel_class("above"),
        ])
        .unwrap()
        .with_flexible_dimensions(false);

    strategy
        .attach(HeadlessPanel::new(Size::new(200.0, 150.0)))
        .unwrap();
    strategy.apply();

    let panel = strategy.overlay().unwrap();
    let styles = panel.last_styles().unwrap();
    let rendered = styles.panel.expect("exact placement").to_css();

    // 600 - 520 = 80px below the button: the 150px menu cannot fit there,
    // so the second candidate wins and the menu opens upward.
    println!("== Applied placement ==\n  {rendered}");
    println!("  classes: {:?}", panel.classes);
    assert_eq!(panel.classes, ["above"]);
    assert!(rendered.contains("bottom:"));
}
