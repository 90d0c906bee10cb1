// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flexible dimensions: a long list that cannot fit at natural size gets a
//! sizing box to scroll within, bounded by the viewport, with alignment
//! hints pushing the content toward its anchored corner.
//!
//! Run:
//! - `cargo run -p canopy_demos --example flexible_panel`

use canopy_overlay::adapters::headless::{HeadlessPanel, StaticAnchor, StaticRuler};
use canopy_overlay::strategy::FlexiblePositionStrategy;
use canopy_overlay::style::{BoxStyle, FlexAlign};
use canopy_overlay::types::Origin;
use canopy_placement::types::{
    ConnectedPosition, HorizontalAnchor::*, Length, SizeLimits, VerticalAnchor::*,
};
use kurbo::{Rect, Size};

fn main() {
    let ruler = StaticRuler::new(Size::new(800.0, 600.0));

    // A select control near the top; its option list is 900px tall.
    let control = Rect::new(100.0, 80.0, 300.0, 112.0);
    let mut strategy = FlexiblePositionStrategy::new(ruler, Origin::Anchor(StaticAnchor(control)));
    strategy
        .with_positions(vec![ConnectedPosition::new(Start, Bottom, Start, Top)])
        .unwrap()
        .with_viewport_margin(16.0);

    let mut list = HeadlessPanel::new(Size::new(200.0, 900.0));
    list.limits = SizeLimits {
        min_height: Some(Length::Px(120.0)),
        max_height: Some(Length::Css("480px".into())),
        ..Default::default()
    };

    strategy.attach(list).unwrap();
    strategy.apply();

    let panel = strategy.overlay().unwrap();
    let styles = panel.last_styles().unwrap();
    let BoxStyle::Sized(container) = styles.container else {
        panic!("flexible placements get a sized container");
    };

    // The box runs from the anchor (y = 112) to the bottom margin line
    // (y = 584): 472px for a 900px list, which scrolls within it.
    println!("== Sizing box ==\n  {}", container.to_css());
    assert_eq!(container.top, Some(112.0));
    assert_eq!(container.height, Some(472.0));
    assert_eq!(styles.justify_content, FlexAlign::Start);
    assert_eq!(styles.max_height, Some(480.0));
    println!(
        "  align: {:?}/{:?}, max-height: {:?}",
        styles.align_items, styles.justify_content, styles.max_height
    );
}
