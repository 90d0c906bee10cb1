// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Overlay: the stateful positioning strategy for floating panels.
//!
//! ## Overview
//!
//! This crate wires the pure placement algorithm from `canopy_placement` to
//! an environment through a handful of ports, and owns the state that spans
//! repositioning calls: position locking, growth limits, recorded push
//! deltas, applied style classes.
//!
//! ## Ports
//!
//! - [`ViewportRuler`](crate::types::ViewportRuler) — viewport size and
//!   scroll offset. Reports unavailability (e.g. a pre-render context) so
//!   that [`apply`](crate::strategy::FlexiblePositionStrategy::apply)
//!   degrades to a no-op instead of an error.
//! - [`AnchorRect`](crate::types::AnchorRect) — a live rect for an anchor
//!   element; re-read on every pass, never cached, since layout may have
//!   changed.
//! - [`OverlayRef`](crate::types::OverlayRef) — the attached panel's
//!   measured rect and declared size limits.
//! - [`RenderSink`](crate::types::RenderSink) — receives synthesized
//!   [`PlacementStyles`](crate::style::PlacementStyles), class changes, and
//!   [`PositionChange`](crate::types::PositionChange) notifications. The
//!   strategy never touches a render target directly, which keeps the whole
//!   pipeline testable with plain values.
//!
//! ## Lifecycle
//!
//! `unattached → attached → positioned ⇄ positioned → detached`, with
//! `dispose` terminal and idempotent. [`attach`](crate::strategy::FlexiblePositionStrategy::attach)
//! fails fast on configuration mistakes (empty candidate list, double
//! attach, attach after dispose). Each `apply()` runs the full selection —
//! unless the position is locked and a decision exists, in which case the
//! previous styles are replayed verbatim. A viewport change
//! ([`viewport_changed`](crate::strategy::FlexiblePositionStrategy::viewport_changed))
//! forces the next `apply()` back through the full selection even under
//! locking.
//!
//! ## Workflow
//!
//! ```
//! use canopy_overlay::adapters::headless::{HeadlessPanel, StaticAnchor, StaticRuler};
//! use canopy_overlay::strategy::FlexiblePositionStrategy;
//! use canopy_overlay::types::Origin;
//! use canopy_placement::types::{ConnectedPosition, HorizontalAnchor, VerticalAnchor};
//! use kurbo::{Rect, Size};
//!
//! let ruler = StaticRuler::new(Size::new(800.0, 600.0));
//! let origin = Origin::Anchor(StaticAnchor(Rect::new(100.0, 100.0, 180.0, 130.0)));
//! let mut strategy = FlexiblePositionStrategy::new(ruler, origin);
//! strategy
//!     .with_positions(vec![ConnectedPosition::new(
//!         HorizontalAnchor::Start,
//!         VerticalAnchor::Bottom,
//!         HorizontalAnchor::Start,
//!         VerticalAnchor::Top,
//!     )])
//!     .unwrap();
//!
//! strategy.attach(HeadlessPanel::new(Size::new(200.0, 150.0))).unwrap();
//! strategy.apply();
//!
//! let panel = strategy.overlay().unwrap();
//! assert_eq!(panel.styles.len(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod strategy;
pub mod style;
pub mod types;
