// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Placement: deterministic placement selection for connected panels.
//!
//! ## Overview
//!
//! This crate decides where a floating panel (menu, tooltip, popover) goes
//! relative to an anchor rect. Given a ranked list of candidate connection
//! geometries — which corner of the anchor pairs with which corner of the
//! panel — it picks the candidate that best satisfies visibility and size
//! constraints, and computes the exact point and sizing box for it.
//! It is a pure function of rects: no environment access, no retained state.
//!
//! ## Inputs
//!
//! Provide the anchor rect, the panel's measured rect, the (margin-narrowed)
//! viewport rect, and one or more [`ConnectedPosition`](crate::types::ConnectedPosition)
//! candidates in priority order. First listed wins all ties.
//!
//! ## Decision chain
//!
//! [`select`](crate::select::select) walks a strict priority chain, never a
//! weighted blend across tiers:
//!
//! 1. **Exact** — the first candidate, in list order, whose panel box lies
//!    entirely inside the viewport at its natural size wins immediately.
//!    This is first-match, not best-fit: caller priority is preserved even
//!    when a later candidate would expose more area.
//! 2. **Flexible** — failing that, candidates that can be resized within a
//!    [sizing box](crate::bbox::sizing_box) while honoring the configured
//!    minimum dimensions compete on `box area × weight`; ties go to the
//!    first seen.
//! 3. **Fallback** — failing that, the candidate with the greatest visible
//!    area is selected; the caller may then [push](crate::push::push_on_screen)
//!    it back on screen, or apply it as-is with part of it clipped.
//!
//! Geometric degeneracies (zero-size anchors, anchors outside the viewport)
//! are never errors; the chain always terminates with a selection.
//!
//! ## Layering
//!
//! This crate only computes the decision. A higher-level strategy owns the
//! state that spans repositioning calls — position locking, growth limits,
//! recorded push deltas — and feeds it back in through
//! [`SelectionContext`](crate::select::SelectionContext) and
//! [`GrowthPolicy`](crate::bbox::GrowthPolicy).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod bbox;
pub mod fit;
pub mod push;
pub mod select;
pub mod types;
