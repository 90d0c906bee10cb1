// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement selection: the decision chain over ranked candidates.
//!
//! ## Overview
//!
//! [`select`] walks the candidate list once and classifies each candidate
//! into one of three tiers, then resolves the tiers as a strict priority
//! chain:
//!
//! 1. The first candidate that fits completely wins immediately — list
//!    order is caller priority, so this is first-match, not best-fit.
//! 2. Otherwise, candidates that can flex within their sizing box while
//!    meeting the configured minimums compete on `box area × weight`.
//! 3. Otherwise, the candidate with the greatest visible area becomes the
//!    fallback; the caller decides whether to push it on screen.
//!
//! ## Ties
//!
//! Both secondary scans replace the incumbent only on a strictly greater
//! score, so the first-seen candidate wins ties. This stability matters:
//! re-running selection with unchanged geometry must never flip between
//! equally scored candidates.

use alloc::vec::Vec;
use kurbo::{Point, Rect, Vec2};

use crate::bbox::{GrowthPolicy, sizing_box};
use crate::fit::{evaluate, origin_anchor, panel_anchor};
use crate::types::{ConnectedPosition, Direction, PanelFit};

/// Inputs held fixed across one selection pass.
#[derive(Clone, Debug)]
pub struct SelectionContext {
    /// Layout direction `Start`/`End` anchors resolve against.
    pub direction: Direction,
    /// Displacement applied to candidates that carry no offsets of their
    /// own.
    pub default_offset: Vec2,
    /// Whether candidates may be accepted by resizing within a sizing box.
    pub flexible_dimensions: bool,
    /// Minimum width the panel may shrink to, in pixels.
    pub min_width: Option<f64>,
    /// Minimum height the panel may shrink to, in pixels.
    pub min_height: Option<f64>,
    /// Growth-limiting state for sizing boxes.
    pub growth: GrowthPolicy,
}

impl Default for SelectionContext {
    fn default() -> Self {
        Self {
            direction: Direction::Ltr,
            default_offset: Vec2::ZERO,
            flexible_dimensions: false,
            min_width: None,
            min_height: None,
            growth: GrowthPolicy::initial(),
        }
    }
}

/// The tier the winning candidate was selected from.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SelectionTier {
    /// Fits completely at its natural size.
    Exact,
    /// Accepted by resizing within its sizing box.
    Flexible,
    /// Best partial visibility; the caller may push it on screen or apply
    /// it clipped.
    Fallback,
}

/// Outcome of a selection pass.
#[derive(Clone, Debug)]
pub struct Selection {
    /// Index of the winning candidate in the input list.
    pub index: usize,
    /// The winning candidate.
    pub position: ConnectedPosition,
    /// The anchor point on the origin rect (offsets not applied).
    pub origin_point: Point,
    /// The panel's top-left corner, offsets applied, before any push.
    pub panel_point: Point,
    /// The winner's viewport fit.
    pub fit: PanelFit,
    /// Which tier won.
    pub tier: SelectionTier,
    /// The sizing box for the winner (meaningful for flexible placements;
    /// computed for all tiers so callers can track its size).
    pub bounding_box: Rect,
}

/// Whether a non-fitting candidate can still be accepted by flexing.
///
/// An axis qualifies when the panel fits there naturally, or the space from
/// the panel's corner to the far viewport edge meets the configured
/// minimum. An absent minimum is unconstrained and qualifies; otherwise
/// flexible dimensions would be inert for panels with no declared minimum
/// size.
fn fits_flexibly(fit: &PanelFit, point: Point, viewport: Rect, ctx: &SelectionContext) -> bool {
    let available_height = viewport.y1 - point.y;
    let available_width = viewport.x1 - point.x;
    let vertical = fit.fits_vertically || ctx.min_height.is_none_or(|m| m <= available_height);
    let horizontal = fit.fits_horizontally || ctx.min_width.is_none_or(|m| m <= available_width);
    vertical && horizontal
}

/// Pick one candidate from `positions` for the given geometry.
///
/// Returns `None` only for an empty candidate list (callers validate the
/// list long before selection). Degenerate geometry is never an error: some
/// candidate always wins, if only as a clipped fallback.
pub fn select(
    positions: &[ConnectedPosition],
    origin: Rect,
    panel: Rect,
    viewport: Rect,
    ctx: &SelectionContext,
) -> Option<Selection> {
    struct Scored {
        index: usize,
        origin_point: Point,
        panel_point: Point,
        fit: PanelFit,
        bounding_box: Rect,
    }

    let mut flexible: Vec<Scored> = Vec::new();
    let mut fallback: Option<Scored> = None;

    for (index, position) in positions.iter().enumerate() {
        let origin_point = origin_anchor(origin, position, ctx.direction);
        let anchor = panel_anchor(origin_point, panel, position, ctx.direction);
        let offset = position.offset(ctx.default_offset);
        let fit = evaluate(anchor, panel, viewport, offset);
        let panel_point = anchor + offset;

        if fit.is_complete {
            return Some(Selection {
                index,
                position: position.clone(),
                origin_point,
                panel_point,
                fit,
                tier: SelectionTier::Exact,
                bounding_box: sizing_box(origin_point, position, viewport, ctx.direction, ctx.growth),
            });
        }

        if ctx.flexible_dimensions && fits_flexibly(&fit, panel_point, viewport, ctx) {
            flexible.push(Scored {
                index,
                origin_point,
                panel_point,
                fit,
                bounding_box: sizing_box(origin_point, position, viewport, ctx.direction, ctx.growth),
            });
            continue;
        }

        // Strictly-greater comparison: the first candidate at a given
        // visible area stays the fallback.
        if fallback
            .as_ref()
            .is_none_or(|f| f.fit.visible_area < fit.visible_area)
        {
            fallback = Some(Scored {
                index,
                origin_point,
                panel_point,
                fit,
                bounding_box: sizing_box(origin_point, position, viewport, ctx.direction, ctx.growth),
            });
        }
    }

    if !flexible.is_empty() {
        let mut best: Option<&Scored> = None;
        let mut best_score = 0.0;
        for entry in &flexible {
            let weight = positions[entry.index].weight.unwrap_or(1.0);
            let score = entry.bounding_box.area() * weight;
            if best.is_none() || score > best_score {
                best_score = score;
                best = Some(entry);
            }
        }
        let winner = best?;
        return Some(Selection {
            index: winner.index,
            position: positions[winner.index].clone(),
            origin_point: winner.origin_point,
            panel_point: winner.panel_point,
            fit: winner.fit,
            tier: SelectionTier::Flexible,
            bounding_box: winner.bounding_box,
        });
    }

    let fb = fallback?;
    Some(Selection {
        index: fb.index,
        position: positions[fb.index].clone(),
        origin_point: fb.origin_point,
        panel_point: fb.panel_point,
        fit: fb.fit,
        tier: SelectionTier::Fallback,
        bounding_box: fb.bounding_box,
    })
}
