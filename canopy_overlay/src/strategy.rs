// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The flexible connected-position strategy.
//!
//! ## Overview
//!
//! [`FlexiblePositionStrategy`] owns one panel's positioning across its
//! lifetime: configuration, the attach/apply/detach/dispose lifecycle, and
//! the state that must survive from one `apply()` to the next (the locked
//! decision, the recorded push delta, the last bounding-box size for the
//! growth clamp, the applied classes).
//!
//! ## Determinism across calls
//!
//! Two stability guarantees are load-bearing for consumers:
//!
//! - **Locking**: once a position is locked and decided, `apply()` replays
//!   the previously synthesized styles verbatim — no re-measurement, no
//!   re-selection — until a viewport change resets the decision. Locked
//!   means never re-decided.
//! - **Push reuse**: a recorded push delta is reapplied exactly on later
//!   locked passes rather than recomputed, so a pushed panel does not creep
//!   as surrounding geometry drifts.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect, Size, Vec2};

use canopy_placement::bbox::GrowthPolicy;
use canopy_placement::push::push_on_screen;
use canopy_placement::select::{SelectionContext, SelectionTier, select};
use canopy_placement::types::{ConnectedPosition, Direction, Length};

use crate::style::{PlacementStyles, synthesize};
use crate::types::{
    AnchorRect, ConfigError, NoAnchor, Origin, OverlayRef, PositionChange, RenderSink,
    ScrollVisibility, ViewportRuler, narrowed_viewport,
};

/// Positions a panel relative to an origin, picking from ranked candidate
/// geometries on every `apply()`.
///
/// ## Usage
///
/// - Construct with [`FlexiblePositionStrategy::new`] from a ruler and an
///   [`Origin`], then configure through the `with_*` setters. Configuration
///   has no effect until the next `apply()`.
/// - [`attach`](Self::attach) a panel (anything implementing
///   [`OverlayRef`] + [`RenderSink`]), then call [`apply`](Self::apply) to
///   position it; call it again whenever the environment moves (scroll,
///   resize, content change).
/// - Forward viewport resize events to
///   [`viewport_changed`](Self::viewport_changed) before the re-apply, so
///   the full selection re-runs even under position locking.
pub struct FlexiblePositionStrategy<R, O, A = NoAnchor> {
    ruler: R,
    origin: Origin<A>,
    overlay: Option<O>,
    positions: Vec<ConnectedPosition>,

    viewport_margin: f64,
    flexible_dimensions: bool,
    grow_after_open: bool,
    can_push: bool,
    position_locked: bool,
    default_offset: Vec2,
    direction: Direction,

    is_disposed: bool,
    is_initial_render: bool,
    is_pushed: bool,
    last_position: Option<ConnectedPosition>,
    previous_push: Option<Vec2>,
    last_bounding_box_size: Size,
    last_styles: Option<PlacementStyles>,
    last_visibility: Option<ScrollVisibility>,
    applied_classes: Vec<String>,
}

impl<R, O, A> core::fmt::Debug for FlexiblePositionStrategy<R, O, A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FlexiblePositionStrategy")
            .field("positions", &self.positions.len())
            .field("attached", &self.overlay.is_some())
            .field("is_disposed", &self.is_disposed)
            .field("is_pushed", &self.is_pushed)
            .field("position_locked", &self.position_locked)
            .finish_non_exhaustive()
    }
}

impl<R, O, A> FlexiblePositionStrategy<R, O, A>
where
    R: ViewportRuler,
    O: OverlayRef + RenderSink,
    A: AnchorRect,
{
    /// A strategy positioning against `origin`, measuring through `ruler`.
    ///
    /// Defaults: flexible dimensions and pushing on, growth after open and
    /// locking off, no margin, no default offsets, LTR.
    pub fn new(ruler: R, origin: Origin<A>) -> Self {
        Self {
            ruler,
            origin,
            overlay: None,
            positions: Vec::new(),
            viewport_margin: 0.0,
            flexible_dimensions: true,
            grow_after_open: false,
            can_push: true,
            position_locked: false,
            default_offset: Vec2::ZERO,
            direction: Direction::Ltr,
            is_disposed: false,
            is_initial_render: true,
            is_pushed: false,
            last_position: None,
            previous_push: None,
            last_bounding_box_size: Size::ZERO,
            last_styles: None,
            last_visibility: None,
            applied_classes: Vec::new(),
        }
    }

    /// Replace the candidate list. The list is priority-ordered: the first
    /// completely fitting candidate wins. Fails fast on an empty list.
    pub fn with_positions(
        &mut self,
        positions: Vec<ConnectedPosition>,
    ) -> Result<&mut Self, ConfigError> {
        if positions.is_empty() {
            return Err(ConfigError::EmptyPositions);
        }
        self.positions = positions;
        Ok(self)
    }

    /// Minimum distance the panel keeps from every viewport edge.
    pub fn with_viewport_margin(&mut self, margin: f64) -> &mut Self {
        self.viewport_margin = margin;
        self
    }

    /// Whether candidates may be accepted by resizing within a sizing box.
    pub fn with_flexible_dimensions(&mut self, flexible: bool) -> &mut Self {
        self.flexible_dimensions = flexible;
        self
    }

    /// Whether the sizing box may grow past its previously applied size
    /// while the panel is open.
    pub fn with_grow_after_open(&mut self, grow: bool) -> &mut Self {
        self.grow_after_open = grow;
        self
    }

    /// Whether a fallback placement is pushed back on screen.
    pub fn with_push(&mut self, push: bool) -> &mut Self {
        self.can_push = push;
        self
    }

    /// Whether the first decision is locked and replayed on later applies.
    pub fn with_locked_position(&mut self, locked: bool) -> &mut Self {
        self.position_locked = locked;
        self
    }

    /// Default horizontal displacement for candidates without their own.
    pub fn with_default_offset_x(&mut self, offset: f64) -> &mut Self {
        self.default_offset.x = offset;
        self
    }

    /// Default vertical displacement for candidates without their own.
    pub fn with_default_offset_y(&mut self, offset: f64) -> &mut Self {
        self.default_offset.y = offset;
        self
    }

    /// Layout direction `Start`/`End` anchors resolve against.
    pub fn with_direction(&mut self, direction: Direction) -> &mut Self {
        self.direction = direction;
        self
    }

    /// Reposition against a different origin from the next `apply()` on.
    pub fn set_origin(&mut self, origin: Origin<A>) -> &mut Self {
        self.origin = origin;
        self
    }

    /// Attach a panel. Fails fast on configuration mistakes; never
    /// silently ignores them.
    pub fn attach(&mut self, overlay: O) -> Result<(), ConfigError> {
        if self.is_disposed {
            return Err(ConfigError::Disposed);
        }
        if self.overlay.is_some() {
            return Err(ConfigError::AlreadyAttached);
        }
        if self.positions.is_empty() {
            return Err(ConfigError::EmptyPositions);
        }
        self.overlay = Some(overlay);
        self.is_initial_render = true;
        self.last_position = None;
        self.last_styles = None;
        self.last_visibility = None;
        Ok(())
    }

    /// Position the attached panel against current geometry.
    ///
    /// Runs to completion synchronously. A disposed strategy, an
    /// unavailable environment, or a missing panel makes this a benign
    /// no-op — positioning may be requested from contexts where nothing
    /// can be measured yet.
    pub fn apply(&mut self) {
        if self.is_disposed || !self.ruler.is_available() {
            return;
        }
        let Some(overlay) = self.overlay.as_mut() else {
            return;
        };

        // Locked replay: consumers depend on "locked means never
        // re-decided", so nothing is re-measured here.
        if !self.is_initial_render && self.position_locked && self.last_styles.is_some() {
            if let Some(styles) = &self.last_styles {
                overlay.apply_styles(styles);
            }
            log::trace!("position locked; replayed previous placement");
            return;
        }

        let origin_rect = self.origin.resolve();
        let panel_rect = overlay.panel_rect();
        let limits = overlay.size_limits();
        let size = self.ruler.viewport_size();
        let viewport = narrowed_viewport(size, self.viewport_margin);

        let ctx = SelectionContext {
            direction: self.direction,
            default_offset: self.default_offset,
            flexible_dimensions: self.flexible_dimensions,
            min_width: limits.min_width.as_ref().and_then(Length::pixels),
            min_height: limits.min_height.as_ref().and_then(Length::pixels),
            growth: GrowthPolicy {
                grow_after_open: self.grow_after_open,
                initial_render: self.is_initial_render,
                last_size: self.last_bounding_box_size,
            },
        };

        let Some(selection) = select(&self.positions, origin_rect, panel_rect, viewport, &ctx)
        else {
            return;
        };

        let mut pushed = false;
        let final_point = if selection.tier == SelectionTier::Fallback && self.can_push {
            let previous = if self.position_locked {
                self.previous_push
            } else {
                None
            };
            let result = push_on_screen(selection.panel_point, panel_rect, viewport, previous);
            self.previous_push = Some(result.delta);
            pushed = true;
            log::debug!(
                "no candidate fit; pushed fallback {} by ({}, {})",
                selection.index,
                result.delta.x,
                result.delta.y
            );
            result.point
        } else {
            log::debug!(
                "selected candidate {} ({:?} tier)",
                selection.index,
                selection.tier
            );
            selection.panel_point
        };

        // A pushed panel must not also reflow, so it renders exactly.
        let exact = !self.flexible_dimensions || pushed;
        let styles = synthesize(
            &selection.position,
            final_point,
            panel_rect,
            selection.bounding_box,
            size,
            self.ruler.scroll_offset(),
            &limits,
            self.direction,
            exact,
        );

        let new_classes = selection.position.panel_classes.clone();
        let stale: Vec<String> = self
            .applied_classes
            .iter()
            .filter(|c| !new_classes.contains(c))
            .cloned()
            .collect();
        let fresh: Vec<String> = new_classes
            .iter()
            .filter(|c| !self.applied_classes.contains(c))
            .cloned()
            .collect();
        if !stale.is_empty() {
            overlay.remove_panel_classes(&stale);
        }
        if !fresh.is_empty() {
            overlay.add_panel_classes(&fresh);
        }
        self.applied_classes = new_classes;

        overlay.apply_styles(&styles);

        let full_viewport = Rect::from_origin_size(Point::ZERO, size);
        let placed = Rect::from_origin_size(final_point, panel_rect.size());
        let visibility = ScrollVisibility::compute(origin_rect, placed, full_viewport);
        if self.last_position.as_ref() != Some(&selection.position)
            || self.last_visibility != Some(visibility)
        {
            overlay.position_changed(&PositionChange {
                position: selection.position.clone(),
                visibility,
            });
        }

        self.last_visibility = Some(visibility);
        self.last_position = Some(selection.position);
        self.last_bounding_box_size = selection.bounding_box.size();
        self.last_styles = Some(styles);
        self.is_pushed = pushed;
        self.is_initial_render = false;
    }

    /// Note a viewport resize: the next `apply()` runs the full selection
    /// again, even under position locking.
    pub fn viewport_changed(&mut self) {
        self.is_initial_render = true;
    }

    /// Detach the panel, returning it. Transient positioning state is
    /// cleared and applied classes are removed; configuration is kept, so
    /// the strategy can be attached again.
    pub fn detach(&mut self) -> Option<O> {
        if let Some(overlay) = self.overlay.as_mut()
            && !self.applied_classes.is_empty()
        {
            let classes = core::mem::take(&mut self.applied_classes);
            overlay.remove_panel_classes(&classes);
        }
        self.applied_classes.clear();
        self.last_position = None;
        self.previous_push = None;
        self.last_styles = None;
        self.last_visibility = None;
        self.is_pushed = false;
        self.is_initial_render = true;
        self.overlay.take()
    }

    /// Dispose the strategy. Terminal and idempotent; later calls to
    /// `apply()` are no-ops and `attach()` fails.
    pub fn dispose(&mut self) {
        if self.is_disposed {
            return;
        }
        self.detach();
        self.is_disposed = true;
    }

    /// The attached panel, if any.
    pub fn overlay(&self) -> Option<&O> {
        self.overlay.as_ref()
    }

    /// The attached panel, mutably.
    pub fn overlay_mut(&mut self) -> Option<&mut O> {
        self.overlay.as_mut()
    }

    /// The configured candidate list.
    pub fn positions(&self) -> &[ConnectedPosition] {
        &self.positions
    }

    /// Whether the last applied placement was pushed on screen.
    pub fn is_pushed(&self) -> bool {
        self.is_pushed
    }

    /// The most recently synthesized styles, if a placement was applied.
    pub fn last_styles(&self) -> Option<&PlacementStyles> {
        self.last_styles.as_ref()
    }
}
