// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_panel_split --heading-base-level=0

//! Trellis Panel Split: a two-region resizable split model.
//!
//! [`PanelSplitModel`] divides one horizontal container between two regions
//! separated by a draggable handle. The split is stored as a **percentage**
//! of the container, so it survives container resizes without drift; the
//! pixel size of the first region is derived from it and kept alongside.
//!
//! The model is a two-state machine, idle ⇄ dragging:
//!
//! - At pointer-down the host measures the container and handle rects once
//!   and passes them as a [`SessionFrame`], together with the document order
//!   of handle and first region ([`AnchorOrder`]). Geometry is **not**
//!   re-measured per move; every move is interpreted against the frame.
//! - Each move derives the handle's new position from the pointer's total
//!   offset since the session start (absolute positioning; deliberately not
//!   incremental) and converts it to a percentage of the container's usable
//!   width. Clamping to the configured constraints and the live/committed
//!   split are delegated to an internal
//!   [`ResizeHandle`](trellis_resize_handle::ResizeHandle) operating in
//!   percent space.
//! - Release commits the live percentage as the new baseline.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use trellis_panel_split::{AnchorOrder, PanelSplitModel, PanelSplitOptions, SessionFrame};
//! use trellis_pointer::{PointerButton, PointerInput, PointerSource};
//!
//! let mut split = PanelSplitModel::new(PanelSplitOptions::default());
//! split.container_resized(600.0);
//! assert_eq!(split.first_percent(), 50.0);
//! assert_eq!(split.first_px(), 300.0);
//!
//! // Pointer-down on the handle: capture the frame.
//! let frame = SessionFrame {
//!     container: Rect::new(0.0, 0.0, 600.0, 400.0),
//!     handle: Rect::new(295.0, 0.0, 305.0, 400.0),
//!     order: AnchorOrder::FirstThenSecond,
//! };
//! let down = PointerInput {
//!     source: PointerSource::Mouse { button: PointerButton::Primary },
//!     position: Some(Point::new(300.0, 200.0)),
//!     hit_is_current_target: true,
//! };
//! assert!(split.begin_drag(frame, &down));
//!
//! // 59px of travel over a 590px usable width is ten percent.
//! split.drag_to(Point::new(359.0, 200.0));
//! assert_eq!(split.first_percent(), 60.0);
//!
//! split.end_drag();
//! assert_eq!(split.first_percent(), 60.0);
//! assert!(!split.is_dragging());
//! ```
//!
//! This crate is `no_std` compatible.

#![no_std]

use kurbo::{Point, Rect};
use trellis_pointer::{ArrowKey, PointerInput};
use trellis_resize_handle::{ResizeHandle, ResizeHandleOptions};

/// Document order of the handle relative to the first region.
///
/// The percentage formula positions the handle's left edge within the
/// container; which region that share belongs to depends on whether the
/// first region sits before or after the handle. Hosts answer this once per
/// session, at pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorOrder {
    /// First region, handle, second region.
    FirstThenSecond,
    /// Second region, handle, first region.
    SecondThenFirst,
}

/// Geometry captured at pointer-down, valid for one drag session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionFrame {
    /// The panel group's bounding rect in client coordinates.
    pub container: Rect,
    /// The handle's bounding rect in client coordinates.
    pub handle: Rect,
    /// Document order of handle and first region.
    pub order: AnchorOrder,
}

/// Which of the two regions is being queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelIndex {
    /// The region the stored percentage belongs to.
    First,
    /// The complementary region.
    Second,
}

/// Configuration for a [`PanelSplitModel`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelSplitOptions {
    /// Initial percent shares of the two regions. Only the first entry is
    /// stored; the second region always renders as the complement to 100.
    pub default_sizes: [f64; 2],
    /// Lower and upper bound on the first region's percent share.
    pub constraints: [f64; 2],
}

impl Default for PanelSplitOptions {
    fn default() -> Self {
        Self {
            default_sizes: [50.0, 50.0],
            constraints: [0.0, 100.0],
        }
    }
}

/// A flex style fragment for one region.
///
/// The two regions' `flex_grow` values sum to 100, so a host can lay both
/// out with `flex-grow` alone and no explicit widths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelStyle {
    /// Relative share of the container, in percent points.
    pub flex_grow: f64,
}

/// Two-region split model. See the [crate docs](crate) for the protocol.
#[derive(Debug, Clone, Copy)]
pub struct PanelSplitModel {
    /// The first region's percent share, with clamp and commit semantics.
    handle: ResizeHandle,
    frame: Option<SessionFrame>,
    down: Point,
    container_width: f64,
    first_px: f64,
}

impl PanelSplitModel {
    /// Creates an idle model from `options`.
    ///
    /// The pixel size stays zero until the host reports a container width
    /// through [`container_resized`](Self::container_resized).
    #[must_use]
    pub fn new(options: PanelSplitOptions) -> Self {
        let handle = ResizeHandle::new(ResizeHandleOptions {
            initial_value: options.default_sizes[0],
            min_value: options.constraints[0],
            max_value: options.constraints[1],
            ..Default::default()
        });
        Self {
            handle,
            frame: None,
            down: Point::ORIGIN,
            container_width: 0.0,
            first_px: 0.0,
        }
    }

    /// The first region's percent share: live during a drag, committed
    /// otherwise.
    #[must_use]
    pub fn first_percent(&self) -> f64 {
        self.handle.value()
    }

    /// The first region's size in logical pixels, derived from the percent
    /// share and the last known container width.
    #[must_use]
    pub fn first_px(&self) -> f64 {
        self.first_px
    }

    /// Returns `true` while a drag session is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.frame.is_some()
    }

    /// Style fragment for one region; the pair sums to 100.
    #[must_use]
    pub fn panel_props(&self, index: PanelIndex) -> PanelStyle {
        let percent = self.first_percent();
        PanelStyle {
            flex_grow: match index {
                PanelIndex::First => percent,
                PanelIndex::Second => 100.0 - percent,
            },
        }
    }

    /// Reacts to an observed container width change.
    ///
    /// The percent split is the source of truth and stays put; only the
    /// derived pixel size is recomputed. Skipped entirely while a drag is
    /// active (the session frame owns the geometry until release).
    pub fn container_resized(&mut self, container_width: f64) {
        if self.is_dragging() {
            return;
        }
        self.container_width = container_width;
        self.first_px = self.handle.value() / 100.0 * container_width;
    }

    /// Starts a drag session with the geometry measured at pointer-down.
    ///
    /// Returns `false` (and stays idle) for input that does not qualify:
    /// non-primary buttons or events targeting a child of the handle.
    pub fn begin_drag(&mut self, frame: SessionFrame, input: &PointerInput) -> bool {
        if !self.handle.begin_drag(input) {
            return false;
        }
        self.down = input.client_coords_or_origin();
        self.container_width = frame.container.width();
        self.frame = Some(frame);
        true
    }

    /// Advances the active drag to `pos`, returning the live percent share.
    ///
    /// The handle's new left edge is the captured edge plus the pointer's
    /// total offset since the session start; its share of the usable width
    /// (container minus handle) is the raw percentage, oriented by the
    /// frame's [`AnchorOrder`] and clamped to the constraints.
    pub fn drag_to(&mut self, pos: Point) -> f64 {
        let Some(frame) = self.frame else {
            return self.first_percent();
        };

        let usable = frame.container.width() - frame.handle.width();
        if usable <= 0.0 {
            return self.first_percent();
        }

        let dx = pos.x - self.down.x;
        let handle_left = frame.handle.x0 + dx - frame.container.x0;
        let raw = handle_left / usable * 100.0;
        let first = match frame.order {
            AnchorOrder::FirstThenSecond => raw,
            AnchorOrder::SecondThenFirst => 100.0 - raw,
        };

        let applied = self.handle.drag_to_value(first);
        self.first_px = applied / 100.0 * frame.container.width();
        applied
    }

    /// Ends the session, committing the live percent as the new baseline.
    pub fn end_drag(&mut self) {
        self.handle.end_drag(None);
        self.frame = None;
    }

    /// Applies one arrow-key step to the committed percent share.
    ///
    /// Steps move the split by [`trellis_pointer::KEYBOARD_STEP`] percent
    /// points, clamped to the constraints; cross-axis arrows return `None`
    /// and change nothing. Ignored while a pointer drag is active.
    pub fn keyboard_step(&mut self, key: ArrowKey) -> Option<f64> {
        if self.is_dragging() {
            return None;
        }
        let applied = self.handle.keyboard_step(key)?;
        self.first_px = applied / 100.0 * self.container_width;
        Some(applied)
    }
}
