// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_resize_handle --heading-base-level=0

//! Trellis Resize Handle: a generic one-dimensional resize value controller.
//!
//! [`ResizeHandle`] owns a single clamped value (a width, a height, a fixed
//! panel size) and the session protocol that mutates it:
//!
//! - **Programmatic sets** ([`ResizeHandle::set_value`]) clamp and commit
//!   immediately; there is no pending state for them.
//! - **Pointer drags** hold a live, uncommitted value computed from the
//!   pre-drag committed value plus the pointer offset since the drag start,
//!   projected through a [`GrowDirection`]. The live value only becomes the
//!   committed baseline on release (commit-on-release; there is no
//!   abort-and-revert path).
//! - **Keyboard steps** are each their own atomic session: one arrow key
//!   press moves the committed value by [`trellis_pointer::KEYBOARD_STEP`]
//!   (scaled by [`PRECISION_FACTOR`] when a precision modifier is held) with
//!   no drag concept in between.
//! - **Measurement reconciliation**: if the host measures the element after
//!   release and the rendered size differs from the computed value (a style
//!   constraint the handle cannot see may have capped it), the committed
//!   value is corrected to the measurement so the next session starts from
//!   rendered truth.
//!
//! The handle never touches elements itself. Hosts feed it normalized
//! [`PointerInput`] values and client positions, and write
//! [`ResizeHandle::value`] back into whatever styling mechanism they use.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use trellis_pointer::{PointerButton, PointerInput, PointerSource};
//! use trellis_resize_handle::{ResizeHandle, ResizeHandleOptions};
//!
//! let mut handle = ResizeHandle::new(ResizeHandleOptions {
//!     initial_value: 150.0,
//!     min_value: 100.0,
//!     max_value: 400.0,
//!     ..Default::default()
//! });
//!
//! let down = PointerInput {
//!     source: PointerSource::Mouse { button: PointerButton::Primary },
//!     position: Some(Point::new(200.0, 0.0)),
//!     hit_is_current_target: true,
//! };
//! assert!(handle.begin_drag(&down));
//!
//! // Live value while dragging; not yet committed.
//! handle.drag_to(Point::new(260.0, 0.0));
//! assert_eq!(handle.value(), 210.0);
//! assert_eq!(handle.committed_value(), 150.0);
//!
//! // Release commits.
//! handle.end_drag(None);
//! assert_eq!(handle.committed_value(), 210.0);
//! ```
//!
//! This crate is `no_std` compatible.

#![no_std]

use kurbo::Point;
use trellis_pointer::{
    ArrowKey, DragSession, GrowDirection, PRECISION_FACTOR, PointerInput, keyboard_step,
};

fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

/// Configuration for a [`ResizeHandle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeHandleOptions {
    /// The edge the controlled value grows toward. Defaults to
    /// [`GrowDirection::Right`].
    pub grow_direction: GrowDirection,
    /// The starting value; clamped into `[min_value, max_value]`.
    pub initial_value: f64,
    /// Floor for the value. Defaults to `0.0`.
    pub min_value: f64,
    /// Ceiling for the value. Defaults to `f64::MAX` (unbounded in practice).
    pub max_value: f64,
}

impl Default for ResizeHandleOptions {
    fn default() -> Self {
        Self {
            grow_direction: GrowDirection::Right,
            initial_value: 0.0,
            min_value: 0.0,
            max_value: f64::MAX,
        }
    }
}

/// A one-dimensional resize value with drag, keyboard, and clamp semantics.
///
/// See the [crate docs](crate) for the session protocol.
#[derive(Debug, Clone, Copy)]
pub struct ResizeHandle {
    grow_direction: GrowDirection,
    min_value: f64,
    max_value: f64,
    committed: f64,
    current: f64,
    session: DragSession,
}

impl ResizeHandle {
    /// Creates a handle from `options`, clamping the initial value.
    #[must_use]
    pub fn new(options: ResizeHandleOptions) -> Self {
        let initial = clamp(options.initial_value, options.min_value, options.max_value);
        Self {
            grow_direction: options.grow_direction,
            min_value: options.min_value,
            max_value: options.max_value,
            committed: initial,
            current: initial,
            session: DragSession::default(),
        }
    }

    /// The value to render right now: live during a drag, committed otherwise.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.current
    }

    /// The committed baseline the next session will start from.
    #[must_use]
    pub fn committed_value(&self) -> f64 {
        self.committed
    }

    /// The current lower bound.
    #[must_use]
    pub fn min_value(&self) -> f64 {
        self.min_value
    }

    /// The current upper bound.
    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    /// The direction the value grows toward.
    #[must_use]
    pub fn grow_direction(&self) -> GrowDirection {
        self.grow_direction
    }

    /// Returns `true` while a pointer drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_active()
    }

    /// Sets the value programmatically: clamps, commits, returns the applied
    /// value. Programmatic sets have no pending state.
    pub fn set_value(&mut self, value: f64) -> f64 {
        let applied = clamp(value, self.min_value, self.max_value);
        self.committed = applied;
        self.current = applied;
        applied
    }

    /// Replaces the bounds, re-clamping the committed value if it now falls
    /// outside them. Returns `true` when the value changed, so hosts know to
    /// propagate the new size.
    pub fn set_bounds(&mut self, min_value: f64, max_value: f64) -> bool {
        self.min_value = min_value;
        self.max_value = max_value;
        let clamped = clamp(self.current, min_value, max_value);
        if clamped != self.current {
            self.committed = clamped;
            self.current = clamped;
            true
        } else {
            false
        }
    }

    /// Starts a drag session from `input`, if it qualifies (primary button,
    /// exact target). Returns whether a session was started.
    pub fn begin_drag(&mut self, input: &PointerInput) -> bool {
        if !input.starts_drag() {
            return false;
        }
        self.session.begin(input.client_coords_or_origin());
        true
    }

    /// Advances the drag to `pos`, updating and returning the live value.
    ///
    /// The candidate is always derived from the committed baseline plus the
    /// total offset since the drag started, so out-of-range pointer travel
    /// does not accumulate: dragging far past a bound and back behaves as if
    /// the bound were never crossed. Without an active session this is a
    /// no-op returning the current value.
    pub fn drag_to(&mut self, pos: Point) -> f64 {
        if let Some(offset) = self.session.offset_from_start(pos) {
            let candidate = self.committed + self.grow_direction.signed_delta(offset);
            self.current = clamp(candidate, self.min_value, self.max_value);
        }
        self.current
    }

    /// Advances the drag to an externally computed candidate value.
    ///
    /// Callers that derive the candidate from their own geometry (a panel
    /// split computing a percentage from measured rects, say) feed it here
    /// instead of [`drag_to`](Self::drag_to); clamping and commit-on-release
    /// apply unchanged. Without an active session this is a no-op returning
    /// the current value.
    pub fn drag_to_value(&mut self, candidate: f64) -> f64 {
        if self.session.is_active() {
            self.current = clamp(candidate, self.min_value, self.max_value);
        }
        self.current
    }

    /// Ends the drag, committing the live value.
    ///
    /// If the host measures the element after release and passes the result
    /// as `measured`, a differing measurement replaces the computed value:
    /// an outside style constraint capped the rendered size, and the next
    /// session must start from what is actually on screen. The measurement
    /// is taken as-is, even outside the configured bounds.
    pub fn end_drag(&mut self, measured: Option<f64>) -> f64 {
        self.session.finish();
        self.committed = self.current;
        if let Some(measured) = measured {
            if measured != self.committed {
                self.committed = measured;
                self.current = measured;
            }
        }
        self.committed
    }

    /// Applies one arrow-key step: clamped and committed immediately.
    ///
    /// Returns the new committed value, or `None` for cross-axis arrows
    /// (which must leave the value untouched).
    pub fn keyboard_step(&mut self, key: ArrowKey) -> Option<f64> {
        self.keyboard_step_scaled(key, 1.0)
    }

    /// Like [`keyboard_step`](Self::keyboard_step) with the step scaled by
    /// [`PRECISION_FACTOR`], for hosts that expose a precision modifier.
    pub fn keyboard_step_precise(&mut self, key: ArrowKey) -> Option<f64> {
        self.keyboard_step_scaled(key, PRECISION_FACTOR)
    }

    fn keyboard_step_scaled(&mut self, key: ArrowKey, factor: f64) -> Option<f64> {
        let step = keyboard_step(self.grow_direction, key)?;
        Some(self.set_value(self.committed + step * factor))
    }
}
