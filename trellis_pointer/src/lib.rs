// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_pointer --heading-base-level=0

//! Trellis Pointer: pointer and keyboard input normalization for resize interactions.
//!
//! This crate turns heterogeneous host input (mouse events, touch events, arrow
//! keys) into the small uniform vocabulary the rest of Trellis is written
//! against. Each module handles one concern:
//!
//! - [`input`]: classify a raw pointer event (mouse vs. touch, which button),
//!   extract client coordinates, and decide whether the event may start a drag.
//! - [`drag`]: track one down → move× → up session, exposing both the
//!   incremental delta since the previous move and the absolute offset from
//!   the session start.
//! - [`keyboard`]: map arrow keys to signed one-dimensional steps, given a
//!   grow direction that fixes the axis and sign convention.
//!
//! ## Design Philosophy
//!
//! The crate does not listen to anything itself. Hosts own their event loop
//! and their elements; they construct a [`PointerInput`] per raw event and
//! feed positions into a [`DragSession`]. [`SessionListeners`] tells a host
//! which end/move listener pair belongs to a given [`PointerSource`], so that
//! a mouse-initiated session is never torn down by a touch event or vice
//! versa.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use trellis_pointer::{DragSession, PointerButton, PointerInput, PointerSource};
//!
//! let down = PointerInput {
//!     source: PointerSource::Mouse { button: PointerButton::Primary },
//!     position: Some(Point::new(100.0, 40.0)),
//!     hit_is_current_target: true,
//! };
//!
//! let mut session = DragSession::default();
//! if down.starts_drag() {
//!     session.begin(down.client_coords_or_origin());
//! }
//!
//! let delta = session.move_to(Point::new(108.0, 40.0)).unwrap();
//! assert_eq!(delta.x, 8.0);
//!
//! session.finish();
//! assert!(!session.is_active());
//! ```
//!
//! ## Malformed input
//!
//! A [`PointerInput`] whose position could not be extracted from the raw
//! event is still representable (`position: None`). Reading it through
//! [`PointerInput::client_coords`] yields `None`; reading it through
//! [`PointerInput::client_coords_or_origin`] trips a `debug_assert!` in
//! development builds and falls back to the origin in release builds, so an
//! integration bug is loud for the developer and invisible to the end user.
//!
//! This crate is `no_std` compatible for all modules.

#![no_std]

pub mod drag;
pub mod input;
pub mod keyboard;

pub use drag::DragSession;
pub use input::{PointerButton, PointerInput, PointerSource, SessionListeners};
pub use keyboard::{ArrowKey, Axis, GrowDirection, KEYBOARD_STEP, PRECISION_FACTOR, keyboard_step};
