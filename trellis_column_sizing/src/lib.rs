// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_column_sizing --heading-base-level=0

//! Trellis Column Sizing: a table column width model and resize controller.
//!
//! Tables with resizable columns all solve the same problem: a set of
//! columns, each with a minimum and a preferred width, must share one
//! container whose width changes under them, while the user drags individual
//! boundaries around. This crate implements that problem once, independent
//! of any table widget:
//!
//! - [`state`]: the pure width model. Plain functions over
//!   `[ColumnWidthState]` slices implement fit-to-container distribution,
//!   deliberate resizes, and from-scratch layout. Everything is
//!   deterministic and directly testable.
//! - [`controller`]: [`ColumnResizeController`], the one stateful adapter.
//!   It owns the column state, the measured container width, and the active
//!   drag session, and turns pointer input into width mutations.
//! - [`keyboard`]: [`InteractiveResize`], an accessible resize mode driving
//!   the same mutations from arrow keys.
//!
//! Columns are keyed by a host-chosen `Id` (`Clone + PartialEq`), typically
//! a small string or integer type.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use trellis_column_sizing::{ColumnResizeController, ColumnSizingOptions};
//! use trellis_pointer::{PointerButton, PointerInput, PointerSource};
//!
//! let mut controller =
//!     ColumnResizeController::new(&["name", "size"], ColumnSizingOptions::default());
//!
//! // The host measured the table at 500 logical pixels.
//! controller.init(500.0);
//!
//! // Both columns reach their 150px ideal; the trailing column absorbs the
//! // remainder (padding included in totals).
//! assert_eq!(controller.total_width(), 500.0);
//!
//! // Drag the boundary of "name" 40px to the right.
//! let down = PointerInput {
//!     source: PointerSource::Mouse { button: PointerButton::Primary },
//!     position: Some(Point::new(150.0, 10.0)),
//!     hit_is_current_target: true,
//! };
//! assert!(controller.begin_drag("name", &down));
//! controller.drag_to(&PointerInput { position: Some(Point::new(190.0, 10.0)), ..down });
//! controller.end_drag();
//!
//! assert_eq!(controller.column_width(&"name"), 190.0);
//! assert_eq!(controller.total_width(), 500.0);
//! ```
//!
//! ## Structural events
//!
//! The model never adds or removes columns on its own. When it runs out of
//! room it reports [`SizingEvent::ColumnOverflow`] for each column pinned at
//! its minimum, and when dragging the last column frees space it reports
//! [`SizingEvent::SpaceAvailable`]; the host decides whether to hide or
//! re-introduce columns and pushes a new definition list into
//! [`ColumnResizeController::set_columns`].
//!
//! This crate is `no_std` compatible for all modules.

#![no_std]

extern crate alloc;

pub mod controller;
pub mod keyboard;
pub mod state;

pub use controller::{ColumnProps, ColumnResizeController, SizingStyle};
pub use keyboard::{InteractiveKey, InteractiveResize, KeyOutcome};
pub use state::{
    ColumnOptions, ColumnSizingOptions, ColumnWidthState, DEFAULT_IDEAL_WIDTH, DEFAULT_MIN_WIDTH,
    DEFAULT_PADDING, SizingEvent,
};
