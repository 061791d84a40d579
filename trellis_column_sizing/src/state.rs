// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pure column width model.
//!
//! Everything in this module is a plain function over an explicit
//! `Vec<ColumnWidthState>` / `&mut [ColumnWidthState]` value; nothing here
//! holds state, measures elements, or knows about input. The
//! [`controller`](crate::controller) module is the one mutable adapter that
//! binds these functions to a live container.
//!
//! ## Ordering is a contract
//!
//! [`adjust_to_fit`] distributes slack **left to right** and reclaims
//! overflow **right to left**, in definition order. This is observable
//! behavior, not an implementation detail: it decides which column absorbs
//! remainders and which columns reach their bounds first, and the tests pin
//! it down. Callers that want the mirrored behavior for right-to-left
//! layouts reverse their definition list.
//!
//! All widths are `f64` logical pixels. No rounding happens here; see
//! [`SizingStyle::rounded`](crate::SizingStyle::rounded) for the one place
//! rounding is allowed.

use alloc::vec::Vec;

/// Default deliberate width for a column with no explicit options.
pub const DEFAULT_IDEAL_WIDTH: f64 = 150.0;

/// Default width floor for a column with no explicit options.
pub const DEFAULT_MIN_WIDTH: f64 = 100.0;

/// Default horizontal padding (cell padding and borders) per column.
pub const DEFAULT_PADDING: f64 = 16.0;

/// Sizing record for one column.
///
/// Invariant maintained by every function in this module:
/// `width >= min_width`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnWidthState<Id> {
    /// Stable identifier, unique within one table.
    pub column_id: Id,
    /// Current rendered width in logical pixels.
    pub width: f64,
    /// Floor below which the column is never shrunk.
    pub min_width: f64,
    /// The last deliberately requested width: what the column returns to
    /// when container space allows. Updated by explicit resizes, never by
    /// container-fit redistribution.
    pub ideal_width: f64,
    /// Extra horizontal space the column occupies besides `width`.
    pub padding: f64,
}

/// Per-column sizing configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnOptions {
    /// Width floor. Defaults to [`DEFAULT_MIN_WIDTH`].
    pub min_width: f64,
    /// Initial deliberate width. Defaults to [`DEFAULT_IDEAL_WIDTH`].
    pub ideal_width: f64,
    /// Horizontal padding. Defaults to [`DEFAULT_PADDING`].
    pub padding: f64,
}

impl Default for ColumnOptions {
    fn default() -> Self {
        Self {
            min_width: DEFAULT_MIN_WIDTH,
            ideal_width: DEFAULT_IDEAL_WIDTH,
            padding: DEFAULT_PADDING,
        }
    }
}

/// Sizing configuration for a whole table, keyed by column id.
///
/// Columns without an entry use [`ColumnOptions::default`].
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSizingOptions<Id> {
    /// Options per column id. Later entries for the same id win.
    pub per_column: Vec<(Id, ColumnOptions)>,
}

impl<Id> Default for ColumnSizingOptions<Id> {
    fn default() -> Self {
        Self {
            per_column: Vec::new(),
        }
    }
}

impl<Id: PartialEq> ColumnSizingOptions<Id> {
    /// Returns the configured options for `id`, or the defaults.
    #[must_use]
    pub fn options_for(&self, id: &Id) -> ColumnOptions {
        self.per_column
            .iter()
            .rev()
            .find(|(entry, _)| entry == id)
            .map(|(_, options)| *options)
            .unwrap_or_default()
    }
}

/// A structural limit hit while redistributing width.
///
/// These are returned from the mutation entry points rather than delivered
/// through callbacks; hosts interpret them to add or remove columns.
#[derive(Debug, Clone, PartialEq)]
pub enum SizingEvent<Id> {
    /// `id` sits at its minimum width while overflow remains; the host may
    /// want to hide a column to recover space.
    ColumnOverflow(Id),
    /// Dragging the last column has freed this many pixels of container
    /// space; the host may want to re-introduce a previously hidden column.
    SpaceAvailable(f64),
}

/// Reconciles an ordered definition list against previous state.
///
/// Records are preserved by id (keeping their current and ideal widths),
/// new ids are initialized from `options`, and ids absent from
/// `definitions` are dropped. Order follows `definitions`.
///
/// Returns `None` when the result would be identical to `previous`; callers
/// rely on this to skip downstream recomputation when nothing changed.
#[must_use]
pub fn columns_from_definitions<Id: Clone + PartialEq>(
    definitions: &[Id],
    previous: &[ColumnWidthState<Id>],
    options: &ColumnSizingOptions<Id>,
) -> Option<Vec<ColumnWidthState<Id>>> {
    let mut changed = definitions.len() != previous.len();
    let mut next = Vec::with_capacity(definitions.len());

    for (i, id) in definitions.iter().enumerate() {
        if let Some(existing) = previous.iter().find(|column| column.column_id == *id) {
            if previous.get(i).map(|column| &column.column_id) != Some(id) {
                changed = true;
            }
            next.push(existing.clone());
        } else {
            changed = true;
            let ColumnOptions {
                min_width,
                ideal_width,
                padding,
            } = options.options_for(id);
            next.push(ColumnWidthState {
                column_id: id.clone(),
                width: min_width,
                min_width,
                ideal_width,
                padding,
            });
        }
    }

    changed.then_some(next)
}

/// Total occupied width: `Σ (width + padding)`.
#[must_use]
pub fn total_width<Id>(state: &[ColumnWidthState<Id>]) -> f64 {
    state.iter().map(|column| column.width + column.padding).sum()
}

/// Looks up a column record by id.
#[must_use]
pub fn column_by_id<'a, Id: PartialEq>(
    state: &'a [ColumnWidthState<Id>],
    column_id: &Id,
) -> Option<&'a ColumnWidthState<Id>> {
    state.iter().find(|column| column.column_id == *column_id)
}

/// Returns the width of `column_id`, or `0.0` for an unknown id.
///
/// The zero fallback is deliberate: this query runs on render paths where a
/// transiently removed column must not turn into a panic.
#[must_use]
pub fn column_width<Id: PartialEq>(state: &[ColumnWidthState<Id>], column_id: &Id) -> f64 {
    column_by_id(state, column_id).map_or(0.0, |column| column.width)
}

/// Fits the columns to `container_width`, preserving proportions where it can.
///
/// - **Growing** (total < container): walks left to right giving each column
///   up to its ideal width; any slack left after the last column goes
///   entirely to the last column. A column sitting above its ideal (from an
///   earlier remainder dump) is pulled back toward it, and the reclaimed
///   width joins the slack.
/// - **Shrinking** (total > container): walks right to left reducing each
///   column toward its minimum until the overflow is absorbed. A column
///   pinned at its minimum cannot help and emits
///   [`SizingEvent::ColumnOverflow`] instead.
///
/// Calling this twice with the same `container_width` is a no-op the second
/// time.
pub fn adjust_to_fit<Id: Clone + PartialEq>(
    state: &mut [ColumnWidthState<Id>],
    container_width: f64,
    events: &mut Vec<SizingEvent<Id>>,
) {
    let total = total_width(state);

    if total < container_width {
        let mut slack = container_width - total;
        for i in 0..state.len() {
            if slack <= 0.0 {
                break;
            }
            let adjustment = (state[i].ideal_width - state[i].width).min(slack);
            state[i].width += adjustment;
            slack -= adjustment;

            // Every column is at its ideal and room remains: the last
            // column absorbs it.
            if i == state.len() - 1 && slack > 0.0 {
                state[i].width += slack;
                slack = 0.0;
            }
        }
    } else if total > container_width {
        let mut overflow = total - container_width;
        for i in (0..state.len()).rev() {
            if overflow <= 0.0 {
                break;
            }
            let column = &mut state[i];
            if column.width > column.min_width {
                let adjustment = (column.width - column.min_width).min(overflow);
                column.width -= adjustment;
                overflow -= adjustment;
            } else {
                events.push(SizingEvent::ColumnOverflow(column.column_id.clone()));
            }
        }
    }
}

/// Deliberately resizes one column, then refits to the container.
///
/// Requests below the column's `min_width` (and unknown ids) are rejected
/// as a silent no-op, matching the clamping contract: there is no error
/// surface for an unhonored width. An accepted width updates both `width`
/// and `ideal_width` — a deliberate resize is what the column should return
/// to when space allows.
///
/// Returns whether the request was applied. This is the single mutation
/// entry point for both pointer- and keyboard-driven resizing.
pub fn set_column_width<Id: Clone + PartialEq>(
    state: &mut [ColumnWidthState<Id>],
    column_id: &Id,
    new_width: f64,
    container_width: f64,
    events: &mut Vec<SizingEvent<Id>>,
) -> bool {
    let Some(column) = state
        .iter_mut()
        .find(|column| column.column_id == *column_id)
    else {
        return false;
    };
    if new_width < column.min_width {
        return false;
    }

    column.width = new_width;
    column.ideal_width = new_width;
    adjust_to_fit(state, container_width, events);
    true
}

/// Updates a column's ideal width without touching its current width.
///
/// The new ideal takes effect the next time width is redistributed.
pub fn set_column_ideal_width<Id: PartialEq>(
    state: &mut [ColumnWidthState<Id>],
    column_id: &Id,
    ideal_width: f64,
) {
    if let Some(column) = state
        .iter_mut()
        .find(|column| column.column_id == *column_id)
    {
        column.ideal_width = ideal_width;
    }
}

/// Recomputes every column from scratch against `available_width`.
///
/// Two passes: clamp everything to its minimum, then restore each column to
/// its ideal width in order while room remains (whole columns only — a
/// column that does not fully fit stays at its minimum). Any remainder goes
/// to the last column. Used on initial mount and structural changes.
pub fn reset_layout<Id>(state: &mut [ColumnWidthState<Id>], available_width: f64) {
    if state.is_empty() {
        return;
    }

    for column in state.iter_mut() {
        column.width = column.min_width;
    }

    let mut remaining = available_width - total_width(state);
    for column in state.iter_mut() {
        let growth = column.ideal_width - column.width;
        if growth > 0.0 && growth <= remaining {
            column.width = column.ideal_width;
            remaining -= growth;
        }
    }

    if remaining > 0.0 {
        if let Some(last) = state.last_mut() {
            last.width += remaining;
        }
    }
}
