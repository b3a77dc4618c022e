// Copyright 2026 the Ortho Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pending axis notifications.
//!
//! Instead of delivering callbacks, the axis records what happened and the
//! owning chart container drains the record after mutating or laying out its
//! axes. Three kinds are kept distinct on purpose:
//!
//! - `layout_needed`: cached layout geometry is stale; a new layout pass is
//!   required before drawing or querying positions.
//! - `repaint_needed`: appearance changed without changing geometry.
//! - `pixel_scale_changed`: the published pixel/value mapping moved. This is
//!   raised only from inside the layout pass, and subscribers must not run
//!   another layout in response (coupled axes would otherwise ping-pong);
//!   dependents should instead flag their own data for refresh.

/// A record of pending axis notifications.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Notifications {
    /// The cached layout is stale and must be recomputed.
    pub layout_needed: bool,
    /// Appearance changed; geometry did not.
    pub repaint_needed: bool,
    /// The pixel/value scale was republished with different values.
    pub pixel_scale_changed: bool,
}

impl Notifications {
    /// No pending notifications.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Whether anything is pending.
    #[must_use]
    pub fn any(&self) -> bool {
        self.layout_needed || self.repaint_needed || self.pixel_scale_changed
    }

    /// Folds `other` into `self`.
    pub fn merge(&mut self, other: Self) {
        self.layout_needed |= other.layout_needed;
        self.repaint_needed |= other.repaint_needed;
        self.pixel_scale_changed |= other.pixel_scale_changed;
    }

    /// Returns the pending record and clears it.
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }
}
