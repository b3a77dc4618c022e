// Copyright 2026 the Ortho Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The axis label model.
//!
//! An [`AxisLabelModel`] is an ordered list of label values; insertion order
//! is display order along the axis. In a best-fit layout the axis populates
//! the model itself; otherwise the caller builds one and hands it over.

extern crate alloc;

use alloc::vec::Vec;

/// An ordered sequence of axis label values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisLabelModel {
    labels: Vec<f64>,
}

impl AxisLabelModel {
    /// Creates an empty model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a model from values already in display order.
    #[must_use]
    pub fn from_values(labels: Vec<f64>) -> Self {
        Self { labels }
    }

    /// Returns the number of labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the model holds no labels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the label value at `index`, or `None` out of range.
    #[must_use]
    pub fn label(&self, index: usize) -> Option<f64> {
        self.labels.get(index).copied()
    }

    /// Returns the labels in display order.
    #[must_use]
    pub fn labels(&self) -> &[f64] {
        &self.labels
    }

    /// Inserts `value` keeping ascending value order, and returns the index
    /// it landed at.
    pub fn add_label(&mut self, value: f64) -> usize {
        let index = self
            .labels
            .partition_point(|existing| *existing < value);
        self.labels.insert(index, value);
        index
    }

    /// Inserts `value` at `index` in display order.
    ///
    /// # Panics
    ///
    /// Panics when `index > len` (caller misuse, as with `Vec::insert`).
    pub fn insert_label(&mut self, index: usize, value: f64) {
        self.labels.insert(index, value);
    }

    /// Removes and returns the label at `index`.
    ///
    /// # Panics
    ///
    /// Panics when `index` is out of range.
    pub fn remove_label(&mut self, index: usize) -> f64 {
        self.labels.remove(index)
    }

    /// Removes all labels.
    pub fn clear(&mut self) {
        self.labels.clear();
    }

    /// Returns the first label, if any.
    #[must_use]
    pub fn first(&self) -> Option<f64> {
        self.labels.first().copied()
    }

    /// Returns the last label, if any.
    #[must_use]
    pub fn last(&self) -> Option<f64> {
        self.labels.last().copied()
    }
}
