// Copyright 2026 the Ortho Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pixel/value scale.
//!
//! A [`PixelScale`] is the bidirectional mapping between a pixel span and the
//! axis's value domain. It starts out unset; a layout pass supplies both
//! ranges before any mapping query is legal. The mapping can be linear or
//! logarithmic, and the logarithmic form is only accepted for strictly
//! positive value ranges.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// How axis values map onto pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ValueScale {
    /// Evenly spaced values.
    #[default]
    Linear,
    /// Base-10 logarithmic spacing. Only valid for positive value ranges.
    Logarithmic,
}

/// A bidirectional mapping between a pixel span and a value span.
///
/// The pixel range may be inverted (`p0 > p1`); vertical axes map the
/// minimum value to the larger pixel coordinate. The mapping is undefined
/// until both ranges have been set by a layout pass: querying an unset scale
/// is a caller error and asserts.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PixelScale {
    value_range: Option<(f64, f64)>,
    pixel_range: Option<(f64, f64)>,
    scale: ValueScale,
}

impl PixelScale {
    /// Creates an unset linear scale.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the scale type.
    #[must_use]
    pub fn scale_type(&self) -> ValueScale {
        self.scale
    }

    /// Sets the scale type.
    ///
    /// Switching to [`ValueScale::Logarithmic`] is rejected (the scale stays
    /// linear) when the current value range is known and not strictly
    /// positive. Returns whether the requested type is now in effect.
    pub fn set_scale_type(&mut self, scale: ValueScale) -> bool {
        if scale == ValueScale::Logarithmic
            && let Some((min, _)) = self.value_range
            && min <= 0.0
        {
            self.scale = ValueScale::Linear;
            return false;
        }
        self.scale = scale;
        true
    }

    /// Sets the value range. `min` and `max` are stored in the given order;
    /// callers normalize direction.
    ///
    /// A non-positive minimum demotes a logarithmic scale back to linear.
    pub fn set_value_range(&mut self, min: f64, max: f64) {
        self.value_range = Some((min, max));
        if self.scale == ValueScale::Logarithmic && min <= 0.0 {
            self.scale = ValueScale::Linear;
        }
    }

    /// Sets the pixel range. `p0` corresponds to the value minimum and may be
    /// the larger coordinate (inverted axes).
    pub fn set_pixel_range(&mut self, p0: f64, p1: f64) {
        self.pixel_range = Some((p0, p1));
    }

    /// Returns the value range, if set.
    #[must_use]
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.value_range
    }

    /// Returns the pixel range, if set.
    #[must_use]
    pub fn pixel_range(&self) -> Option<(f64, f64)> {
        self.pixel_range
    }

    /// Returns the absolute length of the pixel range, or `0.0` when unset.
    #[must_use]
    pub fn pixel_len(&self) -> f64 {
        match self.pixel_range {
            Some((p0, p1)) => (p1 - p0).abs(),
            None => 0.0,
        }
    }

    /// Whether both ranges are set and consistent with the scale type.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let Some((min, _max)) = self.value_range else {
            return false;
        };
        if self.pixel_range.is_none() {
            return false;
        }
        match self.scale {
            ValueScale::Linear => true,
            ValueScale::Logarithmic => min > 0.0,
        }
    }

    /// Maps a value into pixel space.
    ///
    /// A degenerate value range (min == max) maps everything to the midpoint
    /// of the pixel range, which centers a lone tick.
    ///
    /// # Panics
    ///
    /// Panics when the scale has not been populated by a layout pass.
    #[must_use]
    pub fn pixel_for(&self, value: f64) -> f64 {
        assert!(self.is_valid(), "pixel scale queried before layout");
        let (d0, d1) = self.value_range.expect("checked by is_valid");
        let (p0, p1) = self.pixel_range.expect("checked by is_valid");
        let t = match self.scale {
            ValueScale::Linear => {
                let denom = d1 - d0;
                if denom == 0.0 {
                    return 0.5 * (p0 + p1);
                }
                (value - d0) / denom
            }
            ValueScale::Logarithmic => {
                if value <= 0.0 {
                    return p0;
                }
                let ld0 = d0.log10();
                let ld1 = d1.log10();
                let denom = ld1 - ld0;
                if denom == 0.0 {
                    return 0.5 * (p0 + p1);
                }
                (value.log10() - ld0) / denom
            }
        };
        p0 + t * (p1 - p0)
    }

    /// Maps a pixel coordinate back into value space.
    ///
    /// # Panics
    ///
    /// Panics when the scale has not been populated by a layout pass.
    #[must_use]
    pub fn value_for(&self, pixel: f64) -> f64 {
        assert!(self.is_valid(), "pixel scale queried before layout");
        let (d0, d1) = self.value_range.expect("checked by is_valid");
        let (p0, p1) = self.pixel_range.expect("checked by is_valid");
        let denom = p1 - p0;
        if denom == 0.0 {
            return d0;
        }
        let t = (pixel - p0) / denom;
        match self.scale {
            ValueScale::Linear => d0 + t * (d1 - d0),
            ValueScale::Logarithmic => {
                let ld0 = d0.log10();
                let ld1 = d1.log10();
                10.0_f64.powf(ld0 + t * (ld1 - ld0))
            }
        }
    }
}

/// Rounds an interval up to a "nice" value: 1, 2, or 5 times a power of ten.
#[must_use]
pub(crate) fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    #[allow(
        clippy::cast_possible_truncation,
        reason = "tick magnitudes are far inside the i32 range"
    )]
    let base = 10.0_f64.powi(power.clamp(-300.0, 300.0) as i32);
    let error = step / base;
    let nice = if error > 5.0 {
        10.0
    } else if error > 2.0 {
        5.0
    } else if error > 1.0 {
        2.0
    } else {
        1.0
    };
    nice * base
}

/// Returns the next coarser nice step along the 1 → 2 → 5 → 10 chain.
#[must_use]
pub(crate) fn next_nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    #[allow(
        clippy::cast_possible_truncation,
        reason = "tick magnitudes are far inside the i32 range"
    )]
    let base = 10.0_f64.powi(power.clamp(-300.0, 300.0) as i32);
    let mantissa = step / base;
    if mantissa < 1.5 {
        2.0 * base
    } else if mantissa < 3.5 {
        5.0 * base
    } else {
        10.0 * base
    }
}
