// Copyright 2026 the Ortho Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick label formatting.
//!
//! Width estimation and drawing must agree on label text, so both go through
//! [`format_label`]. The fractional digit count is derived from the tick step
//! (enough digits to tell consecutive ticks apart) and capped by the
//! configured precision.

extern crate alloc;

use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::options::LabelNotation;

/// Returns the fractional digits needed to distinguish ticks `step` apart.
///
/// A step of `0.0` (unknown, e.g. model-provided labels) yields the cap.
#[must_use]
pub fn decimals_for_step(step: f64, precision: usize) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return precision;
    }
    let digits = -step.log10().floor();
    if digits <= 0.0 {
        return 0;
    }
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "guarded positive and capped by precision"
    )]
    let digits = digits.min(17.0) as usize;
    digits.min(precision)
}

/// Formats a tick value given the tick step and drawing options.
#[must_use]
pub fn format_label(value: f64, step: f64, precision: usize, notation: LabelNotation) -> String {
    if !value.is_finite() {
        return alloc::format!("{value}");
    }
    let decimals = decimals_for_step(step, precision);
    match notation {
        LabelNotation::Standard => alloc::format!("{value:.decimals$}"),
        LabelNotation::Scientific => alloc::format!("{value:.decimals$e}"),
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn integral_steps_format_without_decimals() {
        assert_eq!(format_label(20.0, 20.0, 2, LabelNotation::Standard), "20");
        assert_eq!(format_label(100.0, 10.0, 2, LabelNotation::Standard), "100");
        assert_eq!(format_label(-40.0, 20.0, 2, LabelNotation::Standard), "-40");
    }

    #[test]
    fn fractional_steps_get_just_enough_decimals() {
        assert_eq!(format_label(0.4, 0.2, 2, LabelNotation::Standard), "0.4");
        assert_eq!(format_label(0.25, 0.05, 3, LabelNotation::Standard), "0.25");
    }

    #[test]
    fn precision_caps_the_decimals() {
        assert_eq!(format_label(0.125, 0.005, 1, LabelNotation::Standard), "0.1");
        assert_eq!(decimals_for_step(0.0, 2), 2);
    }

    #[test]
    fn scientific_notation_uses_exponent_form() {
        assert_eq!(
            format_label(10000.0, 10000.0, 2, LabelNotation::Scientific),
            "1e4"
        );
    }
}
