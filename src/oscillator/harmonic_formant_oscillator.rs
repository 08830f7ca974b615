//! Formant approximation by two cross-faded, phase modulated harmonics.
//!
//! A formant frequency generally falls between two integer harmonics of the
//! fundamental. Both bracketing harmonics are rendered and blended by the
//! fractional part of the frequency ratio. Weights are assigned to the even
//! and the odd member of the pair, whichever of the two bracket values is
//! even.

use core::f32::consts::TAU;

use crate::formant::Formant;
use crate::utils::wrap;

#[allow(unused_imports)]
use num_traits::float::Float;

/// Harmonic pair bracketing a frequency ratio, with their blend weights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HarmonicCrossfade {
    pub even_harmonic: f32,
    pub odd_harmonic: f32,
    pub even_weight: f32,
    pub odd_weight: f32,
}

/// Largest ratio for which the bracketing harmonics are distinct in `f32`.
///
/// Declared parameter bounds stay far below it (5000 Hz over 1 Hz).
pub const MAX_TARGET_RATIO: f32 = 8_388_608.0;

/// Splits `target_ratio` (`>= 0.0`) into an even/odd harmonic pair.
///
/// The weights sum to 1. At an exact integer ratio the pair collapses to
/// that single harmonic with weight 1. Ratios above [`MAX_TARGET_RATIO`] are
/// clamped to it.
#[inline]
pub fn harmonic_crossfade(target_ratio: f32) -> HarmonicCrossfade {
    let target_ratio = target_ratio.min(MAX_TARGET_RATIO);
    let lower_harmonic = target_ratio.floor();
    let upper_harmonic = lower_harmonic + 1.0;
    let fraction = target_ratio - lower_harmonic;

    if lower_harmonic % 2.0 == 0.0 {
        HarmonicCrossfade {
            even_harmonic: lower_harmonic,
            odd_harmonic: upper_harmonic,
            even_weight: 1.0 - fraction,
            odd_weight: fraction,
        }
    } else {
        HarmonicCrossfade {
            even_harmonic: upper_harmonic,
            odd_harmonic: lower_harmonic,
            even_weight: fraction,
            odd_weight: 1.0 - fraction,
        }
    }
}

/// Renders one sample of `formant` for the given fundamental.
///
/// `phase` and `modulator` come from the shared phasor of the current
/// sample. `fundamental` is in Hz and must be positive. A target below the
/// fundamental blends harmonic 0 (a constant carrier phase, still modulated)
/// with harmonic 1. Ratios that are negative or not finite render silence.
/// A negative bandwidth renders as zero bandwidth.
#[inline]
pub fn render_sample(formant: &Formant, fundamental: f32, phase: f32, modulator: f32) -> f32 {
    let target_ratio = formant.frequency / fundamental;
    if !target_ratio.is_finite() || target_ratio < 0.0 {
        return 0.0;
    }

    let crossfade = harmonic_crossfade(target_ratio);

    // Negative bandwidths modulate like zero.
    let modulation = modulator * formant.bandwidth.max(0.0) * 2.0;

    let even_carrier = carrier(crossfade.even_harmonic, phase, modulation);
    let odd_carrier = carrier(crossfade.odd_harmonic, phase, modulation);

    formant.amplitude
        * (crossfade.even_weight * even_carrier + crossfade.odd_weight * odd_carrier)
}

// `modulation` is in radians.
#[inline]
fn carrier(harmonic: f32, phase: f32, modulation: f32) -> f32 {
    (TAU * wrap(harmonic * phase) + modulation).sin()
}
