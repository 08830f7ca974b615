//! Utility functions.

pub mod parameter;

#[allow(unused_imports)]
use num_traits::float::Float;

#[inline]
pub fn crossfade(a: f32, b: f32, fade: f32) -> f32 {
    a + (b - a) * fade
}

/// Wraps a phase into `0.0..1.0`, negative phases included.
#[inline]
pub fn wrap(phase: f32) -> f32 {
    let wrapped = phase - phase.floor();

    // A tiny negative phase rounds up to exactly 1.0.
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}

#[inline]
pub fn sine(phase: f32) -> f32 {
    (core::f32::consts::TAU * phase).sin()
}
