#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod control;
pub mod error;
pub mod formant;
pub mod oscillator;
pub mod params;
pub mod processor;
pub mod utils;
pub mod vowel;

pub use error::Error;

/// Number of formants rendered by the processor.
pub const NUM_FORMANTS: usize = 4;

/// Sample rate context for DSP calculations.
#[derive(Debug, Clone, Copy)]
pub struct SampleRate {
    /// Sample rate in Hz
    pub sample_rate_hz: f32,
    /// Reciprocal of sample rate (1.0 / sample_rate_hz) for fast multiplication
    pub inv_sr: f32,
}

impl SampleRate {
    /// Create a new sample rate context.
    pub fn new(sample_rate_hz: f32) -> Self {
        Self {
            sample_rate_hz,
            inv_sr: 1.0 / sample_rate_hz,
        }
    }

    /// Converts a frequency in Hz to cycles per sample.
    #[inline]
    pub fn normalize(&self, frequency_hz: f32) -> f32 {
        frequency_hz * self.inv_sr
    }
}
