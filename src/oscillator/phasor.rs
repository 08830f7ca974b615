//! Shared phase accumulator driving every formant of a voice.

use crate::utils::{sine, wrap};
use crate::SampleRate;

#[derive(Debug, Default)]
pub struct Phasor {
    // Normalized phase in 0.0..1.0.
    phase: f32,
}

impl Phasor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(&mut self) {
        self.phase = 0.0;
    }

    #[inline]
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Advances the phase by one sample of `frequency` Hz.
    ///
    /// Returns the new phase and the modulator value `sin(2π · phase)`.
    /// A frequency of `0.0` holds the phase.
    #[inline]
    pub fn advance(&mut self, frequency: f32, sample_rate: &SampleRate) -> (f32, f32) {
        let mut increment = sample_rate.normalize(frequency);
        if !increment.is_finite() {
            increment = 0.0;
        }

        self.phase = wrap(self.phase + increment);

        (self.phase, sine(self.phase))
    }
}
