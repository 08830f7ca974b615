//! Formant description shared by the synthesizer, the vowel table and the
//! control channel.

use crate::utils::crossfade;
use crate::NUM_FORMANTS;

/// One resonance to approximate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Formant {
    /// Center frequency in Hz.
    pub frequency: f32,

    /// Linear gain, `>= 0.0`.
    pub amplitude: f32,

    /// Modulation depth control. The FM index is twice this value.
    pub bandwidth: f32,
}

impl Formant {
    pub const fn new(frequency: f32, amplitude: f32, bandwidth: f32) -> Self {
        Self {
            frequency,
            amplitude,
            bandwidth,
        }
    }

    /// Linear interpolation of all three fields towards `other`.
    #[inline]
    pub fn lerp(&self, other: &Formant, fraction: f32) -> Formant {
        Formant {
            frequency: crossfade(self.frequency, other.frequency, fraction),
            amplitude: crossfade(self.amplitude, other.amplitude, fraction),
            bandwidth: crossfade(self.bandwidth, other.bandwidth, fraction),
        }
    }
}

/// Formants ordered from low to high center frequency.
pub type FormantSet = [Formant; NUM_FORMANTS];

/// Formants a processor starts with.
pub const DEFAULT_FORMANTS: FormantSet = [
    Formant::new(700.0, 1.0, 0.1),
    Formant::new(1220.0, 0.6, 0.1),
    Formant::new(2600.0, 0.3, 0.1),
    Formant::new(3300.0, 0.1, 0.1),
];
