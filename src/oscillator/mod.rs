//! Oscillators of the formant voice.

pub mod harmonic_formant_oscillator;
pub mod phasor;
