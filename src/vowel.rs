//! Reference vowels and interpolation along a one-dimensional vowel path.
//!
//! The path runs through the five reference vowels in table order, so a
//! position of `0.0` is 'a' and `1.0` is 'u'. Interpolation is linear and
//! independent for frequency, amplitude and bandwidth of each formant slot.

use crate::formant::{Formant, FormantSet};

pub const NUM_VOWELS: usize = 5;

/// Reference vowel identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vowel {
    /// 'a' as in "father"
    A,
    /// 'e' as in "bed"
    E,
    /// 'i' as in "beet"
    I,
    /// 'o' as in "boat"
    O,
    /// 'u' as in "boot"
    U,
}

impl Vowel {
    /// Returns the reference formants of the vowel.
    pub fn formants(&self) -> &'static FormantSet {
        &VOWEL_PRESETS[self.index()].formants
    }

    /// Position of the vowel in the table.
    pub fn index(&self) -> usize {
        match self {
            Vowel::A => 0,
            Vowel::E => 1,
            Vowel::I => 2,
            Vowel::O => 3,
            Vowel::U => 4,
        }
    }

    /// Vowel position in `0.0..=1.0` that reproduces the reference exactly.
    pub fn position(&self) -> f32 {
        self.index() as f32 / (NUM_VOWELS - 1) as f32
    }
}

/// A formant set tagged with its vowel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VowelPreset {
    pub vowel: Vowel,
    pub formants: FormantSet,
}

impl VowelPreset {
    pub const fn new(vowel: Vowel, formants: FormantSet) -> Self {
        Self { vowel, formants }
    }
}

pub static VOWEL_PRESETS: [VowelPreset; NUM_VOWELS] = [
    VowelPreset::new(
        Vowel::A,
        [
            Formant::new(700.0, 1.0, 0.1),
            Formant::new(1220.0, 0.5, 0.1),
            Formant::new(2600.0, 0.16, 0.15),
            Formant::new(3300.0, 0.1, 0.2),
        ],
    ),
    VowelPreset::new(
        Vowel::E,
        [
            Formant::new(530.0, 1.0, 0.1),
            Formant::new(1840.0, 0.32, 0.15),
            Formant::new(2480.0, 0.2, 0.2),
            Formant::new(3520.0, 0.1, 0.2),
        ],
    ),
    VowelPreset::new(
        Vowel::I,
        [
            Formant::new(270.0, 1.0, 0.1),
            Formant::new(2290.0, 0.25, 0.2),
            Formant::new(3010.0, 0.16, 0.2),
            Formant::new(3300.0, 0.1, 0.2),
        ],
    ),
    VowelPreset::new(
        Vowel::O,
        [
            Formant::new(570.0, 1.0, 0.1),
            Formant::new(840.0, 0.63, 0.1),
            Formant::new(2410.0, 0.1, 0.2),
            Formant::new(3400.0, 0.05, 0.2),
        ],
    ),
    VowelPreset::new(
        Vowel::U,
        [
            Formant::new(300.0, 1.0, 0.1),
            Formant::new(870.0, 0.32, 0.1),
            Formant::new(2240.0, 0.08, 0.2),
            Formant::new(3400.0, 0.04, 0.2),
        ],
    ),
];

/// Returns the formants at `position` along the vowel path.
///
/// Positions outside `0.0..=1.0` are clamped, NaN maps to `0.0`.
pub fn formants_for_position(position: f32) -> FormantSet {
    let position = if position.is_nan() {
        0.0
    } else {
        position.clamp(0.0, 1.0)
    };

    let scaled = position * (NUM_VOWELS - 1) as f32;
    let lower_index = scaled as usize;
    let upper_index = usize::min(lower_index + 1, NUM_VOWELS - 1);
    let fraction = scaled - lower_index as f32;

    let lower = &VOWEL_PRESETS[lower_index].formants;
    let upper = &VOWEL_PRESETS[upper_index].formants;

    core::array::from_fn(|i| lower[i].lerp(&upper[i], fraction))
}
