//! Host-facing parameter surface.
//!
//! Every synthesis input is exposed as one automatable control. Hosts register
//! [`PARAMETERS`] and feed the matching lanes to the processor. Bounds are
//! declared here and enforced by the host; the processor only guards against
//! values that would break the math.

use crate::formant::DEFAULT_FORMANTS;
use crate::NUM_FORMANTS;

/// Update rate of a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutomationRate {
    /// One value per output sample.
    ARate,

    /// One value per block.
    KRate,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterDescriptor {
    pub name: &'static str,
    pub default_value: f32,
    pub min_value: f32,
    pub max_value: f32,
    pub automation_rate: AutomationRate,
}

impl ParameterDescriptor {
    const fn a_rate(name: &'static str, default_value: f32, min_value: f32, max_value: f32) -> Self {
        Self {
            name,
            default_value,
            min_value,
            max_value,
            automation_rate: AutomationRate::ARate,
        }
    }

    /// Limits `value` to the declared bounds. NaN maps to the default.
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            self.default_value
        } else {
            value.clamp(self.min_value, self.max_value)
        }
    }
}

/// Field of a formant exposed as a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormantField {
    Frequency,
    Amplitude,
    Bandwidth,
}

impl FormantField {
    fn offset(&self) -> usize {
        match self {
            FormantField::Frequency => 0,
            FormantField::Amplitude => 1,
            FormantField::Bandwidth => 2,
        }
    }
}

pub const NUM_PARAMETERS: usize = 2 + 3 * NUM_FORMANTS;

pub const FREQUENCY: ParameterDescriptor =
    ParameterDescriptor::a_rate("frequency", 220.0, 20.0, 20000.0);

pub const GAIN: ParameterDescriptor = ParameterDescriptor::a_rate("gain", 0.1, 0.0, 1.0);

pub static PARAMETERS: [ParameterDescriptor; NUM_PARAMETERS] = [
    FREQUENCY,
    GAIN,
    ParameterDescriptor::a_rate("formant0_freq", DEFAULT_FORMANTS[0].frequency, 50.0, 5000.0),
    ParameterDescriptor::a_rate("formant0_amp", DEFAULT_FORMANTS[0].amplitude, 0.0, 1.0),
    ParameterDescriptor::a_rate("formant0_bw", DEFAULT_FORMANTS[0].bandwidth, 0.01, 0.5),
    ParameterDescriptor::a_rate("formant1_freq", DEFAULT_FORMANTS[1].frequency, 50.0, 5000.0),
    ParameterDescriptor::a_rate("formant1_amp", DEFAULT_FORMANTS[1].amplitude, 0.0, 1.0),
    ParameterDescriptor::a_rate("formant1_bw", DEFAULT_FORMANTS[1].bandwidth, 0.01, 0.5),
    ParameterDescriptor::a_rate("formant2_freq", DEFAULT_FORMANTS[2].frequency, 50.0, 5000.0),
    ParameterDescriptor::a_rate("formant2_amp", DEFAULT_FORMANTS[2].amplitude, 0.0, 1.0),
    ParameterDescriptor::a_rate("formant2_bw", DEFAULT_FORMANTS[2].bandwidth, 0.01, 0.5),
    ParameterDescriptor::a_rate("formant3_freq", DEFAULT_FORMANTS[3].frequency, 50.0, 5000.0),
    ParameterDescriptor::a_rate("formant3_amp", DEFAULT_FORMANTS[3].amplitude, 0.0, 1.0),
    ParameterDescriptor::a_rate("formant3_bw", DEFAULT_FORMANTS[3].bandwidth, 0.01, 0.5),
];

/// Returns the descriptor of one field of formant `index`.
///
/// # Panics
///
/// Panics if `index >= NUM_FORMANTS`.
pub fn formant_parameter(index: usize, field: FormantField) -> &'static ParameterDescriptor {
    assert!(index < NUM_FORMANTS);
    &PARAMETERS[2 + 3 * index + field.offset()]
}

/// Looks up a descriptor by its host name.
pub fn find(name: &str) -> Option<&'static ParameterDescriptor> {
    PARAMETERS.iter().find(|descriptor| descriptor.name == name)
}
