//! Block processing of the formant voice.
//!
//! The host calls [`FmFormantProcessor::process`] once per block with one lane
//! per automatable control (see [`crate::params`]). Each lane holds either a
//! single value for the block or one value per sample. Formants whose lanes are
//! not supplied render from the processor's current formant set, which is
//! replaced by [`Command::SetTargetFormants`].

use crate::control::{Command, ControlReceiver, PendingUpdate};
use crate::formant::{Formant, FormantSet, DEFAULT_FORMANTS};
use crate::oscillator::harmonic_formant_oscillator::render_sample;
use crate::oscillator::phasor::Phasor;
use crate::params::{formant_parameter, FormantField, FREQUENCY, GAIN};
use crate::utils::parameter::{resolve, validate_lane};
use crate::{Error, SampleRate, NUM_FORMANTS};

/// Lowest fundamental used for synthesis, in Hz.
///
/// Lower, zero, negative and NaN fundamentals are raised to this value.
pub const MIN_FUNDAMENTAL_HZ: f32 = 1.0;

static DEFAULT_FREQUENCY_LANE: [f32; 1] = [FREQUENCY.default_value];
static DEFAULT_GAIN_LANE: [f32; 1] = [GAIN.default_value];

/// Automation lanes of one formant.
#[derive(Debug, Clone, Copy)]
pub struct FormantLanes<'a> {
    pub frequency: &'a [f32],
    pub amplitude: &'a [f32],
    pub bandwidth: &'a [f32],
}

impl<'a> FormantLanes<'a> {
    #[inline]
    pub fn resolve(&self, sample_index: usize) -> Formant {
        Formant {
            frequency: resolve(self.frequency, sample_index),
            amplitude: resolve(self.amplitude, sample_index),
            bandwidth: resolve(self.bandwidth, sample_index),
        }
    }

    fn validate(&self, index: usize, block_size: usize) -> Result<(), Error> {
        let lanes = [
            (FormantField::Frequency, self.frequency),
            (FormantField::Amplitude, self.amplitude),
            (FormantField::Bandwidth, self.bandwidth),
        ];

        for (field, values) in lanes {
            validate_lane(formant_parameter(index, field).name, values, block_size)?;
        }

        Ok(())
    }
}

/// Parameter lanes for one block.
#[derive(Debug, Clone, Copy)]
pub struct ProcessParameters<'a> {
    /// Fundamental frequency in Hz.
    pub frequency: &'a [f32],

    /// Output gain.
    pub gain: &'a [f32],

    /// `None` renders the formant from the current formant set.
    pub formants: [Option<FormantLanes<'a>>; NUM_FORMANTS],
}

impl Default for ProcessParameters<'_> {
    fn default() -> Self {
        Self {
            frequency: &DEFAULT_FREQUENCY_LANE,
            gain: &DEFAULT_GAIN_LANE,
            formants: [None; NUM_FORMANTS],
        }
    }
}

impl<'a> ProcessParameters<'a> {
    pub fn new(frequency: &'a [f32], gain: &'a [f32]) -> Self {
        Self {
            frequency,
            gain,
            formants: [None; NUM_FORMANTS],
        }
    }

    /// Checks every supplied lane against the block size.
    pub fn validate(&self, block_size: usize) -> Result<(), Error> {
        validate_lane(FREQUENCY.name, self.frequency, block_size)?;
        validate_lane(GAIN.name, self.gain, block_size)?;

        for (index, lanes) in self.formants.iter().enumerate() {
            if let Some(lanes) = lanes {
                lanes.validate(index, block_size)?;
            }
        }

        Ok(())
    }
}

/// State owned by the audio context, apart from the phase.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthState {
    pub active: bool,
    pub current_formants: FormantSet,

    /// Becomes `current_formants` at the next block boundary.
    pub pending_target_formants: Option<FormantSet>,
}

impl Default for SynthState {
    fn default() -> Self {
        Self {
            active: false,
            current_formants: DEFAULT_FORMANTS,
            pending_target_formants: None,
        }
    }
}

#[derive(Debug)]
pub struct FmFormantProcessor {
    sample_rate: SampleRate,
    phasor: Phasor,
    state: SynthState,
    control: Option<ControlReceiver>,
}

impl FmFormantProcessor {
    /// Creates an inactive processor without a control channel.
    ///
    /// Commands are then passed with [`FmFormantProcessor::apply`].
    pub fn new(sample_rate: SampleRate) -> Self {
        log::debug!("Formant processor at {} Hz", sample_rate.sample_rate_hz);

        Self {
            sample_rate,
            phasor: Phasor::new(),
            state: SynthState::default(),
            control: None,
        }
    }

    /// Creates an inactive processor polling `control` once per block.
    pub fn with_control(sample_rate: SampleRate, control: ControlReceiver) -> Self {
        let mut processor = Self::new(sample_rate);
        processor.control = Some(control);

        processor
    }

    /// Resets phase and state to the start-up defaults.
    pub fn init(&mut self) {
        self.phasor.init();
        self.state = SynthState::default();
    }

    /// Applies a command. Target formants take effect at the next block.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Activate(active) => self.state.active = active,
            Command::SetTargetFormants(formants) => {
                self.state.pending_target_formants = Some(formants)
            }
        }
    }

    pub fn is_active(&self) -> bool {
        self.state.active
    }

    pub fn current_formants(&self) -> &FormantSet {
        &self.state.current_formants
    }

    pub fn state(&self) -> &SynthState {
        &self.state
    }

    pub fn phase(&self) -> f32 {
        self.phasor.phase()
    }

    pub fn sample_rate(&self) -> &SampleRate {
        &self.sample_rate
    }

    /// Renders one block into `out`.
    ///
    /// Writes silence when inactive or when a lane does not fit the block.
    #[inline]
    pub fn process(&mut self, parameters: &ProcessParameters, out: &mut [f32]) -> Result<(), Error> {
        self.poll_control();

        if let Some(target_formants) = self.state.pending_target_formants.take() {
            self.state.current_formants = target_formants;
        }

        if let Err(error) = parameters.validate(out.len()) {
            out.fill(0.0);
            return Err(error);
        }

        if !self.state.active {
            out.fill(0.0);
            return Ok(());
        }

        for (index, out_sample) in out.iter_mut().enumerate() {
            let fundamental = clamp_fundamental(resolve(parameters.frequency, index));
            let gain = resolve(parameters.gain, index);

            let (phase, modulator) = self.phasor.advance(fundamental, &self.sample_rate);

            let mut sample = 0.0;

            for (lanes, current) in parameters
                .formants
                .iter()
                .zip(self.state.current_formants.iter())
            {
                let formant = match lanes {
                    Some(lanes) => lanes.resolve(index),
                    None => *current,
                };
                sample += render_sample(&formant, fundamental, phase, modulator);
            }

            sample *= gain;

            *out_sample = if sample.is_finite() { sample } else { 0.0 };
        }

        Ok(())
    }

    fn poll_control(&mut self) {
        let update = match &self.control {
            Some(control) => control.poll(),
            None => None,
        };

        if let Some(PendingUpdate {
            active,
            target_formants,
        }) = update
        {
            if let Some(active) = active {
                self.apply(Command::Activate(active));
            }
            if let Some(formants) = target_formants {
                self.apply(Command::SetTargetFormants(formants));
            }
        }
    }
}

#[inline]
fn clamp_fundamental(frequency: f32) -> f32 {
    if frequency >= MIN_FUNDAMENTAL_HZ {
        frequency
    } else {
        MIN_FUNDAMENTAL_HZ
    }
}
