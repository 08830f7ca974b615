//! Formant voice with MIDI control.
//!
//! - Note on/off: activates and mutes the voice, the note sets the pitch.
//! - CC 21: vowel position from 'a' to 'u'.
//! - CC 22: output gain.

use audio_midi_shell::{AudioGenerator, AudioMidiShell};
use simple_logger::SimpleLogger;

use fm_formant_dsp::control::{self, Command, ControlSender};
use fm_formant_dsp::processor::{FmFormantProcessor, ProcessParameters};
use fm_formant_dsp::vowel::formants_for_position;
use fm_formant_dsp::{params, SampleRate};

const SAMPLE_RATE: u32 = 48000;
const BLOCK_SIZE: usize = 32;

fn main() -> ! {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Debug)
        .init()
        .unwrap();

    AudioMidiShell::run_forever(SAMPLE_RATE, BLOCK_SIZE, App::new());
}

#[derive(Debug)]
struct App {
    processor: FmFormantProcessor,
    control: ControlSender,
    frequency: f32,
    gain: f32,
    note: Option<u8>,
}

impl App {
    pub fn new() -> Self {
        let (control, receiver) = control::channel();

        Self {
            processor: FmFormantProcessor::with_control(
                SampleRate::new(SAMPLE_RATE as f32),
                receiver,
            ),
            control,
            frequency: params::FREQUENCY.default_value,
            gain: params::GAIN.default_value,
            note: None,
        }
    }
}

impl AudioGenerator for App {
    fn init(&mut self, _block_size: usize) {
        self.processor.init();
        self.control
            .send(Command::SetTargetFormants(formants_for_position(0.0)));
    }

    fn process(&mut self, samples_left: &mut [f32], samples_right: &mut [f32]) {
        let frequency = [self.frequency];
        let gain = [self.gain];
        let parameters = ProcessParameters::new(&frequency, &gain);

        if let Err(error) = self.processor.process(&parameters, samples_left) {
            log::error!("{error}");
        }

        samples_right.copy_from_slice(samples_left);
    }

    fn process_midi(&mut self, message: Vec<u8>) {
        match message[0] & 0xF0 {
            0x80 => {
                // Note off
                if self.note == Some(message[1]) {
                    self.note = None;
                    self.control.send(Command::Activate(false));
                }
                log::info!("Note off: {}", message[1]);
            }
            0x90 if message[2] != 0 => {
                // Note on
                self.note = Some(message[1]);
                self.frequency = params::FREQUENCY
                    .clamp(440.0 * 2.0_f32.powf((message[1] as f32 - 69.0) / 12.0));
                self.control.send(Command::Activate(true));
                log::info!("Note on: {} ({:.1} Hz)", message[1], self.frequency);
            }
            0xB0 => {
                // Control change
                let value = message[2] as f32 / 127.0;
                match message[1] {
                    21 => {
                        self.control
                            .send(Command::SetTargetFormants(formants_for_position(value)));
                        log::info!("Vowel: {}", value);
                    }
                    22 => {
                        self.gain = params::GAIN.clamp(value);
                        log::info!("Gain: {}", self.gain);
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    }
}
