//! Tests for the control channel

use fm_formant_dsp::control::{channel, Command, PendingUpdate};
use fm_formant_dsp::vowel::Vowel;

#[test]
fn empty_channel_polls_nothing() {
    let (_sender, receiver) = channel();

    assert_eq!(receiver.poll(), None);
}

#[test]
fn poll_takes_the_update() {
    let (sender, receiver) = channel();

    sender.send(Command::Activate(true));

    assert_eq!(
        receiver.poll(),
        Some(PendingUpdate {
            active: Some(true),
            target_formants: None,
        })
    );
    assert_eq!(receiver.poll(), None);
}

#[test]
fn updates_coalesce_to_latest_values() {
    let (sender, receiver) = channel();

    sender.send(Command::SetTargetFormants(*Vowel::E.formants()));
    sender.send(Command::Activate(true));
    sender.send(Command::SetTargetFormants(*Vowel::O.formants()));
    sender.send(Command::Activate(false));

    let update = receiver.poll().unwrap();
    assert_eq!(update.active, Some(false));
    assert_eq!(update.target_formants, Some(*Vowel::O.formants()));
}

#[test]
fn sender_on_another_thread() {
    let (sender, receiver) = channel();

    let handle = std::thread::spawn(move || {
        sender.send(Command::SetTargetFormants(*Vowel::I.formants()));
        sender.send(Command::Activate(true));
    });
    handle.join().unwrap();

    let update = receiver.poll().unwrap();
    assert_eq!(update.active, Some(true));
    assert_eq!(update.target_formants, Some(*Vowel::I.formants()));
}

#[test]
fn pending_update_push() {
    let mut update = PendingUpdate::default();
    assert!(update.is_empty());

    update.push(Command::Activate(true));
    assert!(!update.is_empty());
    assert_eq!(update.target_formants, None);
}
