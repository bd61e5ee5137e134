//! Tests for the envelope generator

mod wav_writer;

use float_cmp::approx_eq;
use more_asserts::assert_lt;

use subtractive_dsp::envelope::{Adsd, Stage};
use subtractive_dsp::Error;

fn render(envelope: &mut Adsd, length: usize) -> Vec<f32> {
    let mut out = vec![0.0; length];
    envelope.render(&mut out);
    out
}

fn assert_values(actual: &[f32], expected: &[f32]) {
    assert_eq!(actual.len(), expected.len());
    for (a, b) in actual.iter().zip(expected.iter()) {
        assert!(approx_eq!(f32, *a, *b, epsilon = 1e-6), "{actual:?} != {expected:?}");
    }
}

#[test]
fn idle_until_triggered() {
    let mut envelope = Adsd::new();
    assert_eq!(envelope.stage(), Stage::Idle);
    assert!(!envelope.is_active());
    assert_eq!(render(&mut envelope, 16), vec![0.0; 16]);

    // Release without a note does nothing.
    envelope.trigger_off();
    assert_eq!(envelope.stage(), Stage::Idle);
    assert_eq!(envelope.process_sample(), 0.0);
}

#[test]
fn zero_length_stages() {
    let mut envelope = Adsd::new();
    envelope.set_parameters(0, 0, 0.5, 0).unwrap();
    envelope.trigger_on();

    assert_eq!(envelope.process_sample(), 1.0);
    assert_eq!(envelope.process_sample(), 0.5);
    assert_eq!(envelope.stage(), Stage::Sustain);
    assert_eq!(render(&mut envelope, 8), vec![0.5; 8]);

    envelope.trigger_off();
    assert_eq!(envelope.stage(), Stage::Idle);
    assert_eq!(envelope.process_sample(), 0.0);
}

#[test]
fn linear_stages() {
    let mut envelope = Adsd::new();
    envelope.set_parameters(4, 2, 0.5, 4).unwrap();
    envelope.trigger_on();

    assert_eq!(envelope.stage(), Stage::Attack);
    assert_values(
        &render(&mut envelope, 9),
        &[0.0, 0.25, 0.5, 0.75, 1.0, 0.75, 0.5, 0.5, 0.5],
    );
    assert_eq!(envelope.stage(), Stage::Sustain);

    envelope.trigger_off();
    assert_eq!(envelope.stage(), Stage::Release);
    assert_values(&render(&mut envelope, 6), &[0.5, 0.375, 0.25, 0.125, 0.0, 0.0]);
    assert_eq!(envelope.stage(), Stage::Idle);
}

#[test]
fn release_reaches_zero_within_release_length() {
    let release = 100;
    let mut envelope = Adsd::new();
    envelope.set_parameters(10, 20, 0.7, release).unwrap();
    envelope.trigger_on();
    render(&mut envelope, 50);

    envelope.trigger_off();
    let out = render(&mut envelope, release + 1);
    assert!(approx_eq!(f32, out[0], 0.7, epsilon = 1e-6));
    for pair in out.windows(2).take(release - 1) {
        assert_lt!(pair[1], pair[0]);
    }
    assert_eq!(out[release], 0.0);
    assert!(!envelope.is_active());
}

#[test]
fn release_during_attack() {
    let mut envelope = Adsd::new();
    envelope.set_parameters(10, 10, 0.5, 2).unwrap();
    envelope.trigger_on();
    render(&mut envelope, 5);
    assert!(approx_eq!(f32, envelope.value(), 0.5, epsilon = 1e-6));

    envelope.trigger_off();
    assert_values(&render(&mut envelope, 3), &[0.5, 0.25, 0.0]);
    assert_eq!(envelope.stage(), Stage::Idle);
}

#[test]
fn retrigger_starts_from_current_value() {
    let mut envelope = Adsd::new();
    envelope.set_parameters(4, 4, 0.0, 8).unwrap();
    envelope.trigger_on();
    render(&mut envelope, 12);
    envelope.trigger_off();
    render(&mut envelope, 4);
    assert!(approx_eq!(f32, envelope.value(), 0.0, epsilon = 1e-6));

    envelope.set_parameters(4, 4, 0.5, 8).unwrap();
    envelope.trigger_on();
    render(&mut envelope, 2);
    envelope.trigger_off();
    let level = envelope.value();

    envelope.trigger_on();
    assert_values(
        &render(&mut envelope, 5),
        &[
            level,
            level + (1.0 - level) / 4.0,
            level + (1.0 - level) / 2.0,
            level + 3.0 * (1.0 - level) / 4.0,
            1.0,
        ],
    );
}

#[test]
fn invalid_sustain_level() {
    let mut envelope = Adsd::new();
    envelope.set_parameters(2, 2, 0.25, 2).unwrap();

    for level in [-0.1, 1.1, f32::NAN] {
        assert!(matches!(
            envelope.set_parameters(1, 1, level, 1),
            Err(Error::InvalidParameter { .. })
        ));
    }

    envelope.trigger_on();
    assert_values(&render(&mut envelope, 6), &[0.0, 0.5, 1.0, 0.625, 0.25, 0.25]);
}

#[test]
fn long_sustain() {
    let mut envelope = Adsd::new();
    envelope.set_parameters(1, 1, 0.5, 3).unwrap();
    envelope.trigger_on();
    render(&mut envelope, 2);

    let mut block = [0.0; 4096];
    for _ in 0..1000 {
        envelope.render(&mut block);
        assert!(block.iter().all(|v| *v == 0.5));
    }
    assert_eq!(envelope.stage(), Stage::Sustain);

    envelope.trigger_off();
    assert_values(&render(&mut envelope, 4), &[0.5, 1.0 / 3.0, 1.0 / 6.0, 0.0]);
}

#[test]
fn maximum_stage_lengths() {
    let mut envelope = Adsd::new();
    envelope
        .set_parameters(usize::MAX, usize::MAX, 0.5, usize::MAX)
        .unwrap();
    envelope.trigger_on();

    let out = render(&mut envelope, 64);
    assert_eq!(out[0], 0.0);
    assert_lt!(out[63], 1e-12);
    assert_eq!(envelope.stage(), Stage::Attack);

    envelope.trigger_off();
    render(&mut envelope, 64);
    assert_eq!(envelope.stage(), Stage::Release);
}

#[test]
fn envelope_shape() {
    let sample_rate = 48000.0;
    let mut envelope = Adsd::new();
    envelope.set_parameters(480, 4800, 0.6, 9600).unwrap();

    let mut wav_data = Vec::new();
    envelope.trigger_on();
    wav_data.extend(render(&mut envelope, 24000));
    envelope.trigger_off();
    wav_data.extend(render(&mut envelope, 12000));

    assert!(wav_data.iter().all(|v| (-1e-3..=1.0 + 1e-3).contains(v)));
    assert!(!envelope.is_active());
    wav_writer::write("envelope/adsd.wav", sample_rate, &wav_data).ok();
}
