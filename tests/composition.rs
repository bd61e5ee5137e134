//! Tests chaining oscillators, filters and envelopes

mod wav_writer;

use more_asserts::{assert_gt, assert_le, assert_lt};

use subtractive_dsp::envelope::Adsd;
use subtractive_dsp::filter::moog_low_alias::MoogLowAlias;
use subtractive_dsp::filter::pole_zero::PoleZero;
use subtractive_dsp::filter::Filter;
use subtractive_dsp::oscillator::sawtooth_blit::SawtoothBlit;
use subtractive_dsp::oscillator::square_blit::SquareBlit;
use subtractive_dsp::oscillator::Oscillator;
use subtractive_dsp::SampleRate;

const SAMPLE_RATE: f32 = 48000.0;

#[test]
fn sawtooth_through_pole_zero() {
    let sr = SampleRate::new(SAMPLE_RATE).unwrap();
    let mut osc = SawtoothBlit::with_post_filter(sr, false).unwrap();
    let mut filter = PoleZero::new(sr);
    osc.set_frequency(1000.0).unwrap();
    filter.set_cutoff_hz(12000.0, 0.0).unwrap();

    let mut input = [0.0; 48];
    osc.render(&mut input);
    let mut output = input;
    filter.process_buffer(&mut output);

    let input_peak = input.iter().fold(0.0f32, |acc, x| acc.max(x.abs()));
    let output_peak = output.iter().fold(0.0f32, |acc, y| acc.max(y.abs()));
    let difference: f32 = input
        .iter()
        .zip(output.iter())
        .map(|(x, y)| (x - y).abs())
        .sum();

    assert_gt!(difference, 0.0);
    assert_le!(output_peak, input_peak);
}

#[test]
fn voice() {
    let sr = SampleRate::new(SAMPLE_RATE).unwrap();
    let mut osc: Box<dyn Oscillator> = Box::new(SquareBlit::new(sr).unwrap());
    let mut filter: Box<dyn Filter> = Box::new(MoogLowAlias::new(sr));
    let mut envelope = Adsd::new();

    osc.set_frequency(110.0).unwrap();
    filter.set_cutoff_hz(800.0, 3.0).unwrap();
    envelope.set_parameters(240, 4800, 0.5, 12000).unwrap();

    let mut wav_data = Vec::new();
    envelope.trigger_on();
    for n in 0..72000 {
        if n == 36000 {
            envelope.trigger_off();
        }
        let sample = filter.process_sample(osc.process_sample()) * envelope.process_sample();
        wav_data.push(sample);
    }

    assert!(wav_data.iter().all(|y| y.is_finite() && y.abs() < 1.0));
    let loud = wav_data[..36000].iter().fold(0.0f32, |acc, y| acc.max(y.abs()));
    assert_gt!(loud, 0.01);
    for sample in wav_data[48000..].iter() {
        assert_lt!(sample.abs(), 1e-9);
    }
    assert!(!envelope.is_active());

    wav_writer::write("composition/voice.wav", SAMPLE_RATE, &wav_data).ok();
}
