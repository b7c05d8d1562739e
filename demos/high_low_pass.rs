//! Splits a noisy sine wave into low- and high-frequency parts.
//!
//! Writes `highlowpass.wav`, a 3-channel float WAV holding the input, the
//! low-pass output and the high-pass output, for inspection in any audio or
//! plotting tool.

mod common;

use anyhow::Result;
use smoothie::{Filter, HighPassFilter, LowPassFilter, Signal};

const SAMPLES: usize = 5000;
const SAMPLE_RATE: u32 = 1000;

fn main() -> Result<()> {
    common::init_tracing();

    let dt = 1.0 / SAMPLE_RATE as f64;
    let mut input = common::noisy_wave(72.0, 0.0, 7);
    let mut low_pass = LowPassFilter::new(0.01, dt)?;
    let mut high_pass = HighPassFilter::new(0.01, dt)?;

    let spec = hound::WavSpec {
        channels: 3,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let path = "highlowpass.wav";
    let mut writer = hound::WavWriter::create(path, spec)?;

    for _ in 0..SAMPLES {
        let x = input.next_sample();
        writer.write_sample(x as f32)?;
        writer.write_sample(low_pass.apply(x) as f32)?;
        writer.write_sample(high_pass.apply(x) as f32)?;
    }
    writer.finalize()?;

    println!(
        "Wrote {} frames to {} (low-pass c = {:.4}, high-pass c = {:.4})",
        SAMPLES,
        path,
        low_pass.constant(),
        high_pass.constant()
    );
    Ok(())
}
