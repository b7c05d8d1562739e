//! Smooths a noisy sine wave with a moving average and an exponential filter.
//!
//! Prints every 10th sample as a table so the lag and noise rejection of the
//! two smoothers can be compared side by side.

mod common;

use anyhow::Result;
use smoothie::{ExponentialFilter, Filter, MovingAverageFilter, Signal};

const SAMPLES: usize = 720;

fn main() -> Result<()> {
    common::init_tracing();

    // One cycle every 360 samples
    let mut input = common::noisy_wave(360.0, 0.0, 42);
    let mut moving_average = MovingAverageFilter::new(50)?;
    let mut exponential = ExponentialFilter::new(0.1)?;

    println!("{:>6} {:>9} {:>9} {:>9}", "k", "input", "mavg", "exp");
    for k in 0..SAMPLES {
        let x = input.next_sample();
        let m = moving_average.apply(x);
        let e = exponential.apply(x);
        if k % 10 == 0 {
            println!("{:>6} {:>9.4} {:>9.4} {:>9.4}", k, x, m, e);
        }
    }

    Ok(())
}
