//! Filters a two-component stream (noisy sine and cosine) with one moving
//! average per component.

mod common;

use anyhow::Result;
use smoothie::{FilterConfig, MultiStreamFilter, Signal};

const SAMPLES: usize = 1000;

fn main() -> Result<()> {
    common::init_tracing();

    let mut y = common::noisy_wave(360.0, 0.0, 1);
    let mut z = common::noisy_wave(360.0, 0.25, 2);
    let mut filter =
        MultiStreamFilter::from_config(&FilterConfig::MovingAverage { window: 20 }, 2)?;

    println!("{:>6} {:>9} {:>9} {:>9} {:>9}", "k", "y", "z", "mavg y", "mavg z");
    for k in 0..SAMPLES {
        let sample = [y.next_sample(), z.next_sample()];
        let [fy, fz] = filter.apply_array(sample)?;
        if k % 20 == 0 {
            println!(
                "{:>6} {:>9.4} {:>9.4} {:>9.4} {:>9.4}",
                k, sample[0], sample[1], fy, fz
            );
        }
    }

    Ok(())
}
