//! Runs both smoothers inside a fixed-rate sampling loop.
//!
//! A constant input of 1.0 is fed at 10 Hz; watch the moving average climb
//! linearly and the exponential filter approach 1.0 asymptotically.
//!
//! Press Q or ESC to quit.

mod common;

use anyhow::Result;
use crossterm::event::{self, Event};
use smoothie::{ExponentialFilter, Filter, MovingAverageFilter};
use std::io::{Write, stdout};
use std::time::{Duration, Instant};

const PERIOD: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    let mut moving_average = MovingAverageFilter::from_period(10.0, 10.0)?;
    let mut exponential = ExponentialFilter::new(0.1)?;

    common::enter_terminal()?;
    let result = run(&mut moving_average, &mut exponential);
    common::cleanup_terminal();
    result
}

fn run(
    moving_average: &mut MovingAverageFilter,
    exponential: &mut ExponentialFilter,
) -> Result<()> {
    let mut next_tick = Instant::now();
    let mut k: u64 = 0;

    loop {
        let m = moving_average.apply(1.0);
        let e = exponential.apply(1.0);
        print!(
            "\r[{:>5}] MovingAverage: {:.4}  Exponential: {:.4}  (q to quit)",
            k, m, e
        );
        stdout().flush()?;
        k += 1;

        next_tick += PERIOD;
        loop {
            let timeout = next_tick.saturating_duration_since(Instant::now());
            if timeout.is_zero() {
                break;
            }
            if event::poll(timeout)?
                && let Event::Key(key_event) = event::read()?
                && common::is_quit_key(key_event.code)
            {
                return Ok(());
            }
        }
    }
}
