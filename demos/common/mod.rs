//! Common utilities for the demo programs.

use anyhow::Result;
use crossterm::{
    ExecutableCommand,
    event::KeyCode,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use smoothie::{Add, SignalExt, SineWave, WhiteNoise};
use std::io::stdout;
use std::panic;

/// Noise level used by every demo signal, matching a typical cheap sensor.
#[allow(dead_code)]
pub const NOISE_AMPLITUDE: f64 = 0.2;

/// Installs a `fmt` subscriber so filter construction logs show up with
/// `RUST_LOG=smoothie=debug`.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// A sine wave of one cycle per `period` samples with seeded uniform noise.
#[allow(dead_code)]
pub fn noisy_wave(period: f64, phase: f64, seed: u64) -> Add<SineWave, WhiteNoise<StdRng>> {
    SineWave::new(1.0, period)
        .with_phase(phase)
        .plus(WhiteNoise::with_rng(NOISE_AMPLITUDE, StdRng::seed_from_u64(seed)))
}

/// Switches the terminal into raw mode on the alternate screen and restores
/// it on panic.
#[allow(dead_code)]
pub fn enter_terminal() -> Result<()> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(crossterm::cursor::Hide)?;

    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        cleanup_terminal();
        original_hook(panic_info);
    }));
    Ok(())
}

/// Cleans up terminal state (cursor, alternate screen, raw mode).
#[allow(dead_code)]
pub fn cleanup_terminal() {
    let _ = stdout().execute(crossterm::cursor::Show);
    let _ = stdout().execute(LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

/// Helper to check if a key code is a quit key (Q, ESC).
#[allow(dead_code)]
pub fn is_quit_key(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
}
