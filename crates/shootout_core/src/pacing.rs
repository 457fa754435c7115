//! Commentary pacing.
//!
//! Each announcement is preceded by a short dramatic pause. Pauses are the
//! base delay of the [`Beat`] divided by the speed modifier, so a speed of
//! 2.0 halves every wait and 0.5 doubles it. Pacing never affects outcomes.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::error::{ConfigIssue, Result};

/// The moments in a shootout that get a pause before them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Beat {
    /// Shooter walks up to the spot
    StepUp,
    /// Run-up and strike
    Kick,
    MatchStart,
    /// After the last regulation kick
    RegulationEnd,
    /// Before the first sudden-death pair
    SuddenDeath,
    /// After the deciding sudden-death pair
    SuddenDeathDecided,
}

impl Beat {
    /// Delay at speed 1.0
    pub const fn base_delay(self) -> Duration {
        match self {
            Beat::StepUp => Duration::from_millis(600),
            Beat::Kick => Duration::from_millis(1000),
            Beat::MatchStart => Duration::from_millis(1000),
            Beat::RegulationEnd => Duration::from_millis(500),
            Beat::SuddenDeath => Duration::from_millis(300),
            Beat::SuddenDeathDecided => Duration::from_millis(1500),
        }
    }
}

/// Check a speed modifier: it must be finite and strictly positive.
pub fn validate_speed(speed: f64) -> Result<()> {
    if speed.is_finite() && speed > 0.0 {
        Ok(())
    } else {
        Err(ConfigIssue::Speed(speed).into())
    }
}

/// `base_delay / speed`, saturating at `Duration::MAX` for absurdly slow speeds.
pub fn scaled_delay(base_delay: Duration, speed: f64) -> Result<Duration> {
    validate_speed(speed)?;
    Ok(Duration::try_from_secs_f64(base_delay.as_secs_f64() / speed).unwrap_or(Duration::MAX))
}

/// Block the calling thread for `base_delay / speed`.
pub fn wait(base_delay: Duration, speed: f64) -> Result<()> {
    let delay = scaled_delay(base_delay, speed)?;
    if !delay.is_zero() {
        thread::sleep(delay);
    }
    Ok(())
}

/// Paces the commentary of one tournament run.
///
/// Cloning shares the skip flag, so a [`SkipHandle`] taken from any clone
/// fast-forwards them all.
#[derive(Debug, Clone)]
pub struct Pacer {
    speed: f64,
    /// Set once the viewer asked to skip the remaining pauses
    skipped: Arc<AtomicBool>,
    sleeps: bool,
}

impl Pacer {
    pub fn new(speed: f64) -> Result<Self> {
        validate_speed(speed)?;
        Ok(Self {
            speed,
            skipped: Arc::new(AtomicBool::new(false)),
            sleeps: true,
        })
    }

    /// A pacer that never sleeps (tests, batch runs)
    pub fn instant() -> Self {
        Self {
            speed: 1.0,
            skipped: Arc::new(AtomicBool::new(false)),
            sleeps: false,
        }
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// How long `wait(beat)` would block, ignoring the skip flag
    pub fn delay_for(&self, beat: Beat) -> Duration {
        if !self.sleeps {
            return Duration::ZERO;
        }
        // speed was validated on construction
        scaled_delay(beat.base_delay(), self.speed).unwrap_or(Duration::ZERO)
    }

    /// Pause before announcing `beat`. Returns immediately once skipped.
    pub fn wait(&self, beat: Beat) {
        if self.is_skipped() {
            return;
        }
        let delay = self.delay_for(beat);
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }

    #[inline]
    pub fn is_skipped(&self) -> bool {
        self.skipped.load(Ordering::Relaxed)
    }

    /// Handle that can fast-forward this pacer from elsewhere
    pub fn skip_handle(&self) -> SkipHandle {
        SkipHandle {
            skipped: Arc::clone(&self.skipped),
        }
    }
}

/// Cancels the remaining pauses of a [`Pacer`]
#[derive(Debug, Clone)]
pub struct SkipHandle {
    skipped: Arc<AtomicBool>,
}

impl SkipHandle {
    pub fn skip(&self) {
        self.skipped.store(true, Ordering::SeqCst);
    }

    pub fn is_skipped(&self) -> bool {
        self.skipped.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
#[path = "pacing_tests.rs"]
mod pacing_tests;
