//! Repeating timers with a fixed period

use std::time::Duration;

/// Fires every `period` of accumulated time
#[derive(Debug, Clone)]
pub struct RepeatingTimer {
    period: Duration,
    elapsed: Duration,
}

impl RepeatingTimer {
    pub fn new(period: Duration) -> Self {
        // Zero periods would fire forever in a single advance
        let period = period.max(Duration::from_millis(1));
        Self {
            period,
            elapsed: Duration::ZERO,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Accumulate `dt` and return how many times the timer fired
    pub fn advance(&mut self, dt: Duration) -> u32 {
        self.elapsed += dt;
        let mut fired = 0;
        while self.elapsed >= self.period {
            self.elapsed -= self.period;
            fired += 1;
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_on_period() {
        let mut timer = RepeatingTimer::new(Duration::from_millis(200));
        assert_eq!(timer.advance(Duration::from_millis(150)), 0);
        assert_eq!(timer.advance(Duration::from_millis(50)), 1);
        assert_eq!(timer.advance(Duration::from_millis(450)), 2);
        assert_eq!(timer.advance(Duration::from_millis(150)), 1);
    }

    #[test]
    fn test_sixty_frames_make_one_second() {
        let mut timer = RepeatingTimer::new(Duration::from_secs(1));
        let fired: u32 = (0..60)
            .map(|_| timer.advance(crate::consts::FRAME_DT))
            .sum();
        assert_eq!(fired, 1);
    }
}
