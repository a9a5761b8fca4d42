// SPDX-License-Identifier: MPL-2.0
//! Slide-in banner state machine.
//!
//! A banner enters from the right screen edge, rests at its final position,
//! then leaves the way it came:
//!
//! ```text
//! SlidingIn --(x <= final_x)--> Dwelling --(dwell timeout)--> SlidingOut --(x >= screen_width)--> Closed
//!     \______________________________\_____________________________\___(close control)___/
//! ```
//!
//! The machine owns the position; the caller only feeds it ticks and the
//! dwell timeout, and moves the window to whatever [`Step`] reports.

use crate::config::BannerConfig;
use std::time::Duration;

/// Animation phase of a banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    SlidingIn,
    Dwelling,
    SlidingOut,
    /// Terminal. The window has been (or must be) released.
    Closed,
}

/// Outcome of a single animation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Still sliding; the window moves to this x.
    Moved(i32),
    /// Reached the resting x; the dwell timer must be armed.
    Arrived(i32),
    /// Left the screen; the window must be released.
    Departed,
    /// Not moving (dwelling or closed). Nothing to do.
    Idle,
}

/// Motion parameters shared by every banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Motion {
    /// Pixels covered per tick.
    pub step: i32,
    /// Interval between ticks.
    pub tick: Duration,
    /// Resting time between the two slides.
    pub dwell: Duration,
    /// Gap between the resting banner and the right screen edge.
    pub margin: i32,
    /// Fixed vertical position.
    pub top: i32,
}

impl From<&BannerConfig> for Motion {
    fn from(config: &BannerConfig) -> Self {
        Self {
            step: config.step_px.max(1),
            tick: Duration::from_millis(config.tick_ms.max(1)),
            dwell: Duration::from_millis(config.dwell_ms),
            margin: config.margin_px,
            top: config.top_px,
        }
    }
}

impl Default for Motion {
    fn default() -> Self {
        Self::from(&BannerConfig::default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideBanner {
    phase: Phase,
    x: i32,
    y: i32,
    final_x: i32,
    screen_width: i32,
    step: i32,
}

impl SlideBanner {
    /// Creates a banner just past the right screen edge, about to slide in.
    #[must_use]
    pub fn new(screen_width: i32, banner_width: i32, motion: &Motion) -> Self {
        Self {
            phase: Phase::SlidingIn,
            x: screen_width,
            y: motion.top,
            final_x: screen_width
                .saturating_sub(banner_width)
                .saturating_sub(motion.margin),
            screen_width,
            step: motion.step.max(1),
        }
    }

    /// Advances the animation by one tick.
    pub fn tick(&mut self) -> Step {
        match self.phase {
            Phase::SlidingIn => {
                self.x = self.x.saturating_sub(self.step);
                if self.x <= self.final_x {
                    self.x = self.final_x;
                    self.phase = Phase::Dwelling;
                    Step::Arrived(self.x)
                } else {
                    Step::Moved(self.x)
                }
            }
            Phase::SlidingOut => {
                self.x = self.x.saturating_add(self.step);
                if self.x >= self.screen_width {
                    self.phase = Phase::Closed;
                    Step::Departed
                } else {
                    Step::Moved(self.x)
                }
            }
            Phase::Dwelling | Phase::Closed => Step::Idle,
        }
    }

    /// Ends the dwell and starts sliding out.
    ///
    /// Returns `false` (and changes nothing) outside the `Dwelling` phase, so
    /// a late timer cannot revive a closed banner.
    pub fn finish_dwell(&mut self) -> bool {
        if self.phase == Phase::Dwelling {
            self.phase = Phase::SlidingOut;
            true
        } else {
            false
        }
    }

    /// Closes the banner immediately, whatever its phase.
    ///
    /// Returns `true` if the banner was still open.
    pub fn close(&mut self) -> bool {
        let was_open = self.phase != Phase::Closed;
        self.phase = Phase::Closed;
        was_open
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current top-left corner in screen pixels.
    #[must_use]
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    #[must_use]
    pub fn final_x(&self) -> i32 {
        self.final_x
    }

    /// Whether the banner needs animation ticks.
    #[must_use]
    pub fn is_moving(&self) -> bool {
        matches!(self.phase, Phase::SlidingIn | Phase::SlidingOut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN_WIDTH: i32 = 1920;
    const BANNER_WIDTH: i32 = 280;

    fn banner() -> SlideBanner {
        SlideBanner::new(SCREEN_WIDTH, BANNER_WIDTH, &Motion::default())
    }

    /// Ticks until the banner stops moving, returning every step taken.
    fn run_phase(banner: &mut SlideBanner) -> Vec<Step> {
        let mut steps = Vec::new();
        while banner.is_moving() {
            steps.push(banner.tick());
            assert!(steps.len() < 10_000, "animation never settles");
        }
        steps
    }

    #[test]
    fn starts_off_screen_sliding_in() {
        let banner = banner();
        assert_eq!(banner.phase(), Phase::SlidingIn);
        assert_eq!(banner.position(), (SCREEN_WIDTH, 50));
        assert_eq!(banner.final_x(), SCREEN_WIDTH - BANNER_WIDTH - 20);
    }

    #[test]
    fn slide_in_tick_count_is_ceiling_of_distance_over_step() {
        let mut banner = banner();
        let distance = SCREEN_WIDTH - banner.final_x();
        let expected = (distance + 7) / 8;

        let steps = run_phase(&mut banner);

        assert_eq!(steps.len() as i32, expected);
        assert_eq!(steps.last(), Some(&Step::Arrived(banner.final_x())));
        assert_eq!(banner.phase(), Phase::Dwelling);
    }

    #[test]
    fn slide_in_clamps_to_final_x_without_overshoot() {
        // 300px is not a multiple of 8, so the last step would overshoot by 4px
        let mut banner = banner();
        let steps = run_phase(&mut banner);

        for step in &steps {
            if let Step::Moved(x) | Step::Arrived(x) = step {
                assert!(*x >= banner.final_x() && *x <= SCREEN_WIDTH);
            }
        }
        assert_eq!(banner.position().0, banner.final_x());
    }

    #[test]
    fn slide_in_is_monotonic() {
        let mut banner = banner();
        let xs: Vec<i32> = run_phase(&mut banner)
            .into_iter()
            .filter_map(|step| match step {
                Step::Moved(x) | Step::Arrived(x) => Some(x),
                _ => None,
            })
            .collect();

        assert!(xs.windows(2).all(|pair| pair[1] < pair[0]));
    }

    #[test]
    fn dwelling_ignores_ticks() {
        let mut banner = banner();
        run_phase(&mut banner);
        let resting = banner.position();

        for _ in 0..50 {
            assert_eq!(banner.tick(), Step::Idle);
        }
        assert_eq!(banner.position(), resting);
    }

    #[test]
    fn slide_out_ends_at_screen_edge_then_stays_idle() {
        let mut banner = banner();
        run_phase(&mut banner);
        assert!(banner.finish_dwell());

        let steps = run_phase(&mut banner);
        let (moves, last) = steps.split_at(steps.len() - 1);

        assert_eq!(last, &[Step::Departed]);
        assert!(moves
            .iter()
            .all(|step| matches!(step, Step::Moved(x) if *x < SCREEN_WIDTH)));
        assert_eq!(banner.phase(), Phase::Closed);
        assert_eq!(banner.tick(), Step::Idle);
    }

    #[test]
    fn slide_out_is_monotonic() {
        let mut banner = banner();
        run_phase(&mut banner);
        banner.finish_dwell();

        let xs: Vec<i32> = run_phase(&mut banner)
            .into_iter()
            .filter_map(|step| match step {
                Step::Moved(x) => Some(x),
                _ => None,
            })
            .collect();

        assert!(xs.windows(2).all(|pair| pair[1] > pair[0]));
    }

    #[test]
    fn finish_dwell_only_applies_while_dwelling() {
        let mut banner = banner();
        assert!(!banner.finish_dwell());
        assert_eq!(banner.phase(), Phase::SlidingIn);

        banner.close();
        assert!(!banner.finish_dwell());
        assert_eq!(banner.phase(), Phase::Closed);
    }

    #[test]
    fn close_short_circuits_every_phase() {
        let mut sliding_in = banner();
        sliding_in.tick();
        assert!(sliding_in.close());

        let mut dwelling = banner();
        run_phase(&mut dwelling);
        assert!(dwelling.close());

        let mut sliding_out = banner();
        run_phase(&mut sliding_out);
        sliding_out.finish_dwell();
        sliding_out.tick();
        assert!(sliding_out.close());

        for mut banner in [sliding_in, dwelling, sliding_out] {
            let frozen = banner.position();
            assert_eq!(banner.phase(), Phase::Closed);
            assert_eq!(banner.tick(), Step::Idle);
            assert_eq!(banner.position(), frozen);
        }
    }

    #[test]
    fn closing_twice_reports_once() {
        let mut banner = banner();
        assert!(banner.close());
        assert!(!banner.close());
    }

    #[test]
    fn banner_wider_than_gap_arrives_on_first_tick() {
        let motion = Motion {
            step: 500,
            ..Motion::default()
        };
        let mut banner = SlideBanner::new(SCREEN_WIDTH, BANNER_WIDTH, &motion);
        assert_eq!(banner.tick(), Step::Arrived(banner.final_x()));
    }

    #[test]
    fn motion_from_config_clamps_step_and_tick() {
        let config = BannerConfig {
            step_px: 0,
            tick_ms: 0,
            ..BannerConfig::default()
        };
        let motion = Motion::from(&config);
        assert_eq!(motion.step, 1);
        assert_eq!(motion.tick, Duration::from_millis(1));
    }
}
