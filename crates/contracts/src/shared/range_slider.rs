//! Dual-thumb range slider, independent of any rendering layer.
//!
//! The widget feeds pointer positions in, reads thumb positions out, and
//! forwards the [`SliderCommit`]s returned by [`RangeSlider::release`] to
//! whatever owns the committed range.
//!
//! ```text
//! Idle --press_thumb/press_track--> Dragging(thumb) --move_to--> Dragging(thumb)
//!   ^                                      |
//!   +------------- release (commit) -------+
//! ```

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SliderConfig {
    /// Non-positive or non-finite steps fall back to 1; reversed bounds are
    /// swapped.
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        let (min, max) = if max < min { (max, min) } else { (min, max) };
        let step = if step.is_finite() && step > 0.0 { step } else { 1.0 };
        Self { min, max, step }
    }

    /// Round to the nearest multiple of `step` counted from `min`, inside
    /// `[min, max]`.
    pub fn snap(&self, raw: f64) -> f64 {
        let raw = if raw.is_finite() { raw } else { self.min };
        let clamped = raw.clamp(self.min, self.max);
        let mut value = self.min + ((clamped - self.min) / self.step).round() * self.step;
        if value > self.max {
            value -= self.step;
        }
        value.max(self.min)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Thumb {
    Lo,
    Hi,
}

impl Thumb {
    pub fn index(&self) -> usize {
        match self {
            Thumb::Lo => 0,
            Thumb::Hi => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging(Thumb),
}

/// One changed side, reported when a drag ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderCommit {
    pub thumb: Thumb,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RangeSlider {
    config: SliderConfig,
    committed: [f64; 2],
    local: [f64; 2],
    drag: DragState,
}

impl RangeSlider {
    pub fn new(config: SliderConfig, lo: f64, hi: f64) -> Self {
        let range = Self::normalize(&config, lo, hi);
        Self {
            config,
            committed: range,
            local: range,
            drag: DragState::Idle,
        }
    }

    /// Snap both ends and pull them at least one step apart.
    fn normalize(config: &SliderConfig, lo: f64, hi: f64) -> [f64; 2] {
        let (lo, hi) = if hi < lo { (hi, lo) } else { (lo, hi) };
        let mut lo = config.snap(lo);
        let mut hi = config.snap(hi);
        if hi - lo < config.step {
            if lo + config.step <= config.max {
                hi = lo + config.step;
            } else {
                hi = config.max;
                lo = config.snap(hi - config.step);
            }
        }
        [lo, hi]
    }

    pub fn config(&self) -> SliderConfig {
        self.config
    }

    pub fn committed(&self) -> (f64, f64) {
        (self.committed[0], self.committed[1])
    }

    /// Values shown while dragging; equal to `committed` when idle.
    pub fn local(&self) -> (f64, f64) {
        (self.local[0], self.local[1])
    }

    pub fn value(&self, thumb: Thumb) -> f64 {
        self.local[thumb.index()]
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag != DragState::Idle
    }

    /// Thumb offset along the track, 0.0..=100.0.
    pub fn position_percent(&self, thumb: Thumb) -> f64 {
        let span = self.config.max - self.config.min;
        if span <= 0.0 {
            return 0.0;
        }
        (self.value(thumb) - self.config.min) / span * 100.0
    }

    /// Snapped value under a pointer `offset` pixels from the track's left
    /// edge. Offsets outside the track clamp to its ends.
    pub fn value_at(&self, offset: f64, track_width: f64) -> f64 {
        if !(track_width > 0.0) || !offset.is_finite() {
            return self.config.min;
        }
        let ratio = (offset / track_width).clamp(0.0, 1.0);
        self.config
            .snap(self.config.min + ratio * (self.config.max - self.config.min))
    }

    /// Pointer/touch down on a thumb: start dragging from its current value.
    pub fn press_thumb(&mut self, thumb: Thumb) {
        self.drag = DragState::Dragging(thumb);
    }

    /// Click on the bare track: the nearer thumb (the lower one on a tie)
    /// jumps to `value` and keeps following the pointer.
    pub fn press_track(&mut self, value: f64) -> Thumb {
        let to_lo = (value - self.local[0]).abs();
        let to_hi = (value - self.local[1]).abs();
        let thumb = if to_hi < to_lo { Thumb::Hi } else { Thumb::Lo };
        self.drag = DragState::Dragging(thumb);
        self.move_to(value);
        thumb
    }

    /// Move the dragged thumb. Returns whether the local range changed.
    /// Ignored while idle.
    pub fn move_to(&mut self, value: f64) -> bool {
        let DragState::Dragging(thumb) = self.drag else {
            return false;
        };
        let snapped = self.config.snap(value);
        let step = self.config.step;
        let next = match thumb {
            Thumb::Lo => snapped.min(self.local[1] - step).max(self.config.min),
            Thumb::Hi => snapped.max(self.local[0] + step).min(self.config.max),
        };
        let slot = &mut self.local[thumb.index()];
        if *slot == next {
            return false;
        }
        *slot = next;
        true
    }

    /// End the interaction: the local range becomes the committed one and
    /// each side that moved is reported once.
    pub fn release(&mut self) -> Vec<SliderCommit> {
        if self.drag == DragState::Idle {
            return Vec::new();
        }
        self.drag = DragState::Idle;

        let commits = [Thumb::Lo, Thumb::Hi]
            .into_iter()
            .filter(|t| self.local[t.index()] != self.committed[t.index()])
            .map(|t| SliderCommit {
                thumb: t,
                value: self.local[t.index()],
            })
            .collect();
        self.committed = self.local;
        commits
    }

    /// Adopt a range set from outside (e.g. "reset all"). Ignored while a
    /// drag is in progress; returns whether anything changed.
    pub fn sync(&mut self, lo: f64, hi: f64) -> bool {
        if self.is_dragging() {
            return false;
        }
        let range = Self::normalize(&self.config, lo, hi);
        if range == self.committed {
            return false;
        }
        self.committed = range;
        self.local = range;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn percent_slider() -> RangeSlider {
        RangeSlider::new(SliderConfig::new(0.0, 100.0, 5.0), 0.0, 100.0)
    }

    #[test]
    fn test_snap_rounds_from_min() {
        let cfg = SliderConfig::new(0.0, 100.0, 5.0);
        assert_eq!(cfg.snap(53.0), 55.0);
        assert_eq!(cfg.snap(52.4), 50.0);
        assert_eq!(cfg.snap(-20.0), 0.0);
        assert_eq!(cfg.snap(140.0), 100.0);

        let offset = SliderConfig::new(1.0, 65.0, 5.0);
        assert_eq!(offset.snap(8.0), 6.0);
        // 66 would overshoot max
        assert_eq!(offset.snap(64.0), 61.0);
    }

    #[test]
    fn test_config_fallbacks() {
        let cfg = SliderConfig::new(10.0, 0.0, 0.0);
        assert_eq!(cfg, SliderConfig::new(0.0, 10.0, 1.0));
        assert_eq!(SliderConfig::new(0.0, 10.0, f64::NAN).step, 1.0);
    }

    #[test]
    fn test_drag_snaps_and_commits() {
        let mut slider = percent_slider();
        slider.press_thumb(Thumb::Lo);
        assert!(slider.move_to(53.0));
        assert_eq!(slider.local(), (55.0, 100.0));
        // not committed until release
        assert_eq!(slider.committed(), (0.0, 100.0));

        let commits = slider.release();
        assert_eq!(
            commits,
            vec![SliderCommit {
                thumb: Thumb::Lo,
                value: 55.0
            }]
        );
        assert_eq!(slider.committed(), (55.0, 100.0));
        assert_eq!(slider.drag_state(), DragState::Idle);
    }

    #[test]
    fn test_thumbs_never_cross() {
        let mut slider = RangeSlider::new(SliderConfig::new(0.0, 100.0, 5.0), 40.0, 60.0);
        slider.press_thumb(Thumb::Lo);
        slider.move_to(90.0);
        assert_eq!(slider.local(), (55.0, 60.0));
        slider.release();

        slider.press_thumb(Thumb::Hi);
        slider.move_to(0.0);
        assert_eq!(slider.local(), (55.0, 60.0));
        slider.release();
        assert_eq!(slider.committed(), (55.0, 60.0));
    }

    #[test]
    fn test_non_crossing_over_many_drags() {
        let cfg = SliderConfig::new(0.0, 100.0, 5.0);
        let mut slider = RangeSlider::new(cfg, 0.0, 100.0);
        // small LCG for a reproducible pointer path
        let mut seed: u64 = 0x2545_F491_4F6C_DD1D;
        let mut next = move || {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            ((seed >> 33) % 140) as f64 - 20.0
        };

        for round in 0..200 {
            if round % 3 == 0 {
                slider.press_track(next());
            } else {
                slider.press_thumb(if round % 2 == 0 { Thumb::Lo } else { Thumb::Hi });
            }
            for _ in 0..5 {
                slider.move_to(next());
            }
            slider.release();

            let (lo, hi) = slider.committed();
            assert!(lo <= hi - cfg.step, "round {}: {} vs {}", round, lo, hi);
            assert!(lo >= cfg.min && hi <= cfg.max);
        }
    }

    #[test]
    fn test_track_click_moves_nearer_thumb() {
        let mut slider = RangeSlider::new(SliderConfig::new(0.0, 100.0, 1.0), 20.0, 80.0);
        assert_eq!(slider.press_track(70.0), Thumb::Hi);
        assert_eq!(slider.local(), (20.0, 70.0));
        slider.release();

        assert_eq!(slider.press_track(30.0), Thumb::Lo);
        assert_eq!(slider.local(), (30.0, 70.0));
        slider.release();
    }

    #[test]
    fn test_track_click_tie_moves_lower_thumb() {
        let mut slider = RangeSlider::new(SliderConfig::new(0.0, 100.0, 1.0), 40.0, 60.0);
        assert_eq!(slider.press_track(50.0), Thumb::Lo);
        assert_eq!(slider.local(), (50.0, 60.0));
    }

    #[test]
    fn test_click_on_thumb_does_not_jump() {
        let mut slider = RangeSlider::new(SliderConfig::new(0.0, 100.0, 1.0), 20.0, 80.0);
        slider.press_track(80.0);
        assert_eq!(slider.local(), (20.0, 80.0));
        assert!(slider.release().is_empty());
    }

    #[test]
    fn test_release_reports_only_changed_sides() {
        let mut slider = percent_slider();
        slider.press_thumb(Thumb::Hi);
        slider.move_to(70.0);
        slider.move_to(100.0);
        assert!(slider.release().is_empty());
        // releasing twice is harmless
        assert!(slider.release().is_empty());
    }

    #[test]
    fn test_move_while_idle_is_ignored() {
        let mut slider = percent_slider();
        assert!(!slider.move_to(30.0));
        assert_eq!(slider.local(), (0.0, 100.0));
    }

    #[test]
    fn test_value_at_and_positions() {
        let slider = RangeSlider::new(SliderConfig::new(0.0, 100.0, 5.0), 25.0, 75.0);
        assert_eq!(slider.value_at(53.0, 100.0), 55.0);
        assert_eq!(slider.value_at(-40.0, 200.0), 0.0);
        assert_eq!(slider.value_at(500.0, 200.0), 100.0);
        assert_eq!(slider.value_at(10.0, 0.0), 0.0);
        assert_eq!(slider.position_percent(Thumb::Lo), 25.0);
        assert_eq!(slider.position_percent(Thumb::Hi), 75.0);
    }

    #[test]
    fn test_initial_range_is_repaired() {
        let cfg = SliderConfig::new(0.0, 10.0, 1.0);
        assert_eq!(RangeSlider::new(cfg, 7.0, 3.0).committed(), (3.0, 7.0));
        assert_eq!(RangeSlider::new(cfg, 4.0, 4.0).committed(), (4.0, 5.0));
        assert_eq!(RangeSlider::new(cfg, 10.0, 10.0).committed(), (9.0, 10.0));
    }

    #[test]
    fn test_sync_is_ignored_while_dragging() {
        let mut slider = percent_slider();
        slider.press_thumb(Thumb::Lo);
        slider.move_to(20.0);
        assert!(!slider.sync(0.0, 100.0));
        assert_eq!(slider.local(), (20.0, 100.0));
        slider.release();

        assert!(slider.sync(0.0, 100.0));
        assert_eq!(slider.committed(), (0.0, 100.0));
        assert!(!slider.sync(0.0, 100.0));
    }
}
