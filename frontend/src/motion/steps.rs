/// Maps a progress scalar onto one of `count` discrete steps.
///
/// Always lands in `0..count`: `p = 1.0` selects the last step, never one
/// past it. Progress outside `[0, 1]` is clamped and NaN counts as zero.
pub fn active_index(progress: f64, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let progress = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    };
    ((progress * count as f64).floor() as usize).min(count - 1)
}

/// Where an item sits relative to the active step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepState {
    Future,
    Active,
    Past,
}

impl StepState {
    pub fn of(index: usize, active: usize) -> Self {
        use std::cmp::Ordering::*;
        match index.cmp(&active) {
            Less => StepState::Past,
            Equal => StepState::Active,
            Greater => StepState::Future,
        }
    }

    /// Active or already passed.
    pub fn is_reached(self) -> bool {
        !matches!(self, StepState::Future)
    }

    pub fn class(self) -> &'static str {
        match self {
            StepState::Future => "is-future",
            StepState::Active => "is-active",
            StepState::Past => "is-past",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_points() {
        assert_eq!(active_index(0.0, 5), 0);
        assert_eq!(active_index(0.19, 5), 0);
        assert_eq!(active_index(0.2, 5), 1);
        assert_eq!(active_index(0.99, 5), 4);
        assert_eq!(active_index(1.0, 5), 4);
    }

    #[test]
    fn stays_in_range_and_never_decreases() {
        for count in 1..=12 {
            let mut last = 0;
            for step in 0..=1000 {
                let p = step as f64 / 1000.0;
                let index = active_index(p, count);
                assert!(index < count, "p={} count={} index={}", p, count, index);
                assert!(index >= last, "p={} went back from {} to {}", p, last, index);
                last = index;
            }
            assert_eq!(last, count - 1);
        }
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        assert_eq!(active_index(-0.5, 4), 0);
        assert_eq!(active_index(3.0, 4), 3);
        assert_eq!(active_index(f64::NAN, 4), 0);
        assert_eq!(active_index(f64::INFINITY, 4), 3);
        assert_eq!(active_index(0.5, 0), 0);
    }

    #[test]
    fn single_item_is_always_active() {
        for p in [0.0, 0.3, 1.0] {
            assert_eq!(active_index(p, 1), 0);
        }
    }

    #[test]
    fn step_states_follow_the_active_index() {
        let states: Vec<_> = (0..5).map(|i| StepState::of(i, 0)).collect();
        assert_eq!(states[0], StepState::Active);
        assert!(states[1..].iter().all(|s| *s == StepState::Future));

        let states: Vec<_> = (0..5).map(|i| StepState::of(i, active_index(1.0, 5))).collect();
        assert!(states[..4].iter().all(|s| *s == StepState::Past));
        assert_eq!(states[4], StepState::Active);

        assert!(StepState::Past.is_reached());
        assert!(StepState::Active.is_reached());
        assert!(!StepState::Future.is_reached());
        assert_eq!(StepState::Active.class(), "is-active");
    }
}
