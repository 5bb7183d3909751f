//! Time-based score reveal.
//!
//! The displayed value depends only on elapsed wall-clock time, so the reveal
//! takes the same duration at any frame rate. Each animation carries an id;
//! frames addressed to a superseded id are dropped by the caller, which is how
//! a new render cancels the previous reveal.

/// Duration of the reveal in milliseconds.
pub const SCORE_REVEAL_MS: u64 = 1500;

pub type AnimationId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreAnimation {
    id: AnimationId,
    target: u32,
    started_at_ms: Option<u64>,
    displayed: u32,
    finished: bool,
}

impl ScoreAnimation {
    /// Starts a reveal towards `target`. Negative targets are treated as 0 and
    /// a zero target is complete immediately.
    pub fn start(id: AnimationId, target: i64) -> Self {
        let target = u32::try_from(target.max(0)).unwrap_or(u32::MAX);
        Self {
            id,
            target,
            started_at_ms: None,
            displayed: 0,
            finished: target == 0,
        }
    }

    pub fn id(&self) -> AnimationId {
        self.id
    }

    pub fn displayed(&self) -> u32 {
        self.displayed
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advances to the frame at `now_ms`. The first frame fixes the start time.
    pub fn advance(&mut self, now_ms: u64) -> FrameOutcome {
        if self.finished {
            return FrameOutcome::Finished;
        }
        let started = *self.started_at_ms.get_or_insert(now_ms);
        let elapsed = now_ms.saturating_sub(started);
        self.displayed = sample(self.target, elapsed);
        if elapsed >= SCORE_REVEAL_MS {
            self.finished = true;
            FrameOutcome::Finished
        } else {
            FrameOutcome::Continue
        }
    }

    /// Stops the reveal where it is.
    pub fn cancel(&mut self) {
        self.finished = true;
    }
}

/// `floor(progress * target)` with `progress = min(elapsed / duration, 1)`.
pub fn sample(target: u32, elapsed_ms: u64) -> u32 {
    let elapsed = elapsed_ms.min(SCORE_REVEAL_MS);
    let value = u64::from(target) * elapsed / SCORE_REVEAL_MS;
    // value <= target, so it fits.
    value as u32
}

#[cfg(test)]
mod tests {
    use super::{sample, FrameOutcome, ScoreAnimation, SCORE_REVEAL_MS};

    #[test]
    fn sample_is_linear_and_clamped() {
        assert_eq!(sample(76, 0), 0);
        assert_eq!(sample(76, 750), 38);
        assert_eq!(sample(76, SCORE_REVEAL_MS), 76);
        assert_eq!(sample(76, SCORE_REVEAL_MS * 4), 76);
        assert_eq!(sample(3, 1000), 2);
    }

    #[test]
    fn reveal_is_monotonic_and_lands_on_target() {
        let mut animation = ScoreAnimation::start(1, 93);
        let mut last = 0;
        let mut now = 10_000;
        loop {
            let outcome = animation.advance(now);
            assert!(animation.displayed() >= last);
            last = animation.displayed();
            if outcome == FrameOutcome::Finished {
                break;
            }
            now += 17;
        }
        assert_eq!(animation.displayed(), 93);
    }

    #[test]
    fn duration_does_not_depend_on_frame_rate() {
        let mut slow = ScoreAnimation::start(1, 50);
        let mut fast = ScoreAnimation::start(2, 50);
        slow.advance(0);
        fast.advance(0);
        for t in (0..=700).step_by(7) {
            fast.advance(t);
        }
        slow.advance(700);
        assert_eq!(slow.displayed(), fast.displayed());
    }

    #[test]
    fn zero_target_finishes_immediately() {
        let mut animation = ScoreAnimation::start(1, 0);
        assert!(animation.is_finished());
        assert_eq!(animation.displayed(), 0);
        assert_eq!(animation.advance(5), FrameOutcome::Finished);
    }

    #[test]
    fn negative_target_is_clamped() {
        let animation = ScoreAnimation::start(1, -12);
        assert!(animation.is_finished());
        assert_eq!(animation.displayed(), 0);
    }

    #[test]
    fn cancel_freezes_displayed_value() {
        let mut animation = ScoreAnimation::start(1, 80);
        animation.advance(0);
        animation.advance(750);
        animation.cancel();
        assert_eq!(animation.advance(1500), FrameOutcome::Finished);
        assert_eq!(animation.displayed(), 40);
    }
}
