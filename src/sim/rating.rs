//! Completion time ratings
//!
//! A level awards zero to three stars depending on how long the actor took
//! to reach the goal. Completion is detected once per session.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::Rect;

/// Star rating for a completed level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rating {
    Empty,
    Single,
    Double,
    Triple,
}

impl Rating {
    pub fn stars(self) -> u8 {
        match self {
            Rating::Empty => 0,
            Rating::Single => 1,
            Rating::Double => 2,
            Rating::Triple => 3,
        }
    }
}

/// Time ceilings (seconds) for each rating
///
/// The thresholds are compared independently, triple first. Ordering
/// (`triple <= double <= single`) is expected but not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingThresholds {
    pub single: f64,
    pub double: f64,
    pub triple: f64,
}

impl RatingThresholds {
    pub fn new(single: f64, double: f64, triple: f64) -> Self {
        Self {
            single,
            double,
            triple,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.single.is_finite() && self.double.is_finite() && self.triple.is_finite()
    }

    /// Rating for a completion time. Boundaries are inclusive.
    ///
    /// Negative or NaN times (clock anomalies) rate `Empty`.
    pub fn rating_for(&self, elapsed: f64) -> Rating {
        if elapsed.is_nan() || elapsed < 0.0 {
            return Rating::Empty;
        }
        if elapsed <= self.triple {
            Rating::Triple
        } else if elapsed <= self.double {
            Rating::Double
        } else if elapsed <= self.single {
            Rating::Single
        } else {
            Rating::Empty
        }
    }
}

/// Result of finishing a level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Completion {
    pub level: u32,
    pub elapsed: f64,
    pub rating: Rating,
}

/// One-shot goal detector for a single play session
#[derive(Debug, Clone, Default)]
pub struct CompletionTracker {
    start_time: Option<f64>,
    completed: Option<Completion>,
}

impl CompletionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the session start on the first observed tick
    pub fn observe_tick(&mut self, now: f64) {
        self.start_time.get_or_insert(now);
    }

    pub fn start_time(&self) -> Option<f64> {
        self.start_time
    }

    pub fn is_complete(&self) -> bool {
        self.completed.is_some()
    }

    pub fn completion(&self) -> Option<Completion> {
        self.completed
    }

    /// Returns the completion the first time `actor` is inside `goal`,
    /// and `None` on every later call.
    pub fn check(
        &mut self,
        level: u32,
        actor: Vec2,
        goal: &Rect,
        thresholds: &RatingThresholds,
        now: f64,
    ) -> Option<Completion> {
        if self.completed.is_some() || !goal.contains(actor) {
            return None;
        }
        let elapsed = now - self.start_time.unwrap_or(now);
        let completion = Completion {
            level,
            elapsed,
            rating: thresholds.rating_for(elapsed),
        };
        self.completed = Some(completion);
        Some(completion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn thresholds() -> RatingThresholds {
        RatingThresholds::new(30.0, 20.0, 10.0)
    }

    #[test]
    fn test_rating_scenarios() {
        let t = thresholds();
        assert_eq!(t.rating_for(15.0), Rating::Double);
        assert_eq!(t.rating_for(31.0), Rating::Empty);
        assert_eq!(t.rating_for(10.0), Rating::Triple);
        assert_eq!(t.rating_for(20.0), Rating::Double);
        assert_eq!(t.rating_for(30.0), Rating::Single);
    }

    #[test]
    fn test_negative_elapsed_is_empty() {
        let t = thresholds();
        assert_eq!(t.rating_for(-0.5), Rating::Empty);
        assert_eq!(t.rating_for(f64::NAN), Rating::Empty);
    }

    #[test]
    fn test_unordered_thresholds_check_triple_first() {
        // triple ceiling above double: anything under it is triple
        let t = RatingThresholds::new(5.0, 8.0, 12.0);
        assert_eq!(t.rating_for(7.0), Rating::Triple);
        assert_eq!(t.rating_for(13.0), Rating::Empty);
    }

    #[test]
    fn test_completion_fires_once() {
        let goal = Rect::centered(Vec2::new(100.0, 32.0), 44.0, 64.0);
        let mut tracker = CompletionTracker::new();
        tracker.observe_tick(2.0);
        tracker.observe_tick(3.0);
        assert_eq!(tracker.start_time(), Some(2.0));

        let outside = Vec2::new(0.0, 17.5);
        let inside = Vec2::new(100.0, 17.5);
        assert!(tracker.check(1, outside, &goal, &thresholds(), 5.0).is_none());

        let done = tracker.check(1, inside, &goal, &thresholds(), 17.0).unwrap();
        assert_eq!(done.elapsed, 15.0);
        assert_eq!(done.rating, Rating::Double);

        // Overlap persists: no second event
        assert!(tracker.check(1, inside, &goal, &thresholds(), 18.0).is_none());
        assert!(tracker.is_complete());
    }

    proptest! {
        #[test]
        fn prop_rating_is_monotonic(
            triple in 0.0f64..100.0,
            d1 in 0.0f64..100.0,
            d2 in 0.0f64..100.0,
            a in 0.0f64..400.0,
            b in 0.0f64..400.0,
        ) {
            let t = RatingThresholds::new(triple + d1 + d2, triple + d1, triple);
            let (early, late) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(t.rating_for(early) >= t.rating_for(late));
        }

        #[test]
        fn prop_rating_is_total(elapsed in proptest::num::f64::ANY) {
            let r = thresholds().rating_for(elapsed);
            prop_assert!(r.stars() <= 3);
        }
    }
}
