//! Source of the review histories that drive a topic's interval chain.
use super::sm2::PASSING_QUALITY;

/// Supplies, per topic, one review history per step of the chain.
/// Each history yields one interval, so the chain has `histories.len() + 1` dates.
pub trait ReviewPlan {
    fn histories(&self, label: &str) -> Vec<Vec<i32>>;
}

/// Simulated sequence of identical successful reviews: `[3]`, `[3, 3]`, ... up to `reviews` long.
/// Every topic gets the same chain shape regardless of how reviews actually went.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BaselinePlan {
    pub reviews: usize,
    pub score: i32,
}

impl Default for BaselinePlan {
    fn default() -> Self {
        Self {
            reviews: 5,
            score: PASSING_QUALITY,
        }
    }
}

impl ReviewPlan for BaselinePlan {
    fn histories(&self, _label: &str) -> Vec<Vec<i32>> {
        (1..=self.reviews).map(|n| vec![self.score; n]).collect()
    }
}
