//! SM-2 style interval estimation from a review history.
//!
//! The interval grows exponentially with the current streak of passing grades:
//! - Grades 0-2 reset the streak; grades 3-5 extend it
//! - A streak of 0 or 1 means the topic is not learned yet: review again in one day
//! - Otherwise `days = a * max(1.3, 2.5 + sum(b + c*q + d*q^2))^(theta * streak)`,
//!   summed over the whole history, then scaled by 3/4

use crate::error::{Result, ScheduleError};
use serde::{Deserialize, Serialize};

pub const MAX_QUALITY: i32 = 5;
pub const PASSING_QUALITY: i32 = 3;

const MIN_BASE: f64 = 1.3;
const BASE_OFFSET: f64 = 2.5;
const INTERVAL_SCALE: f64 = 0.75;

/// Tunable constants of the interval formula.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntervalParams {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub theta: f64,
}

impl Default for IntervalParams {
    fn default() -> Self {
        Self {
            a: 6.0,
            b: -0.8,
            c: 0.28,
            d: 0.02,
            theta: 0.2,
        }
    }
}

/// Length of the passing run ending at the last review.
pub fn streak(history: &[i32]) -> u32 {
    history
        .iter()
        .fold(0, |acc, &q| if q >= PASSING_QUALITY { acc + 1 } else { 0 })
}

/// Days until the next review, as text with two fraction digits ("1" while unlearned).
/// history: grades 0-5, oldest first
pub fn estimate(history: &[i32], params: &IntervalParams) -> Result<String> {
    if history.is_empty() {
        return Err(ScheduleError::InvalidHistory);
    }
    if let Some(&q) = history.iter().find(|&&q| !(0..=MAX_QUALITY).contains(&q)) {
        return Err(ScheduleError::InvalidScore(q));
    }

    let streak = streak(history);
    if streak <= 1 {
        return Ok("1".to_string());
    }

    let history_sum: f64 = history
        .iter()
        .map(|&q| {
            let q = q as f64;
            params.b + params.c * q + params.d * q * q
        })
        .sum();
    let base = (BASE_OFFSET + history_sum).max(MIN_BASE);
    let days = params.a * base.powf(params.theta * streak as f64);

    Ok(format!("{:.2}", days * INTERVAL_SCALE))
}
