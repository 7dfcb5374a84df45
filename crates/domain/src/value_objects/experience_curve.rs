//! Accumulating polynomial XP curve.

use serde::{Deserialize, Serialize};

/// XP needed to advance from `level` to `level + 1` is
/// `round(base_multiplier * level^exponent)`; the XP required to *reach* a
/// level is the running sum of those steps.
///
/// [`min_xp_for_level`](Self::min_xp_for_level) and
/// [`level_for_xp`](Self::level_for_xp) share the same per-step integer, so
/// they agree exactly on band boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExperienceCurve {
    pub base_multiplier: f64,
    pub exponent: f64,
}

impl Default for ExperienceCurve {
    fn default() -> Self {
        Self {
            base_multiplier: 100.0,
            exponent: 1.5,
        }
    }
}

impl ExperienceCurve {
    pub fn new(base_multiplier: f64, exponent: f64) -> Self {
        Self {
            base_multiplier,
            exponent,
        }
    }

    /// XP required to go from `level` to `level + 1`.
    pub fn step_requirement(&self, level: i32) -> i64 {
        if level < 1 {
            return 0;
        }
        let raw = self.base_multiplier * f64::from(level).powf(self.exponent);
        if raw.is_finite() && raw > 0.0 {
            raw.round() as i64
        } else {
            0
        }
    }

    /// Total XP a player needs to be at `level` (0 for level 1). Saturates
    /// at `i64::MAX`.
    pub fn min_xp_for_level(&self, level: i32) -> i64 {
        let mut total = 0i64;
        for l in 1..level {
            total = total.saturating_add(self.step_requirement(l));
            if total == i64::MAX {
                break;
            }
        }
        total
    }

    /// Walks levels upward while the accumulated requirement is covered by `xp`.
    ///
    /// The result is capped at `max_level`. XP exactly on a band boundary
    /// belongs to the higher level.
    pub fn level_for_xp(&self, xp: i64, max_level: i32) -> i32 {
        let mut level = 1;
        let mut accumulated = 0i64;
        while level < max_level {
            let next = accumulated.saturating_add(self.step_requirement(level));
            if next > xp {
                break;
            }
            accumulated = next;
            level += 1;
        }
        level
    }

    /// `[min_xp(level), min_xp(level + 1))` as a pair.
    pub fn band(&self, level: i32) -> (i64, i64) {
        (
            self.min_xp_for_level(level),
            self.min_xp_for_level(level.saturating_add(1)),
        )
    }
}
