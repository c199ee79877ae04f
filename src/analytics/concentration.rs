//! Distribution-concentration indices for a tag counter
//!
//! Both indices live in `[0, 1]` and degrade to 0 for an empty counter, so
//! an empty window never produces NaN or Infinity.

use serde::{Deserialize, Serialize};

use super::counting::KeyCounter;

/// Concentration indices of one window's tag distribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Concentration {
    /// Herfindahl-Hirschman Index: sum of squared shares, rounded to 3
    /// decimals. Approaches 1 only as the distribution concentrates onto a
    /// single key.
    pub hhi: f64,

    /// Fraction of the total held by the three largest keys, rounded to 2
    /// decimals
    pub top3_share: f64,
}

/// Compute both indices for a tag counter
pub fn measure(counter: &KeyCounter) -> Concentration {
    Concentration {
        hhi: hhi(counter),
        top3_share: top3_share(counter),
    }
}

/// `round(Σ (count / total)² × 1000) / 1000`; 0 when the counter is empty
pub fn hhi(counter: &KeyCounter) -> f64 {
    let total = counter.total();
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    let sum: f64 = counter
        .iter()
        .map(|(_, count)| {
            let share = count as f64 / total;
            share * share
        })
        .sum();
    (sum * 1000.0).round() / 1000.0
}

/// Share of the top 3 counts (or fewer), rounded to 2 decimals; 0 when the
/// counter is empty
pub fn top3_share(counter: &KeyCounter) -> f64 {
    let total = counter.total();
    if total == 0 {
        return 0.0;
    }
    let mut counts = counter.counts();
    counts.sort_unstable_by(|a, b| b.cmp(a));
    let top3: u64 = counts.iter().take(3).sum();
    ((top3 as f64 / total as f64) * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter(entries: &[(&str, u64)]) -> KeyCounter {
        let mut counter = KeyCounter::new();
        for (key, count) in entries {
            for _ in 0..*count {
                counter.increment(key);
            }
        }
        counter
    }

    #[test]
    fn test_empty_counter_is_zero() {
        let empty = KeyCounter::new();
        assert_eq!(hhi(&empty), 0.0);
        assert_eq!(top3_share(&empty), 0.0);
    }

    #[test]
    fn test_single_key_monopoly() {
        let single = counter(&[("only", 5)]);
        assert_eq!(hhi(&single), 1.0);
        assert_eq!(top3_share(&single), 1.0);
    }

    #[test]
    fn test_even_distribution() {
        let even = counter(&[("a", 1), ("b", 1), ("c", 1), ("d", 1)]);
        // 4 × (1/4)² = 0.25
        assert_eq!(hhi(&even), 0.25);
        assert_eq!(top3_share(&even), 0.75);
    }

    #[test]
    fn test_hhi_rounding() {
        let skewed = counter(&[("a", 2), ("b", 1)]);
        // (2/3)² + (1/3)² = 0.5555.. → 0.556
        assert_eq!(hhi(&skewed), 0.556);
    }

    #[test]
    fn test_top3_with_fewer_than_three_keys() {
        let two = counter(&[("a", 3), ("b", 1)]);
        assert_eq!(top3_share(&two), 1.0);
    }

    #[test]
    fn test_top3_picks_largest() {
        let many = counter(&[("a", 4), ("b", 3), ("c", 2), ("d", 1)]);
        // (4 + 3 + 2) / 10 = 0.9
        assert_eq!(top3_share(&many), 0.9);
    }
}
